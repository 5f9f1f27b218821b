//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for rendered reports
//! - Build output fixture creation
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::BuildOutput;
//!
//! fn test_report() {
//!     let build = BuildOutput::new().unwrap();
//!     build.write("app.3f2a9c1.js", "console.log(1)").unwrap();
//! }
//! ```

pub mod assertions;
pub mod fixtures;
