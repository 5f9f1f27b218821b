//! Text rendering of a size diff
//!
//! One line per asset, names right-aligned to the longest name:
//!
//! ```text
//!  app.*******.js ⏤  24.41 KiB (+24.41 KiB)
//!      index.html ⏤  812 B
//! ```
//!
//! Sizes are colored by tier; deltas are colored by emphasis.

use crate::diff::{DeltaEmphasis, DiffEntry, SeverityTier};
use crate::fmt::{format_bytes, format_delta};
use console::{measure_text_width, Style};

/// Separator between name and size
pub const ARROW: &str = "⏤";

/// Renders diff entries into a report block
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    colors: bool,
}

impl ReportFormatter {
    /// Formatter that always emits ANSI styling
    pub fn colored() -> Self {
        Self { colors: true }
    }

    /// Formatter that never emits ANSI styling
    pub fn plain() -> Self {
        Self { colors: false }
    }

    /// Formatter following the terminal's color support and `NO_COLOR`
    pub fn for_terminal() -> Self {
        Self {
            colors: console::colors_enabled() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Whether styling is emitted
    pub fn colors(&self) -> bool {
        self.colors
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.colors)
    }

    fn tier_style(&self, tier: SeverityTier) -> Style {
        let style = self.style();
        match tier {
            SeverityTier::Critical => style.red(),
            SeverityTier::High => style.yellow(),
            SeverityTier::Medium => style.cyan(),
            SeverityTier::Low => style.green(),
        }
    }

    /// Render `entries`; empty input renders to an empty string
    ///
    /// # Examples
    ///
    /// ```
    /// use size_report::diff::DiffEntry;
    /// use size_report::report::ReportFormatter;
    ///
    /// let entries = vec![
    ///     DiffEntry::new("app.js", 0, 2048),
    ///     DiffEntry::new("index.html", 812, 812),
    /// ];
    /// let text = ReportFormatter::plain().format(&entries);
    ///
    /// assert_eq!(
    ///     text,
    ///     "     app.js ⏤  2.00 KiB (+2.00 KiB)\n index.html ⏤  812 B\n"
    /// );
    /// assert!(ReportFormatter::plain().format(&[]).is_empty());
    /// ```
    pub fn format(&self, entries: &[DiffEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| measure_text_width(&e.name))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for entry in entries {
            output.push_str(&self.format_line(entry, width));
            output.push('\n');
        }
        output
    }

    fn format_line(&self, entry: &DiffEntry, width: usize) -> String {
        let padding = " ".repeat(width - measure_text_width(&entry.name) + 1);
        let emphasis = entry.emphasis();

        let mut size_style = self.tier_style(entry.tier);
        if emphasis == DeltaEmphasis::Increase {
            size_style = size_style.bold();
        }
        let mut line = format!(
            "{}{} {}  {}",
            padding,
            entry.name,
            ARROW,
            size_style.apply_to(format_bytes(entry.size))
        );

        if entry.delta_significant {
            let delta_style = match emphasis {
                DeltaEmphasis::Increase => self.style().red(),
                DeltaEmphasis::Decrease => self.style().green(),
                DeltaEmphasis::Plain | DeltaEmphasis::None => self.style(),
            };
            line.push_str(&format!(
                " ({})",
                delta_style.apply_to(format_delta(entry.delta))
            ));
        }

        line
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::for_terminal()
    }
}
