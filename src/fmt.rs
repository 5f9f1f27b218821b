//! Shared formatting utilities for size display

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use size_report::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KiB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a signed byte delta with an explicit leading sign
///
/// # Examples
///
/// ```
/// use size_report::fmt::format_delta;
///
/// assert_eq!(format_delta(2048), "+2.00 KiB");
/// assert_eq!(format_delta(-50), "-50 B");
/// assert_eq!(format_delta(0), "0 B");
/// ```
pub fn format_delta(delta: i64) -> String {
    let magnitude = format_bytes(delta.unsigned_abs());
    match delta.signum() {
        1 => format!("+{}", magnitude),
        -1 => format!("-{}", magnitude),
        _ => magnitude,
    }
}
