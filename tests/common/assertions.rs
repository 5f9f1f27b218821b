//! Test assertion helpers for rendered reports

/// Assert that every line of a report has the same column for the arrow
#[allow(dead_code)]
pub fn assert_arrows_aligned(report: &str) {
    let columns: Vec<usize> = report
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.find('⏤')
                .unwrap_or_else(|| panic!("line without arrow: {:?}", line))
        })
        .collect();
    assert!(
        columns.windows(2).all(|w| w[0] == w[1]),
        "Arrows not aligned: {:?}\n{}",
        columns,
        report
    );
}
