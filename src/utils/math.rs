/// `count / total`, or `None` when `total` is zero.
#[inline]
pub fn ratio(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64)
    }
}

/// `ln(count / total)`, or `None` when the ratio is undefined or zero.
#[inline]
pub fn log_ratio(count: u64, total: u64) -> Option<f64> {
    match ratio(count, total) {
        Some(p) if p > 0.0 => Some(p.ln()),
        _ => None,
    }
}
