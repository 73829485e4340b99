//! Descriptive statistics of whole-day series.
//!
//! Every function returns `None` when the input cannot carry the statistic
//! instead of dividing by zero.

/// Arithmetic mean. `None` if empty.
pub fn mean(days: &[i64]) -> Option<f64> {
    if days.is_empty() {
        return None;
    }
    let sum: i64 = days.iter().sum();
    Some(sum as f64 / days.len() as f64)
}

/// Sample variance with N-1 denominator. `None` with fewer than 2 values.
pub fn variance(days: &[i64]) -> Option<f64> {
    if days.len() < 2 {
        return None;
    }
    let m = mean(days)?;
    let ss: f64 = days.iter().map(|&d| (d as f64 - m).powi(2)).sum();
    Some(ss / (days.len() - 1) as f64)
}

/// Sample standard deviation with N-1 denominator. `None` with fewer than 2
/// values.
pub fn sd(days: &[i64]) -> Option<f64> {
    variance(days).map(f64::sqrt)
}

/// Median; for even length, the mean of the middle two values. Input need
/// not be sorted.
pub fn median(days: &[i64]) -> Option<f64> {
    if days.is_empty() {
        return None;
    }
    let mut sorted = days.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    Some(if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
    })
}

/// Fraction of elements satisfying `pred`, in `[0, 1]`. `None` if empty.
pub fn fraction_where<T>(data: &[T], pred: impl Fn(&T) -> bool) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let hits = data.iter().filter(|x| pred(x)).count();
    Some(hits as f64 / data.len() as f64)
}
