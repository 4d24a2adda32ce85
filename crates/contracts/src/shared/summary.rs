//! Reductions over the filtered row set for KPI strips and dashboard cards.
//!
//! All functions take `&[&R]`, which is what `TableView::filtered` hands out.

use std::collections::BTreeSet;

pub fn sum_by<R>(rows: &[&R], f: impl Fn(&R) -> f64) -> f64 {
    rows.iter().map(|row| f(row)).sum()
}

pub fn sum_int_by<R>(rows: &[&R], f: impl Fn(&R) -> i64) -> i64 {
    rows.iter().map(|row| f(row)).sum()
}

pub fn count_where<R>(rows: &[&R], pred: impl Fn(&R) -> bool) -> usize {
    rows.iter().filter(|row| pred(row)).count()
}

pub fn distinct_count<R>(rows: &[&R], key: impl Fn(&R) -> String) -> usize {
    rows.iter().map(|row| key(row)).collect::<BTreeSet<_>>().len()
}

pub fn average(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Average rounded to the nearest integer; an empty input averages to 0.
pub fn average_rounded(values: impl IntoIterator<Item = f64>) -> i64 {
    average(values).map(|avg| avg.round() as i64).unwrap_or(0)
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        dealer: &'static str,
        units: i64,
        turnover: f64,
    }

    fn lines() -> Vec<Line> {
        vec![
            Line { dealer: "Hanoi", units: 5, turnover: 40.0 },
            Line { dealer: "Hanoi", units: 3, turnover: 61.0 },
            Line { dealer: "Da Nang", units: 0, turnover: 0.0 },
        ]
    }

    #[test]
    fn test_sums_and_counts() {
        let data = lines();
        let rows: Vec<&Line> = data.iter().collect();
        assert_eq!(sum_int_by(&rows, |l| l.units), 8);
        assert_eq!(sum_by(&rows, |l| l.turnover), 101.0);
        assert_eq!(count_where(&rows, |l| l.units == 0), 1);
        assert_eq!(distinct_count(&rows, |l| l.dealer.to_string()), 2);
    }

    #[test]
    fn test_average_rounded() {
        let data = lines();
        let rows: Vec<&Line> = data.iter().collect();
        // (40 + 61 + 0) / 3 = 33.67
        assert_eq!(average_rounded(rows.iter().map(|l| l.turnover)), 34);
        assert_eq!(average_rounded(Vec::<f64>::new()), 0);
        assert_eq!(average(vec![1.0, 2.0]), Some(1.5));
        assert_eq!(average(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1.0, 4.0), 25.0);
        assert_eq!(percent(3.0, 0.0), 0.0);
    }
}
