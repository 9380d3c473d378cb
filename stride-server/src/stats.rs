//! Summary statistics over materialized result rows.
//!
//! Works on the JSON record shape the API layer already produces, so any
//! analytics view can be summarized without a per-view code path. An empty
//! result set produces empty statistics: "no data" stays distinguishable
//! from "all zeros".

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStatistics {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n-1 denominator); None with fewer
    /// than two values, which JSON renders as null.
    pub std_dev: Option<f64>,
}

/// Per-column summary statistics for the named numeric columns.
/// Columns with no finite numeric values are absent from the result.
pub fn summarize(rows: &[Value], columns: &[&str]) -> BTreeMap<String, FieldStatistics> {
    let mut stats = BTreeMap::new();

    for column in columns {
        let values = numeric_column(rows, column);
        if let Some(field_stats) = describe(&values) {
            stats.insert((*column).to_string(), field_stats);
        }
    }

    stats
}

/// Per-group arithmetic mean of each named numeric column, keyed as
/// column -> group value -> mean. Returns None when the group column
/// never appears.
pub fn grouped_means(
    rows: &[Value],
    group_column: &str,
    columns: &[&str],
) -> Option<BTreeMap<String, BTreeMap<String, f64>>> {
    let mut groups: BTreeMap<String, Vec<&Value>> = BTreeMap::new();
    for row in rows {
        let key = match row.get(group_column) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => continue,
            Some(other) => other.to_string(),
        };
        groups.entry(key).or_default().push(row);
    }

    if groups.is_empty() {
        return None;
    }

    let mut result: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for column in columns {
        let mut per_group = BTreeMap::new();
        for (key, members) in &groups {
            let values: Vec<f64> = members
                .iter()
                .filter_map(|row| row.get(*column).and_then(Value::as_f64))
                .filter(|v| v.is_finite())
                .collect();
            if !values.is_empty() {
                per_group.insert(key.clone(), mean(&values));
            }
        }
        if !per_group.is_empty() {
            result.insert((*column).to_string(), per_group);
        }
    }

    Some(result)
}

fn numeric_column(rows: &[Value], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| row.get(column).and_then(Value::as_f64))
        .filter(|v| v.is_finite())
        .collect()
}

fn describe(values: &[f64]) -> Option<FieldStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(FieldStatistics {
        mean: mean(values),
        median: median(&sorted),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: std_dev(values),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an already-sorted slice; midpoint average for even counts.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

fn std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"username": "ada", "total_distance": 10.0, "status": "Active"}),
            json!({"username": "bo", "total_distance": 20.0, "status": "Active"}),
            json!({"username": "cy", "total_distance": 30.0, "status": "Beginner"}),
            json!({"username": "di", "total_distance": 40.0, "status": "Beginner"}),
        ]
    }

    #[test]
    fn summarize_computes_all_five_statistics() {
        let stats = summarize(&rows(), &["total_distance"]);
        let s = &stats["total_distance"];
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.median, 25.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 40.0);
        // sample std dev of {10,20,30,40}
        let expected = (1000.0f64 / 3.0).sqrt();
        assert!((s.std_dev.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn median_of_odd_count_is_middle_value() {
        let rows = vec![
            json!({"x": 1.0}),
            json!({"x": 100.0}),
            json!({"x": 2.0}),
        ];
        let stats = summarize(&rows, &["x"]);
        assert_eq!(stats["x"].median, 2.0);
    }

    #[test]
    fn single_value_has_undefined_std_dev() {
        let rows = vec![json!({"x": 7.0})];
        let stats = summarize(&rows, &["x"]);
        let s = &stats["x"];
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.std_dev, None);
        // None must serialize as null, not be dropped or zero-filled
        let rendered = serde_json::to_value(s).unwrap();
        assert_eq!(rendered["std_dev"], Value::Null);
    }

    #[test]
    fn empty_rows_produce_empty_statistics() {
        let stats = summarize(&[], &["total_distance"]);
        assert!(stats.is_empty());
    }

    #[test]
    fn non_numeric_columns_are_skipped() {
        let stats = summarize(&rows(), &["username", "total_distance", "missing"]);
        assert_eq!(stats.len(), 1);
        assert!(stats.contains_key("total_distance"));
    }

    #[test]
    fn grouped_means_average_within_each_group() {
        let grouped = grouped_means(&rows(), "status", &["total_distance"]).unwrap();
        let by_status = &grouped["total_distance"];
        assert_eq!(by_status["Active"], 15.0);
        assert_eq!(by_status["Beginner"], 35.0);
    }

    #[test]
    fn grouped_means_without_group_column_is_none() {
        assert_eq!(grouped_means(&rows(), "tier", &["total_distance"]), None);
        assert_eq!(grouped_means(&[], "status", &["total_distance"]), None);
    }
}
