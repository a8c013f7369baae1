//! Sales Aggregator Module
//! Read-only summary queries over the cleaned sales table.

use polars::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

/// Upper bound on entries returned by each ranked query.
pub const TOP_N: usize = 10;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Computes the report's descriptive aggregates. Every query is a pure
/// read over the cleaned table.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Row count per category, highest first.
    ///
    /// Categories are grouped in first-appearance order and the sort is
    /// stable, so equal counts keep that order. Null categories are not
    /// counted.
    pub fn category_counts(
        df: &DataFrame,
        limit: usize,
    ) -> Result<Vec<(String, u32)>, AggregateError> {
        let mut order: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<u32> = Vec::new();

        for value in df.column("category")?.str()?.into_iter() {
            let Some(category) = value else { continue };
            match index.get(category) {
                Some(&i) => counts[i] += 1,
                None => {
                    index.insert(category.to_string(), order.len());
                    order.push(category.to_string());
                    counts.push(1);
                }
            }
        }

        let mut entries: Vec<(String, u32)> = order.into_iter().zip(counts).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        Ok(entries)
    }

    /// Arithmetic mean rating per category, highest first.
    pub fn category_mean_rating(
        df: &DataFrame,
        limit: usize,
    ) -> Result<Vec<(String, f64)>, AggregateError> {
        let categories = df.column("category")?.str()?.clone();
        let ratings = df.column("rating")?.f64()?.clone();

        let mut order: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut sums: Vec<(f64, u32)> = Vec::new();

        for i in 0..df.height() {
            let (Some(category), Some(rating)) = (categories.get(i), ratings.get(i)) else {
                continue;
            };
            match index.get(category) {
                Some(&pos) => {
                    sums[pos].0 += rating;
                    sums[pos].1 += 1;
                }
                None => {
                    index.insert(category.to_string(), order.len());
                    order.push(category.to_string());
                    sums.push((rating, 1));
                }
            }
        }

        let mut entries: Vec<(String, f64)> = order
            .into_iter()
            .zip(sums)
            .map(|(category, (sum, n))| (category, sum / n as f64))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries.truncate(limit);
        Ok(entries)
    }

    /// The `limit` products with the fewest reviews, ascending.
    pub fn least_reviewed(
        df: &DataFrame,
        limit: usize,
    ) -> Result<Vec<(String, f64)>, AggregateError> {
        Self::bottom_rows(df, "rating_count", limit)
    }

    /// The `limit` worst-rated products, ascending.
    pub fn lowest_rated(
        df: &DataFrame,
        limit: usize,
    ) -> Result<Vec<(String, f64)>, AggregateError> {
        Self::bottom_rows(df, "rating", limit)
    }

    /// Rows sorted ascending on `key_column`, first `limit` kept.
    /// The sort is stable, so ties keep original row order.
    fn bottom_rows(
        df: &DataFrame,
        key_column: &str,
        limit: usize,
    ) -> Result<Vec<(String, f64)>, AggregateError> {
        let names = df.column("product_name")?.str()?.clone();
        let keys = df.column(key_column)?.f64()?.clone();

        let mut rows: Vec<(String, f64)> = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let Some(key) = keys.get(i) else { continue };
            let name = names.get(i).unwrap_or_default().to_string();
            rows.push((name, key));
        }

        rows.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        rows.truncate(limit);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(categories: Vec<&str>, ratings: Vec<f64>, rating_counts: Vec<f64>) -> DataFrame {
        let names: Vec<String> = (0..categories.len())
            .map(|i| format!("Product {i}"))
            .collect();

        DataFrame::new(vec![
            Column::new("category".into(), categories),
            Column::new("product_name".into(), names),
            Column::new("rating".into(), ratings),
            Column::new("rating_count".into(), rating_counts),
        ])
        .unwrap()
    }

    #[test]
    fn category_counts_descending_with_stable_ties() {
        let df = table(
            vec!["Audio", "Cables", "Cables", "Home", "Audio", "Office"],
            vec![4.0; 6],
            vec![1.0; 6],
        );

        let counts = SalesAggregator::category_counts(&df, TOP_N).unwrap();
        assert_eq!(
            counts,
            vec![
                ("Audio".to_string(), 2),
                ("Cables".to_string(), 2),
                ("Home".to_string(), 1),
                ("Office".to_string(), 1),
            ]
        );
    }

    #[test]
    fn category_counts_capped_at_limit() {
        let categories: Vec<String> = (0..15).map(|i| format!("Category {i}")).collect();
        let refs: Vec<&str> = categories.iter().map(|s| s.as_str()).collect();
        let df = table(refs, vec![4.0; 15], vec![1.0; 15]);

        let counts = SalesAggregator::category_counts(&df, TOP_N).unwrap();
        assert_eq!(counts.len(), TOP_N);
    }

    #[test]
    fn mean_rating_descending() {
        let df = table(
            vec!["Audio", "Audio", "Cables"],
            vec![4.0, 2.0, 5.0],
            vec![1.0; 3],
        );

        let means = SalesAggregator::category_mean_rating(&df, TOP_N).unwrap();
        assert_eq!(means[0], ("Cables".to_string(), 5.0));
        assert_eq!(means[1], ("Audio".to_string(), 3.0));
    }

    #[test]
    fn least_reviewed_ascending_and_stable() {
        let df = table(
            vec!["A", "A", "A", "A"],
            vec![4.0; 4],
            vec![5.0, 1.0, 1.0, 3.0],
        );

        let rows = SalesAggregator::least_reviewed(&df, TOP_N).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ("Product 1".to_string(), 1.0));
        assert_eq!(rows[1], ("Product 2".to_string(), 1.0));
        assert_eq!(rows[2], ("Product 3".to_string(), 3.0));
        assert_eq!(rows[3], ("Product 0".to_string(), 5.0));
    }

    #[test]
    fn lowest_rated_returns_at_most_limit() {
        let df = table(
            vec!["A", "A", "A"],
            vec![3.1, 2.0, 4.5],
            vec![1.0; 3],
        );

        let rows = SalesAggregator::lowest_rated(&df, 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("Product 1".to_string(), 2.0));
        assert_eq!(rows[1], ("Product 0".to_string(), 3.1));

        let all = SalesAggregator::lowest_rated(&df, TOP_N).unwrap();
        assert_eq!(all.len(), 3);
    }
}
