//! Report Runner
//! Sequences the aggregate queries into rendered charts, then prints the
//! closing summary.

use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

use crate::charts::{palette, ChartRenderer};
use crate::report::summary::SUMMARY;
use crate::stats::{SalesAggregator, TOP_N};

pub struct Reporter {
    renderer: ChartRenderer,
}

impl Reporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: ChartRenderer::new(out_dir),
        }
    }

    /// Render the full chart sequence over the cleaned table, then print
    /// the summary block. Any rendering failure aborts the run.
    pub fn run(&self, df: &DataFrame) -> Result<()> {
        let counts: Vec<(String, f64)> = SalesAggregator::category_counts(df, TOP_N)?
            .into_iter()
            .map(|(category, count)| (category, count as f64))
            .collect();
        let path = self.renderer.horizontal_bar(
            "category_counts.png",
            "Top 10 categories by product count",
            "Number of products",
            "Category",
            &counts,
            &palette::VIRIDIS,
        )?;
        info!("Wrote {}", path.display());

        let means = SalesAggregator::category_mean_rating(df, TOP_N)?;
        let path = self.renderer.horizontal_bar(
            "category_mean_rating.png",
            "Average rating by category (top 10)",
            "Average rating",
            "Category",
            &means,
            &palette::MAKO,
        )?;
        info!("Wrote {}", path.display());

        let groups = Self::scatter_groups(df)?;
        let path = self.renderer.scatter(
            "discount_vs_rating.png",
            "Discount vs. product rating",
            "Discount (%)",
            "Rating",
            &groups,
        )?;
        info!("Wrote {}", path.display());

        let least_reviewed = SalesAggregator::least_reviewed(df, TOP_N)?;
        let path = self.renderer.horizontal_bar(
            "least_reviewed.png",
            "10 products with the fewest reviews",
            "Number of reviews",
            "Product",
            &least_reviewed,
            &[palette::SALMON],
        )?;
        info!("Wrote {}", path.display());

        let lowest_rated = SalesAggregator::lowest_rated(df, TOP_N)?;
        let path = self.renderer.horizontal_bar(
            "lowest_rated.png",
            "10 lowest-rated products",
            "Rating",
            "Product",
            &lowest_rated,
            &[palette::TOMATO],
        )?;
        info!("Wrote {}", path.display());

        println!("{SUMMARY}");
        Ok(())
    }

    /// (discount, rating) points per category, categories in
    /// first-appearance order. Rows missing either value are skipped.
    fn scatter_groups(df: &DataFrame) -> Result<Vec<(String, Vec<(f64, f64)>)>> {
        let categories = df.column("category")?.str()?.clone();
        let discounts = df.column("discount_percentage")?.f64()?.clone();
        let ratings = df.column("rating")?.f64()?.clone();

        let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for i in 0..df.height() {
            let (Some(category), Some(x), Some(y)) =
                (categories.get(i), discounts.get(i), ratings.get(i))
            else {
                continue;
            };
            let pos = match index.get(category) {
                Some(&pos) => pos,
                None => {
                    index.insert(category.to_string(), groups.len());
                    groups.push((category.to_string(), Vec::new()));
                    groups.len() - 1
                }
            };
            groups[pos].1.push((x, y));
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_groups_follow_first_appearance() {
        let df = DataFrame::new(vec![
            Column::new("category".into(), vec!["Audio", "Cables", "Audio"]),
            Column::new("discount_percentage".into(), vec![10.0, 20.0, 30.0]),
            Column::new("rating".into(), vec![4.0, 3.5, 4.5]),
        ])
        .unwrap();

        let groups = Reporter::scatter_groups(&df).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Audio");
        assert_eq!(groups[0].1, vec![(10.0, 4.0), (30.0, 4.5)]);
        assert_eq!(groups[1].0, "Cables");
        assert_eq!(groups[1].1, vec![(20.0, 3.5)]);
    }
}
