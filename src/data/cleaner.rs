//! Data Cleaner Module
//! Normalizes display-formatted numeric columns and drops unrated rows.

use polars::prelude::*;
use thiserror::Error;

const CURRENCY_SYMBOL: char = '₹';
const THOUSANDS_SEPARATOR: char = ',';

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{column}' contains a non-numeric value: {value:?}")]
    MalformedNumber { column: String, value: String },
}

/// Handles per-column normalization of the raw sales table.
pub struct SalesCleaner;

impl SalesCleaner {
    /// Clean the raw table into its numeric form.
    ///
    /// Prices and the discount keep their nulls but fail hard on any
    /// non-numeric remainder; ratings coerce to null and those rows are
    /// dropped; rating counts default to 0.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let mut df = df.clone();

        Self::clean_price_column(&mut df, "discounted_price")?;
        Self::clean_price_column(&mut df, "actual_price")?;
        Self::clean_percent_column(&mut df, "discount_percentage")?;
        Self::coerce_rating_column(&mut df)?;
        Self::coerce_rating_count_column(&mut df)?;

        Self::drop_unrated_rows(df)
    }

    /// Strip the currency symbol and thousands separators, then parse.
    fn parse_price(raw: &str) -> Option<f64> {
        let stripped: String = raw
            .chars()
            .filter(|c| *c != CURRENCY_SYMBOL && *c != THOUSANDS_SEPARATOR)
            .collect();
        stripped.trim().parse::<f64>().ok()
    }

    /// Strip a trailing percent sign, then parse (0-100 scale).
    fn parse_percent(raw: &str) -> Option<f64> {
        raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()
    }

    fn clean_price_column(df: &mut DataFrame, name: &str) -> Result<(), CleanerError> {
        let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());

        for value in df.column(name)?.str()?.into_iter() {
            match value {
                Some(raw) => {
                    let parsed =
                        Self::parse_price(raw).ok_or_else(|| CleanerError::MalformedNumber {
                            column: name.to_string(),
                            value: raw.to_string(),
                        })?;
                    values.push(Some(parsed));
                }
                None => values.push(None),
            }
        }

        df.with_column(Column::new(name.into(), values))?;
        Ok(())
    }

    fn clean_percent_column(df: &mut DataFrame, name: &str) -> Result<(), CleanerError> {
        let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());

        for value in df.column(name)?.str()?.into_iter() {
            match value {
                Some(raw) => {
                    let parsed =
                        Self::parse_percent(raw).ok_or_else(|| CleanerError::MalformedNumber {
                            column: name.to_string(),
                            value: raw.to_string(),
                        })?;
                    values.push(Some(parsed));
                }
                None => values.push(None),
            }
        }

        df.with_column(Column::new(name.into(), values))?;
        Ok(())
    }

    /// Unparseable ratings become null; the row drop below removes them.
    fn coerce_rating_column(df: &mut DataFrame) -> Result<(), CleanerError> {
        let values: Vec<Option<f64>> = df
            .column("rating")?
            .str()?
            .into_iter()
            .map(|value| {
                value
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                    .filter(|v| !v.is_nan())
            })
            .collect();

        df.with_column(Column::new("rating".into(), values))?;
        Ok(())
    }

    /// Unparseable or missing rating counts default to 0.
    fn coerce_rating_count_column(df: &mut DataFrame) -> Result<(), CleanerError> {
        let values: Vec<f64> = df
            .column("rating_count")?
            .str()?
            .into_iter()
            .map(|value| {
                value
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                    .filter(|v| !v.is_nan())
                    .unwrap_or(0.0)
            })
            .collect();

        df.with_column(Column::new("rating_count".into(), values))?;
        Ok(())
    }

    fn drop_unrated_rows(df: DataFrame) -> Result<DataFrame, CleanerError> {
        let filtered = df.lazy().filter(col("rating").is_not_null()).collect()?;
        Ok(filtered)
    }
}
