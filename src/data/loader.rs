//! CSV Data Loader Module
//! Reads the sales export into a DataFrame using Polars.

use polars::prelude::*;
use thiserror::Error;

/// Columns the pipeline depends on. The export carries more; extras are
/// loaded and left untouched.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "category",
    "product_name",
    "discounted_price",
    "actual_price",
    "discount_percentage",
    "rating",
    "rating_count",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Loads the sales CSV with Polars.
pub struct SalesLoader;

impl SalesLoader {
    /// Load a CSV file into a DataFrame.
    ///
    /// Schema inference is disabled: every column comes in as a string
    /// and the cleaner owns all numeric parsing.
    pub fn load(file_path: &str) -> Result<DataFrame, LoaderError> {
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        Self::validate_columns(&df)?;
        Ok(df)
    }

    fn validate_columns(df: &DataFrame) -> Result<(), LoaderError> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|n| n.as_str() == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "category,product_name,discounted_price,actual_price,discount_percentage,rating,rating_count";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let csv = format!(
            "{HEADER}\nElectronics,Cable,\"₹399\",\"₹1,099\",64%,4.2,120\nHome,Mug,\"₹199\",\"₹299\",33%,3.9,15\n"
        );
        let file = write_csv(&csv);

        let df = SalesLoader::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 2);

        let names = df.column("product_name").unwrap().str().unwrap();
        assert_eq!(names.get(0), Some("Cable"));
        assert_eq!(names.get(1), Some("Mug"));
    }

    #[test]
    fn rejects_missing_required_column() {
        let csv = "category,product_name,rating\nElectronics,Cable,4.2\n";
        let file = write_csv(csv);

        let err = SalesLoader::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(c) if c == "discounted_price"));
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(SalesLoader::load("no/such/file.csv").is_err());
    }
}
