use polars::prelude::*;

/// Trait for converting fetched batches into Polars DataFrames.
///
/// A dashboard renders these frames directly as tables; one row per news hit or per quote.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Returns a `PolarsError` if the columns cannot be assembled into a frame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Column names and dtypes of the frame produced by [`ToDataFrame::to_dataframe`].
    fn schema() -> Vec<(&'static str, DataType)>
    where
        Self: Sized;
}
