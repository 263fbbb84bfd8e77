//! Dataset layer: CSV loading, schema-with-defaults normalization, explode.

mod dataset;
mod error;

pub use dataset::Dataset;
pub use error::DataLoadError;
