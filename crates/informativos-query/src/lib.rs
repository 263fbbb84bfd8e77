//! Query layer: filter engine, search, option listings, statistics, and
//! study-goal sampling over the immutable exploded table.

pub mod filter;
pub mod options;
pub mod sample;
pub mod search;
pub mod stats;

pub use filter::{DateMode, FilterSpec, FilterSummary, apply_filters, summarize};
pub use options::FilterOptions;
pub use sample::{SampleStatus, sample_study_goal, sample_study_goal_with};
pub use search::SearchPattern;
