pub mod areas;
pub mod dates;
pub mod model;

pub use areas::{DEFAULT_STUDY_AREA, split_branches, study_area_for};
pub use dates::{parse_bulletin_number, parse_judgment_date};
pub use model::{ExplodedRow, GeneralRepercussion, Julgado, first_row_per_id, unique_ids};
