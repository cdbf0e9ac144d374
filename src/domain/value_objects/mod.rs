pub mod byte_unit;
pub mod check_state;
pub mod storage_filter;
pub mod thresholds;

pub use byte_unit::ByteUnit;
pub use check_state::CheckState;
pub use storage_filter::StorageFilter;
pub use thresholds::{ThresholdError, ThresholdPair};
