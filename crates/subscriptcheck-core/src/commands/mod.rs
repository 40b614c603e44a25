pub mod categories;
pub mod common;
pub mod demo;
pub mod insights;
pub mod summary;
pub mod transactions;
pub mod trend;

pub use common::RangeRunOptions;
