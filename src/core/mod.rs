pub mod engine;

pub use crate::domain::model::{RunPlan, RunStamp, RunSummary, RunnerExit};
pub use crate::domain::ports::{ConfigProvider, Publisher, TestRunner};
pub use crate::utils::error::Result;
