mod params;
mod task_report;

pub use params::{ReportFormat, TrainTestParams};
pub use task_report::TaskReport;
pub use train_test::TrainTestTask;
