mod accuracy;
mod estimators;
mod evaluators;
mod measurement;

pub use accuracy::{AccuracyReport, accuracy, evaluate};
pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
