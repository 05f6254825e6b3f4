use rand::RngCore;
use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::classifiers::{Classifier, NaiveBayes, ProbabilityTable};
use crate::core::Dataset;
use crate::error::ModelError;
use crate::evaluation::{
    BasicClassificationEvaluator, BasicEstimator, PerformanceEvaluator, PerformanceEvaluatorExt,
};

/// Outcome of running a classifier over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub instances: usize,
    pub correct: u64,
    pub accuracy: f64,
    pub kappa: f64,
}

impl Display for AccuracyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", 100.0 * self.accuracy)
    }
}

/// Predicts every instance of `dataset` and scores the predictions.
///
/// An empty dataset is rejected with [`ModelError::EmptyDataset`] rather
/// than reported as a NaN accuracy.
pub fn evaluate<C: Classifier + ?Sized>(
    classifier: &C,
    dataset: &Dataset,
    rng: &mut dyn RngCore,
) -> Result<AccuracyReport, ModelError> {
    if dataset.is_empty() {
        return Err(ModelError::EmptyDataset);
    }

    let mut evaluator = BasicClassificationEvaluator::<BasicEstimator>::new();
    for instance in dataset {
        let predicted = classifier.predict(instance, rng)?;
        evaluator.add_result(instance, predicted);
    }

    Ok(AccuracyReport {
        instances: dataset.len(),
        correct: evaluator.correct(),
        accuracy: evaluator.metric("accuracy").unwrap_or(f64::NAN),
        kappa: evaluator.metric("kappa").unwrap_or(f64::NAN),
    })
}

/// Fraction of `dataset` that a Naive Bayes model over `table` labels correctly.
pub fn accuracy(
    table: &ProbabilityTable,
    dataset: &Dataset,
    rng: &mut dyn RngCore,
) -> Result<f64, ModelError> {
    evaluate(&NaiveBayes::new(table), dataset, rng).map(|r| r.accuracy)
}
