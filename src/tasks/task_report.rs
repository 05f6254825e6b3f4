use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::classifiers::bayes::ProbabilityReport;
use crate::error::TaskError;
use crate::evaluation::AccuracyReport;
use crate::tasks::ReportFormat;

/// Learned probabilities plus accuracy on the training and test sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskReport {
    pub probabilities: ProbabilityReport,
    pub train: AccuracyReport,
    pub test: AccuracyReport,
}

impl TaskReport {
    pub fn render(&self, format: ReportFormat) -> std::result::Result<String, TaskError> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Display for TaskReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.probabilities)?;
        writeln!(f)?;
        writeln!(
            f,
            "Accuracy on training set ({} instances): {}",
            self.train.instances, self.train
        )?;
        writeln!(f)?;
        write!(
            f,
            "Accuracy on test set ({} instances): {}",
            self.test.instances, self.test
        )
    }
}
