use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::TaskError;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything a train/test run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainTestParams {
    pub train_path: PathBuf,
    pub test_path: PathBuf,

    /// Seeds the tie-break coin; `None` draws a seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub format: ReportFormat,
}

impl TrainTestParams {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(train_path: P, test_path: Q) -> Self {
        Self {
            train_path: train_path.into(),
            test_path: test_path.into(),
            seed: None,
            format: ReportFormat::default(),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> Result<(), TaskError> {
        if self.train_path.as_os_str().is_empty() {
            return Err(TaskError::InvalidParameter(
                "train_path must not be empty".into(),
            ));
        }
        if self.test_path.as_os_str().is_empty() {
            return Err(TaskError::InvalidParameter(
                "test_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
