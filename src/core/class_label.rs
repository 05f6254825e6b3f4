use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One of the two label values a dataset may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ClassLabel {
    Zero,
    One,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Zero, ClassLabel::One];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ClassLabel::Zero => 0,
            ClassLabel::One => 1,
        }
    }

    #[inline]
    pub fn from_value(value: u8) -> Option<ClassLabel> {
        match value {
            0 => Some(ClassLabel::Zero),
            1 => Some(ClassLabel::One),
            _ => None,
        }
    }
}

impl From<ClassLabel> for u8 {
    fn from(label: ClassLabel) -> u8 {
        label.index() as u8
    }
}

impl TryFrom<u8> for ClassLabel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        ClassLabel::from_value(value)
            .ok_or_else(|| format!("class label must be 0 or 1, got {value}"))
    }
}

impl Display for ClassLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.index())
    }
}
