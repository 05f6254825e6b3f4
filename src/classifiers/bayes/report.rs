use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::core::ClassLabel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalProbability {
    pub attribute: String,
    pub value: u8,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProbabilities {
    pub class: ClassLabel,
    pub prior: f64,
    pub conditionals: Vec<ConditionalProbability>,
}

/// Learned probabilities, one entry per class in label order.
///
/// Renders as one line per class:
/// `P(class=0)=0.67 P(a=0|0)=0.50 P(a=1|0)=0.50 `.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityReport {
    pub label: String,
    pub classes: Vec<ClassProbabilities>,
}

impl Display for ProbabilityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (n, class) in self.classes.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "P({}={})={:.2} ", self.label, class.class, class.prior)?;
            for c in &class.conditionals {
                write!(
                    f,
                    "P({}={}|{})={:.2} ",
                    c.attribute, c.value, class.class, c.probability
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ProbabilityReport {
        ProbabilityReport {
            label: "class".into(),
            classes: vec![
                ClassProbabilities {
                    class: ClassLabel::Zero,
                    prior: 2.0 / 3.0,
                    conditionals: vec![
                        ConditionalProbability {
                            attribute: "a".into(),
                            value: 0,
                            probability: 0.5,
                        },
                        ConditionalProbability {
                            attribute: "a".into(),
                            value: 1,
                            probability: 0.5,
                        },
                    ],
                },
                ClassProbabilities {
                    class: ClassLabel::One,
                    prior: 1.0 / 3.0,
                    conditionals: vec![
                        ConditionalProbability {
                            attribute: "a".into(),
                            value: 0,
                            probability: 0.0,
                        },
                        ConditionalProbability {
                            attribute: "a".into(),
                            value: 1,
                            probability: 1.0,
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn text_layout_uses_two_decimals() {
        let exp = concat!(
            "P(class=0)=0.67 P(a=0|0)=0.50 P(a=1|0)=0.50 \n",
            "P(class=1)=0.33 P(a=0|1)=0.00 P(a=1|1)=1.00 ",
        );
        assert_eq!(report().to_string(), exp);
    }

    #[test]
    fn json_carries_structured_values() {
        let v = serde_json::to_value(report()).unwrap();
        assert_eq!(v["label"], "class");
        assert_eq!(v["classes"][1]["class"], 1);
        assert_eq!(v["classes"][1]["conditionals"][1]["probability"], 1.0);
    }
}
