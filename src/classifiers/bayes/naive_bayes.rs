use rand::{Rng, RngCore};
use tracing::trace;

use crate::classifiers::bayes::ProbabilityTable;
use crate::classifiers::classifier::Classifier;
use crate::core::ClassLabel;
use crate::core::instances::Instance;
use crate::error::ModelError;
use crate::utils::math::log_ratio;

/// Log-space class scores for one instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLikelihoods {
    pub zero: f64,
    pub one: f64,
}

impl LogLikelihoods {
    pub fn get(&self, class_val: ClassLabel) -> f64 {
        match class_val {
            ClassLabel::Zero => self.zero,
            ClassLabel::One => self.one,
        }
    }
}

/// Naive Bayes inference over a borrowed [`ProbabilityTable`].
///
/// Scores are accumulated as `ln P(class) + Σ ln P(feature | class)`. A
/// conditional that is zero, or undefined because the class was never seen,
/// leaves that class's score untouched instead of sending it to −∞; the two
/// classes are updated independently. A class with no training instances
/// starts at −∞.
///
/// Exact ties go to the class with more training instances, and to a coin
/// flip from the caller's random source when those counts are equal too.
#[derive(Debug, Clone, Copy)]
pub struct NaiveBayes<'t> {
    table: &'t ProbabilityTable,
}

impl<'t> NaiveBayes<'t> {
    pub fn new(table: &'t ProbabilityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t ProbabilityTable {
        self.table
    }

    /// Fails with [`ModelError::EmptyTable`] when the table was built from
    /// no instances; callers must train on non-empty data.
    pub fn log_likelihoods(&self, instance: &dyn Instance) -> Result<LogLikelihoods, ModelError> {
        if self.table.is_empty() {
            return Err(ModelError::EmptyTable);
        }
        let total = self.table.total();
        let n0 = self.table.class_count(ClassLabel::Zero);
        let n1 = self.table.class_count(ClassLabel::One);

        let mut ll = LogLikelihoods {
            zero: log_ratio(n0, total).unwrap_or(f64::NEG_INFINITY),
            one: log_ratio(n1, total).unwrap_or(f64::NEG_INFINITY),
        };

        let header = instance.header();
        let model_header = self.table.header();
        let aligned = std::ptr::eq(header, model_header) || header.same_schema(model_header);

        for index in header.feature_indices() {
            let Some(value) = instance.value_at_index(index) else {
                continue;
            };
            let model_index = if aligned {
                Some(index)
            } else {
                header
                    .attribute_at_index(index)
                    .and_then(|a| model_header.index_of_attribute(a.name()))
                    .filter(|&i| i != model_header.class_index())
            };
            let Some(model_index) = model_index else {
                continue;
            };

            let c0 = self.table.attribute_count(model_index, value, ClassLabel::Zero);
            let c1 = self.table.attribute_count(model_index, value, ClassLabel::One);
            if let Some(lp) = log_ratio(c0, n0) {
                ll.zero += lp;
            }
            if let Some(lp) = log_ratio(c1, n1) {
                ll.one += lp;
            }
        }

        Ok(ll)
    }

    fn decide(&self, ll: LogLikelihoods, rng: &mut dyn RngCore) -> ClassLabel {
        if ll.zero != ll.one {
            return if ll.zero > ll.one {
                ClassLabel::Zero
            } else {
                ClassLabel::One
            };
        }

        let n0 = self.table.class_count(ClassLabel::Zero);
        let n1 = self.table.class_count(ClassLabel::One);
        trace!(score = ll.zero, n0, n1, "exact tie between classes");
        if n0 > n1 {
            ClassLabel::Zero
        } else if n0 < n1 {
            ClassLabel::One
        } else if rng.random_bool(0.5) {
            ClassLabel::One
        } else {
            ClassLabel::Zero
        }
    }
}

impl Classifier for NaiveBayes<'_> {
    fn predict(
        &self,
        instance: &dyn Instance,
        rng: &mut dyn RngCore,
    ) -> Result<ClassLabel, ModelError> {
        let ll = self.log_likelihoods(instance)?;
        Ok(self.decide(ll, rng))
    }
}
