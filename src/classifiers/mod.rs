pub mod attribute_class_observers;
pub mod bayes;
pub mod classifier;

pub use bayes::{NaiveBayes, ProbabilityTable};
pub use classifier::Classifier;
