mod naive_bayes;
mod probability_table;
mod report;

pub use naive_bayes::{LogLikelihoods, NaiveBayes};
pub use probability_table::ProbabilityTable;
pub use report::{ClassProbabilities, ConditionalProbability, ProbabilityReport};
