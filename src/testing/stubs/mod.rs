pub mod constant_classifier;
pub mod vec_stream;

pub use constant_classifier::ConstantClassifier;
pub use vec_stream::VecStream;
