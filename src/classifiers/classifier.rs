use rand::RngCore;

use crate::core::ClassLabel;
use crate::core::instances::Instance;
use crate::error::ModelError;

pub trait Classifier {
    /// Predicts the label of `instance`. `rng` is only consulted when the
    /// model has no principled way to pick between the classes.
    fn predict(&self, instance: &dyn Instance, rng: &mut dyn RngCore)
    -> Result<ClassLabel, ModelError>;
}
