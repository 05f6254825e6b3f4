use crate::classifiers::Classifier;
use crate::core::ClassLabel;
use crate::core::instances::Instance;
use crate::error::ModelError;
use rand::RngCore;

/// Always answers with the same label.
pub struct ConstantClassifier(pub ClassLabel);

impl Classifier for ConstantClassifier {
    fn predict(
        &self,
        _instance: &dyn Instance,
        _rng: &mut dyn RngCore,
    ) -> Result<ClassLabel, ModelError> {
        Ok(self.0)
    }
}
