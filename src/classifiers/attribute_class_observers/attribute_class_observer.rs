use crate::core::ClassLabel;
use crate::utils::math::ratio;

/// Joint counter of one attribute's values against the class label.
pub trait AttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: u8, class_val: ClassLabel);

    /// Number of observations with `att_val` under `class_val`; zero when
    /// the pair was never seen.
    fn count(&self, att_val: u8, class_val: ClassLabel) -> u64;

    /// `P(att_val | class_val)` given how many instances carry `class_val`.
    fn probability_of_attribute_value_given_class(
        &self,
        att_val: u8,
        class_val: ClassLabel,
        class_count: u64,
    ) -> Option<f64> {
        ratio(self.count(att_val, class_val), class_count)
    }
}
