use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::core::ClassLabel;

/// Value × class contingency counts for a binary attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryAttributeClassObserver {
    counts: [[u64; 2]; 2],
}

impl BinaryAttributeClassObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttributeClassObserver for BinaryAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: u8, class_val: ClassLabel) {
        if let Some(row) = self.counts.get_mut(att_val as usize) {
            row[class_val.index()] += 1;
        }
    }

    fn count(&self, att_val: u8, class_val: ClassLabel) -> u64 {
        self.counts
            .get(att_val as usize)
            .map_or(0, |row| row[class_val.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::BinaryAttribute;

    #[test]
    fn starts_at_zero() {
        let obs = BinaryAttributeClassObserver::new();
        for v in BinaryAttribute::VALUES {
            for c in ClassLabel::ALL {
                assert_eq!(obs.count(v, c), 0);
            }
        }
        assert_eq!(
            obs.probability_of_attribute_value_given_class(1, ClassLabel::Zero, 0),
            None
        );
    }

    #[test]
    fn counts_each_cell_independently() {
        let mut obs = BinaryAttributeClassObserver::new();
        obs.observe_attribute_class(0, ClassLabel::Zero);
        obs.observe_attribute_class(1, ClassLabel::Zero);
        obs.observe_attribute_class(1, ClassLabel::One);
        obs.observe_attribute_class(1, ClassLabel::One);

        assert_eq!(obs.count(0, ClassLabel::Zero), 1);
        assert_eq!(obs.count(1, ClassLabel::Zero), 1);
        assert_eq!(obs.count(0, ClassLabel::One), 0);
        assert_eq!(obs.count(1, ClassLabel::One), 2);

        let p = obs
            .probability_of_attribute_value_given_class(1, ClassLabel::One, 2)
            .unwrap();
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_values_are_ignored_and_read_as_zero() {
        let mut obs = BinaryAttributeClassObserver::new();
        obs.observe_attribute_class(7, ClassLabel::Zero);
        assert_eq!(obs, BinaryAttributeClassObserver::new());
        assert_eq!(obs.count(7, ClassLabel::Zero), 0);
    }
}
