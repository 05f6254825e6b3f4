use std::sync::Arc;

use tracing::debug;

use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, BinaryAttributeClassObserver,
};
use crate::classifiers::bayes::report::{
    ClassProbabilities, ConditionalProbability, ProbabilityReport,
};
use crate::core::attributes::BinaryAttribute;
use crate::core::instances::Instance;
use crate::core::{ClassLabel, Dataset, InstanceHeader};
use crate::utils::math::ratio;

/// Frequency counts learned from a training set.
///
/// Holds the number of instances per class and, for every feature
/// attribute, the number of instances per (value, class) pair. Built once
/// and read-only afterwards; every lookup on an unknown key yields zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityTable {
    header: Arc<InstanceHeader>,
    class_counts: [u64; 2],
    // One slot per attribute; the label slot stays `None`.
    attribute_observers: Vec<Option<BinaryAttributeClassObserver>>,
}

impl ProbabilityTable {
    /// Counts every class and every (feature, value, class) triple in
    /// `dataset`. An empty dataset yields an all-zero table.
    pub fn build(dataset: &Dataset) -> Self {
        Self::from_instances(dataset.header_arc(), dataset.iter())
    }

    /// Same as [`ProbabilityTable::build`] for any sequence of instances
    /// conforming to `header`.
    pub fn from_instances<'a, I, T>(header: Arc<InstanceHeader>, instances: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Instance + 'a,
    {
        let class_index = header.class_index();
        let attribute_observers = (0..header.number_of_attributes())
            .map(|i| (i != class_index).then(BinaryAttributeClassObserver::new))
            .collect();

        let mut table = ProbabilityTable {
            header,
            class_counts: [0; 2],
            attribute_observers,
        };
        for instance in instances {
            table.learn_from_instance(instance);
        }

        debug!(
            relation = table.header.relation_name(),
            instances = table.total(),
            class_0 = table.class_counts[0],
            class_1 = table.class_counts[1],
            "built probability table"
        );
        table
    }

    fn learn_from_instance(&mut self, instance: &dyn Instance) {
        let class_val = instance.class_value();
        self.class_counts[class_val.index()] += 1;

        for (i, slot) in self.attribute_observers.iter_mut().enumerate() {
            let (Some(observer), Some(value)) = (slot.as_mut(), instance.value_at_index(i)) else {
                continue;
            };
            observer.observe_attribute_class(value, class_val);
        }
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn class_count(&self, class_val: ClassLabel) -> u64 {
        self.class_counts[class_val.index()]
    }

    /// Number of instances the table was built from.
    pub fn total(&self) -> u64 {
        self.class_counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `count(attribute = value | class)`; zero for the label column, an
    /// index past the schema, or a value outside {0, 1}.
    pub fn attribute_count(&self, attribute: usize, value: u8, class_val: ClassLabel) -> u64 {
        match self.attribute_observers.get(attribute) {
            Some(Some(observer)) => observer.count(value, class_val),
            _ => 0,
        }
    }

    pub fn attribute_count_by_name(&self, name: &str, value: u8, class_val: ClassLabel) -> u64 {
        self.header
            .index_of_attribute(name)
            .map_or(0, |i| self.attribute_count(i, value, class_val))
    }

    /// `P(class)`, or `None` for a table built from nothing.
    pub fn prior(&self, class_val: ClassLabel) -> Option<f64> {
        ratio(self.class_count(class_val), self.total())
    }

    /// `P(attribute = value | class)`, or `None` when the class was never seen.
    pub fn conditional(&self, attribute: usize, value: u8, class_val: ClassLabel) -> Option<f64> {
        match self.attribute_observers.get(attribute) {
            Some(Some(observer)) => observer.probability_of_attribute_value_given_class(
                value,
                class_val,
                self.class_count(class_val),
            ),
            _ => ratio(0, self.class_count(class_val)),
        }
    }

    /// Probabilities per class, with every undefined ratio reported as 0.
    pub fn describe(&self) -> ProbabilityReport {
        let classes = ClassLabel::ALL
            .iter()
            .map(|&class_val| {
                let conditionals = self
                    .header
                    .feature_indices()
                    .flat_map(|i| {
                        let name = self
                            .header
                            .attribute_at_index(i)
                            .map(|a| a.name().to_string())
                            .unwrap_or_default();
                        BinaryAttribute::VALUES
                            .into_iter()
                            .map(move |value| ConditionalProbability {
                                attribute: name.clone(),
                                value,
                                probability: self.conditional(i, value, class_val).unwrap_or(0.0),
                            })
                    })
                    .collect();
                ClassProbabilities {
                    class: class_val,
                    prior: self.prior(class_val).unwrap_or(0.0),
                    conditionals,
                }
            })
            .collect();

        ProbabilityReport {
            label: self.header.class_attribute().name().to_string(),
            classes,
        }
    }
}
