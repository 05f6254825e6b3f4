use crate::core::attributes::BinaryAttribute;
use crate::core::class_label::ClassLabel;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use crate::error::DataError;
use std::sync::Arc;

/// Instance storing one value per attribute, label last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseInstance {
    header: Arc<InstanceHeader>,
    values: Vec<u8>,
    class_value: ClassLabel,
}

impl DenseInstance {
    /// Builds an instance from raw integers, checking arity and binarity.
    ///
    /// `line` is only used to locate errors.
    pub fn from_raw(
        header: Arc<InstanceHeader>,
        raw: &[i64],
        line: usize,
    ) -> Result<DenseInstance, DataError> {
        if raw.len() != header.number_of_attributes() {
            return Err(DataError::ColumnCount {
                line,
                expected: header.number_of_attributes(),
                found: raw.len(),
            });
        }

        let mut values = Vec::with_capacity(raw.len());
        for (index, &r) in raw.iter().enumerate() {
            let Some(v) = BinaryAttribute::value_of(r) else {
                let attribute = header
                    .attribute_at_index(index)
                    .map(|a| a.name().to_string())
                    .unwrap_or_default();
                return Err(DataError::NonBinaryValue {
                    line,
                    attribute,
                    value: r,
                });
            };
            values.push(v);
        }

        let class_value = if values[header.class_index()] == 0 {
            ClassLabel::Zero
        } else {
            ClassLabel::One
        };

        Ok(DenseInstance {
            header,
            values,
            class_value,
        })
    }

    pub fn new(header: Arc<InstanceHeader>, values: Vec<u8>) -> Result<DenseInstance, DataError> {
        let raw: Vec<i64> = values.iter().map(|&v| v as i64).collect();
        Self::from_raw(header, &raw, 0)
    }
}

impl Instance for DenseInstance {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn value_at_index(&self, index: usize) -> Option<u8> {
        self.values.get(index).copied()
    }

    fn class_value(&self) -> ClassLabel {
        self.class_value
    }

    fn to_vec(&self) -> Vec<u8> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::header_with_features;

    #[test]
    fn keeps_values_and_label() {
        let h = header_with_features(&["a", "b"]);
        let inst = DenseInstance::new(Arc::clone(&h), vec![1, 0, 1]).unwrap();
        assert_eq!(inst.to_vec(), vec![1, 0, 1]);
        assert_eq!(inst.value_at_index(0), Some(1));
        assert_eq!(inst.value_at_index(3), None);
        assert_eq!(inst.class_value(), ClassLabel::One);
        assert_eq!(inst.number_of_attributes(), 3);
    }

    #[test]
    fn rejects_wrong_arity() {
        let h = header_with_features(&["a", "b"]);
        let err = DenseInstance::from_raw(h, &[1, 0], 7).unwrap_err();
        assert!(matches!(
            err,
            DataError::ColumnCount {
                line: 7,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_non_binary_feature_and_label() {
        let h = header_with_features(&["a"]);
        let err = DenseInstance::from_raw(Arc::clone(&h), &[2, 0], 3).unwrap_err();
        assert!(matches!(
            err,
            DataError::NonBinaryValue { line: 3, ref attribute, value: 2 } if attribute == "a"
        ));

        let err = DenseInstance::from_raw(h, &[0, -1], 4).unwrap_err();
        assert!(matches!(
            err,
            DataError::NonBinaryValue { ref attribute, value: -1, .. } if attribute == "class"
        ));
    }
}
