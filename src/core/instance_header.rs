use crate::core::attributes::{AttributeRef, BinaryAttribute};
use crate::error::DataError;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered attribute schema shared by every instance of a dataset.
///
/// The last attribute is the class label; all others are features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<AttributeRef>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
    ) -> Result<InstanceHeader, DataError> {
        if attributes.is_empty() {
            return Err(DataError::MissingLabel);
        }
        let mut seen = HashSet::with_capacity(attributes.len());
        for attr in &attributes {
            if !seen.insert(attr.name()) {
                return Err(DataError::DuplicateAttribute(attr.name().to_string()));
            }
        }
        let class_index = attributes.len() - 1;
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn from_names<I, S>(relation_name: &str, names: I) -> Result<InstanceHeader, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes = names
            .into_iter()
            .map(|n| Arc::new(BinaryAttribute::new(n)))
            .collect();
        Self::new(relation_name.to_string(), attributes)
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_features(&self) -> usize {
        self.attributes.len() - 1
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&BinaryAttribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &BinaryAttribute {
        &self.attributes[self.class_index]
    }

    /// Indices of every attribute except the label, in schema order.
    pub fn feature_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name())
    }

    /// Two headers share a schema when their attribute names match in order.
    pub fn same_schema(&self, other: &InstanceHeader) -> bool {
        self.class_index == other.class_index && self.names().eq(other.names())
    }
}
