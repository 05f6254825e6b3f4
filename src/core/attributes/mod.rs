mod binary_attribute;

pub use binary_attribute::AttributeRef;
pub use binary_attribute::BinaryAttribute;
