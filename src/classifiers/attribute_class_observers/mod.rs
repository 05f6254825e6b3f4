mod attribute_class_observer;
mod binary_attribute_class_observer;

pub use attribute_class_observer::AttributeClassObserver;
pub use binary_attribute_class_observer::BinaryAttributeClassObserver;
