pub mod attributes;
pub mod class_label;
pub mod dataset;
pub mod instance_header;
pub mod instances;

pub use class_label::ClassLabel;
pub use dataset::Dataset;
pub use instance_header::InstanceHeader;
