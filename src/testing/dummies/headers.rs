use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

/// Header with the given feature names followed by a `class` label.
pub fn header_with_features(features: &[&str]) -> Arc<InstanceHeader> {
    let names = features.iter().copied().chain(std::iter::once("class"));
    match InstanceHeader::from_names("bin", names) {
        Ok(h) => Arc::new(h),
        Err(e) => panic!("invalid dummy header: {e}"),
    }
}

/// Single feature `a` plus `class`.
pub fn header_binary() -> Arc<InstanceHeader> {
    header_with_features(&["a"])
}
