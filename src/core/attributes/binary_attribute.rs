use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

pub type AttributeRef = Arc<BinaryAttribute>;

/// A named column whose values are restricted to `0` and `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryAttribute {
    name: String,
}

impl BinaryAttribute {
    /// Every value a binary attribute may take, in report order.
    pub const VALUES: [u8; 2] = [0, 1];

    pub fn new<N: Into<String>>(name: N) -> BinaryAttribute {
        BinaryAttribute { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Narrows a parsed integer to a binary value.
    #[inline]
    pub fn value_of(raw: i64) -> Option<u8> {
        match raw {
            0 => Some(0),
            1 => Some(1),
            _ => None,
        }
    }
}

impl Display for BinaryAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_and_one_are_values() {
        assert_eq!(BinaryAttribute::value_of(0), Some(0));
        assert_eq!(BinaryAttribute::value_of(1), Some(1));
        assert_eq!(BinaryAttribute::value_of(2), None);
        assert_eq!(BinaryAttribute::value_of(-1), None);
    }

    #[test]
    fn displays_its_name() {
        assert_eq!(BinaryAttribute::new("wesley").to_string(), "wesley");
    }
}
