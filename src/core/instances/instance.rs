use crate::core::class_label::ClassLabel;
use crate::core::instance_header::InstanceHeader;

/// A labeled example conforming to an [`InstanceHeader`].
pub trait Instance {
    fn header(&self) -> &InstanceHeader;

    /// Value of the attribute at `index`, or `None` past the end of the schema.
    fn value_at_index(&self, index: usize) -> Option<u8>;

    fn class_value(&self) -> ClassLabel;

    fn number_of_attributes(&self) -> usize {
        self.header().number_of_attributes()
    }

    fn to_vec(&self) -> Vec<u8>;
}
