use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::DataError;
use std::sync::Arc;

/// Pull-based source of labeled instances.
///
/// Every instance yielded must conform to [`Stream::header`], which stays
/// fixed for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name, attributes, class index).
    fn header(&self) -> &InstanceHeader;

    /// Shared handle to the header that yielded instances point at.
    fn header_arc(&self) -> Arc<InstanceHeader>;

    /// Indicates whether another call to [`Stream::next_instance`] can yield
    /// something. If it returns `false`, `next_instance` must return `None`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance, an error for a malformed record, or
    /// `None` once the stream is exhausted.
    ///
    /// After yielding an I/O error the stream ends.
    fn next_instance(&mut self) -> Option<Result<DenseInstance, DataError>>;

    /// Rewinds to the first instance. The header must remain unchanged.
    fn restart(&mut self) -> Result<(), DataError>;
}
