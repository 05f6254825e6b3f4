use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::DataError;
use crate::streams::Stream;
use std::sync::Arc;

/// In-memory stream over binary rows (label last).
pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub rows: Vec<Vec<u8>>,
    idx: usize,
}

impl VecStream {
    pub fn new(header: Arc<InstanceHeader>, rows: Vec<Vec<u8>>) -> Self {
        Self {
            header,
            rows,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Result<DenseInstance, DataError>> {
        if !self.has_more_instances() {
            return None;
        }

        let row = self.rows[self.idx].clone();
        self.idx += 1;
        Some(DenseInstance::new(Arc::clone(&self.header), row))
    }

    fn restart(&mut self) -> Result<(), DataError> {
        self.idx = 0;
        Ok(())
    }
}
