use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::DataError;
use crate::streams::Stream;
use std::sync::Arc;

/// Ordered collection of instances sharing one header.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>) -> Dataset {
        Dataset {
            header,
            instances: Vec::new(),
        }
    }

    /// Builds a dataset from already binary rows (label last).
    pub fn from_rows<I>(header: Arc<InstanceHeader>, rows: I) -> Result<Dataset, DataError>
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut dataset = Dataset::new(Arc::clone(&header));
        for (i, row) in rows.into_iter().enumerate() {
            let raw: Vec<i64> = row.iter().map(|&v| v as i64).collect();
            dataset
                .instances
                .push(DenseInstance::from_raw(Arc::clone(&header), &raw, i + 1)?);
        }
        Ok(dataset)
    }

    /// Drains `stream`, stopping at the first malformed row.
    pub fn from_stream<S: Stream + ?Sized>(stream: &mut S) -> Result<Dataset, DataError> {
        let mut dataset = Dataset::new(stream.header_arc());
        while stream.has_more_instances() {
            let Some(next) = stream.next_instance() else {
                break;
            };
            dataset.instances.push(next?);
        }
        Ok(dataset)
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DenseInstance> {
        self.instances.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DenseInstance;
    type IntoIter = std::slice::Iter<'a, DenseInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassLabel;
    use crate::core::instances::Instance;
    use crate::testing::VecStream;
    use crate::testing::dummies::header_with_features;

    #[test]
    fn from_rows_preserves_order() {
        let h = header_with_features(&["a"]);
        let ds = Dataset::from_rows(h, vec![vec![0, 0], vec![1, 1], vec![1, 0]]).unwrap();
        assert_eq!(ds.len(), 3);
        let labels: Vec<ClassLabel> = ds.iter().map(|i| i.class_value()).collect();
        assert_eq!(
            labels,
            vec![ClassLabel::Zero, ClassLabel::One, ClassLabel::Zero]
        );
    }

    #[test]
    fn from_rows_reports_row_number() {
        let h = header_with_features(&["a"]);
        let err = Dataset::from_rows(h, vec![vec![0, 0], vec![0, 5]]).unwrap_err();
        assert!(matches!(err, DataError::NonBinaryValue { line: 2, .. }));
    }

    #[test]
    fn from_stream_drains_everything() {
        let h = header_with_features(&["a", "b"]);
        let mut s = VecStream::new(h, vec![vec![0, 1, 1], vec![1, 1, 0]]);
        let ds = Dataset::from_stream(&mut s).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.instances()[1].to_vec(), vec![1, 1, 0]);
        assert!(!s.has_more_instances());
    }

    #[test]
    fn from_stream_shares_the_stream_header() {
        let h = header_with_features(&["a"]);
        let mut s = VecStream::new(Arc::clone(&h), vec![vec![0, 1], vec![1, 0]]);
        let ds = Dataset::from_stream(&mut s).unwrap();
        assert!(Arc::ptr_eq(&ds.header_arc(), &h));
        for inst in &ds {
            assert!(std::ptr::eq(inst.header(), ds.header()));
        }
    }

    #[test]
    fn empty_dataset_keeps_header() {
        let ds = Dataset::new(header_with_features(&["a"]));
        assert!(ds.is_empty());
        assert_eq!(ds.header().number_of_attributes(), 2);
    }
}
