use crate::evaluation::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// Fed with 0/1 indicators it yields an exact hit rate as long as the count
/// stays below 2^53.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: u64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn observations(&self) -> u64 {
        self.len
    }

    #[inline]
    fn estimation(&self) -> Option<f64> {
        if self.len > 0 {
            Some(self.sum / self.len as f64)
        } else {
            None
        }
    }
}
