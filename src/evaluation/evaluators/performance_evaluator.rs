use crate::core::ClassLabel;
use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates (truth, prediction) pairs and summarizes them as metrics.
pub trait PerformanceEvaluator {
    /// Clears internal state.
    fn reset(&mut self);

    /// Feeds one labeled example and the label predicted for it.
    fn add_result(&mut self, example: &dyn Instance, predicted: ClassLabel);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
