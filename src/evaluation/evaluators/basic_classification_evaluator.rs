use crate::core::ClassLabel;
use crate::core::instances::Instance;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Binary classification evaluator.
///
/// Tracks:
/// - overall accuracy (`weight_correct`);
/// - marginals of predicted (`row_kappa`) and true (`col_kappa`) classes for Cohen's κ.
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    weight_correct: E,
    row_kappa: [E; 2],
    col_kappa: [E; 2],
    correct: u64,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new() -> Self {
        Self {
            weight_correct: E::default(),
            row_kappa: [E::default(), E::default()],
            col_kappa: [E::default(), E::default()],
            correct: 0,
        }
    }

    pub fn instances(&self) -> u64 {
        self.weight_correct.observations()
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }
}

impl<E: Estimator + Default> Default for BasicClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new()
    }

    fn add_result(&mut self, example: &dyn Instance, predicted: ClassLabel) {
        let y = example.class_value();
        let hit = predicted == y;
        if hit {
            self.correct += 1;
        }

        self.weight_correct.add(if hit { 1.0 } else { 0.0 });
        for c in ClassLabel::ALL {
            self.row_kappa[c.index()].add(if c == predicted { 1.0 } else { 0.0 });
            self.col_kappa[c.index()].add(if c == y { 1.0 } else { 0.0 });
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        let p_o = self.weight_correct.estimation();
        let mut m = vec![Measurement::new("accuracy", p_o.unwrap_or(f64::NAN))];

        let Some(p_o) = p_o else {
            m.push(Measurement::new("kappa", 0.0));
            return m;
        };

        let p_e: f64 = ClassLabel::ALL
            .iter()
            .filter_map(|c| {
                let pp = self.row_kappa[c.index()].estimation()?;
                let pt = self.col_kappa[c.index()].estimation()?;
                Some(pp * pt)
            })
            .sum();
        let denom = 1.0 - p_e;
        let kappa = if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        };

        m.push(Measurement::new("kappa", kappa));
        m
    }
}
