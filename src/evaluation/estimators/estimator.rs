/// Online scalar estimator (e.g., streaming mean).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Number of observations incorporated so far.
    fn observations(&self) -> u64;

    /// Returns the current estimate, or `None` before any observation.
    fn estimation(&self) -> Option<f64>;
}
