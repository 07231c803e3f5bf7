//! Running statistics.

/// Incremental mean and variance (Welford's algorithm).
///
/// # Examples
///
/// ```
/// use queens_anneal::sweep::RunningMean;
///
/// let mut m = RunningMean::default();
/// for x in [2.0, 4.0, 6.0] {
///     m.push(x);
/// }
/// assert_eq!(m.count(), 3);
/// assert!((m.mean() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningMean {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningMean {
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the pushed values, `0.0` when empty.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance, `0.0` with fewer than two values.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
