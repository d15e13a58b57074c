/// Running estimate of a normal distribution over one numeric feature.
///
/// Mean and squared deviations are accumulated with Welford's update, so the
/// estimate is stable regardless of observation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaussianEstimator {
    count: usize,
    mean: f64,
    variance_sum: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_observation(&mut self, value: f64) {
        self.count += 1;
        let last_mean = self.mean;
        self.mean += (value - last_mean) / self.count as f64;
        self.variance_sum += (value - last_mean) * (value - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance with an `n - 1` denominator; zero below two observations.
    pub fn get_variance(&self) -> f64 {
        if self.count > 1 {
            self.variance_sum / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    pub fn get_std_dev(&self) -> f64 {
        self.get_variance().sqrt()
    }

    /// Normal density at `value`. Returns `None` when the standard deviation is
    /// zero, where the density is undefined.
    pub fn probability_density(&self, value: f64) -> Option<f64> {
        let std_dev = self.get_std_dev();
        if std_dev.is_nan() || std_dev <= 0.0 {
            return None;
        }
        let normal_const: f64 = (2.0 * std::f64::consts::PI).sqrt();
        let diff = value - self.mean;
        let exponent = (-diff * diff) / (2.0 * std_dev * std_dev);
        Some((1.0 / (normal_const * std_dev)) * exponent.exp())
    }
}

impl FromIterator<f64> for GaussianEstimator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut estimator = GaussianEstimator::new();
        for value in iter {
            estimator.add_observation(value);
        }
        estimator
    }
}
