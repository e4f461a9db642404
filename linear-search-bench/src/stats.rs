//! Sample statistics over per-run timings.

/// Mean and Bessel-corrected standard deviation of a set of samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Summarizes `samples`, or returns `None` when there are none.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mean = mean(samples)?;
        Some(Self {
            count: samples.len(),
            mean,
            std_dev: sample_std_dev(samples, mean),
        })
    }
}

/// Arithmetic mean of `samples`.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation of `samples` around `mean`, dividing by `count - 1`.
///
/// Fewer than two samples carry no spread information and yield `0.0`.
pub fn sample_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let squared: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    (squared / (samples.len() - 1) as f64).sqrt()
}

// TESTS
// ================================================================================================
