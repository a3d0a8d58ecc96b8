// Thresholds and sample sizes for timing analysis

#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_max: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_max: 1.25,
            combined_score_threshold: 1.8,
            num_warmup: 1000,
            num_samples: 25,
            num_iterations: 1000,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per primitive
impl TestConfig {
    /// Byte-wise comparison: a tight loop with little noise of its own
    pub fn for_compare() -> Self {
        Self::default()
            .with_mean_ratio_max(1.3)
            .with_combined_score_threshold(2.0)
    }

    /// Erasure: dominated by memory bandwidth, so allow a bit more drift
    pub fn for_memzero() -> Self {
        Self::default()
            .with_mean_ratio_max(1.5)
            .with_samples_and_iterations(25, 200)
            .with_combined_score_threshold(2.2)
    }
}
