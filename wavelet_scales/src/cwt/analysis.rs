//! Signal container for wavelet analysis
//!
//! Borrows the caller's samples and pairs them with an [`AnalysisConfig`].
//! The samples are never copied or mutated; only their count feeds the
//! scale ladder.

use ndarray::ArrayView1;

use super::error::CwtResult;
use super::scales::{AnalysisConfig, ScaleLadder, ScaleSetBuilder};

#[derive(Debug, Clone, Copy)]
pub struct WaveletAnalysis<'a> {
    signal: ArrayView1<'a, f64>,
    config: AnalysisConfig,
}

impl<'a> WaveletAnalysis<'a> {
    /// Analysis of `signal` sampled every `dt`, default resolution
    pub fn new(signal: ArrayView1<'a, f64>, dt: f64) -> Self {
        Self::with_config(signal, AnalysisConfig::default().with_dt(dt))
    }

    pub fn from_slice(signal: &'a [f64], dt: f64) -> Self {
        Self::new(ArrayView1::from(signal), dt)
    }

    pub fn with_config(signal: ArrayView1<'a, f64>, config: AnalysisConfig) -> Self {
        Self { signal, config }
    }

    pub fn with_resolution(mut self, dj: f64) -> Self {
        self.config.dj = dj;
        self
    }

    pub fn signal(&self) -> ArrayView1<'a, f64> {
        self.signal
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    pub fn dj(&self) -> f64 {
        self.config.dj
    }

    /// Total duration `N * dt`
    pub fn duration(&self) -> f64 {
        self.len() as f64 * self.config.dt
    }

    pub fn scale_builder(&self) -> ScaleSetBuilder {
        ScaleSetBuilder::from_config(self.len(), &self.config)
    }

    pub fn scales(&self) -> CwtResult<ScaleLadder> {
        self.scale_builder().scales()
    }
}
