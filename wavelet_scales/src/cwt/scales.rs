//! Scale ladder construction
//!
//! For non-orthogonal wavelet analysis an arbitrary set of scales may be
//! used. As in Torrence & Compo (section 3.f) the scales are written as
//! fractional powers of two:
//!
//! ```text
//! s_j = s0 * 2^(j * dj),   j = 0, 1, ..., J
//! J   = floor((1 / dj) * log2(N * dt / s0))
//! s0  = 2 * dt
//! ```
//!
//! `s0` is the smallest resolvable scale, chosen so that the equivalent
//! Fourier period is about `2 * dt`. Smaller `dj` gives finer scale
//! resolution at the cost of more scales.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::error::{ensure_positive, CwtError, CwtResult};
use super::wavelets::WaveletFamily;

/// Default scale resolution (sub-octaves per octave = 1 / dj)
pub const DEFAULT_DJ: f64 = 0.125;

/// Largest `dj` that still adequately samples scale for the Morlet
pub const MAX_MORLET_DJ: f64 = 0.5;

/// Upper bound on the number of scales a ladder may hold
pub const MAX_LADDER_LEN: usize = 1 << 20;

/// Sampling configuration for an analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sample spacing (time per sample)
    pub dt: f64,
    /// Scale resolution
    pub dj: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            dj: DEFAULT_DJ,
        }
    }
}

impl AnalysisConfig {
    pub fn new(dt: f64, dj: f64) -> Self {
        Self { dt, dj }
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_dj(mut self, dj: f64) -> Self {
        self.dj = dj;
        self
    }

    pub fn validate(&self) -> CwtResult<()> {
        ensure_positive("dt", self.dt)?;
        ensure_positive("dj", self.dj)?;
        Ok(())
    }
}

/// Builds the scale ladder for a signal of `n` samples spaced `dt` apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSetBuilder {
    n: usize,
    dt: f64,
    dj: f64,
}

impl ScaleSetBuilder {
    /// Create a builder with the default resolution
    pub fn new(n: usize, dt: f64) -> Self {
        Self {
            n,
            dt,
            dj: DEFAULT_DJ,
        }
    }

    pub fn from_config(n: usize, config: &AnalysisConfig) -> Self {
        Self {
            n,
            dt: config.dt,
            dj: config.dj,
        }
    }

    pub fn with_resolution(mut self, dj: f64) -> Self {
        self.dj = dj;
        self
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn dj(&self) -> f64 {
        self.dj
    }

    /// Smallest resolvable scale
    pub fn s0(&self) -> f64 {
        2.0 * self.dt
    }

    /// Index `J` of the largest scale
    ///
    /// # Errors
    /// - `InvalidParameter` if `n == 0`, `dt <= 0` or `dj <= 0`
    /// - `DegenerateSignal` if `n * dt <= s0`
    pub fn max_index(&self) -> CwtResult<usize> {
        if self.n == 0 {
            return Err(CwtError::invalid("n", self.n));
        }
        let dt = ensure_positive("dt", self.dt)?;
        let dj = ensure_positive("dj", self.dj)?;

        let s0 = self.s0();
        let duration = self.n as f64 * dt;
        if duration <= s0 {
            return Err(CwtError::DegenerateSignal {
                length: self.n,
                dt,
                min_scale: s0,
            });
        }

        let j = ((1.0 / dj) * (duration / s0).log2()).floor();
        if !j.is_finite() || j >= MAX_LADDER_LEN as f64 {
            return Err(CwtError::invalid("dj", dj));
        }

        Ok(j as usize)
    }

    /// Compute the ladder `s0 * 2^(j * dj)` for `j = 0..=J`
    pub fn scales(&self) -> CwtResult<ScaleLadder> {
        let j_max = self.max_index()?;
        let s0 = self.s0();
        let dj = self.dj;

        if dj > MAX_MORLET_DJ {
            tracing::warn!(dj, max = MAX_MORLET_DJ, "scale resolution undersamples the Morlet");
        }

        let scales = Array1::from_shape_fn(j_max + 1, |j| s0 * 2.0_f64.powf(j as f64 * dj));
        tracing::debug!(n = self.n, dt = self.dt, dj, j = j_max, "built scale ladder");

        Ok(ScaleLadder { scales, s0, dj })
    }
}

/// Strictly increasing set of analysis scales
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleLadder {
    scales: Array1<f64>,
    s0: f64,
    dj: f64,
}

impl ScaleLadder {
    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn dj(&self) -> f64 {
        self.dj
    }

    /// Index of the largest scale
    pub fn max_index(&self) -> usize {
        self.scales.len() - 1
    }

    /// Number of octaves spanned, `J * dj`
    pub fn octaves(&self) -> f64 {
        self.max_index() as f64 * self.dj
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Always false; a ladder holds at least `s0`
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.scales.iter().copied()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.scales
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.scales
    }

    /// Equivalent Fourier period of each scale for `family`
    pub fn fourier_periods(&self, family: WaveletFamily, width: f64) -> CwtResult<Array1<f64>> {
        let factor = family.fourier_factor(width)?;
        Ok(self.scales.mapv(|s| s * factor))
    }

    /// Reciprocal of [`ScaleLadder::fourier_periods`]
    pub fn frequencies(&self, family: WaveletFamily, width: f64) -> CwtResult<Array1<f64>> {
        Ok(self.fourier_periods(family, width)?.mapv(|p| 1.0 / p))
    }
}
