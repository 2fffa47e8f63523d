//! Wavelet function generation
//!
//! Admissible wavelets have zero mean and are localised in both time and
//! frequency. Two families are provided:
//!
//! - **Morlet**: complex, returns amplitude and phase, suited to
//!   oscillatory behaviour.
//! - **Ricker** (Mexican hat, Marr, derivative of Gaussian order 2): real,
//!   suited to isolating peaks and discontinuities.
//!
//! Kernels are functions of a dimensionless time parameter. The family set
//! is closed; lookup by name goes through a fixed table in which `dog2` maps
//! onto the same variant, and therefore the same function, as `ricker`.
//!
//! # References
//! - Torrence & Compo, A Practical Guide to Wavelet Analysis (BAMS, 1998),
//!   sections 3.b and 3.e, table 1
//! - scipy.signal.morlet / scipy.signal.ricker

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::error::{ensure_positive, CwtError, CwtResult};

/// Default non-dimensional frequency for the Morlet wavelet
pub const DEFAULT_MORLET_W0: f64 = 5.0;

/// Kernel generator signature: `(length, width) -> samples`
pub type KernelFn = fn(usize, f64) -> CwtResult<KernelSamples>;

/// Registered names, aliases included.
const REGISTRY: [(&str, WaveletFamily); 3] = [
    ("morlet", WaveletFamily::Morlet),
    ("ricker", WaveletFamily::Ricker),
    // aka derivative of Gaussian order 2, mexican hat or marr
    ("dog2", WaveletFamily::Ricker),
];

/// Closed set of admissible wavelet families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveletFamily {
    /// Complex Morlet wavelet
    Morlet,
    /// Real Ricker wavelet (DOG order 2)
    #[serde(alias = "dog2")]
    Ricker,
}

/// Whether a kernel produces complex or real samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Complex,
    Real,
}

/// Domain in which a family is the more sharply localised of the two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Localization {
    Time,
    Frequency,
}

/// Admissibility metadata for a wavelet family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admissibility {
    pub output: OutputKind,
    pub sharper_in: Localization,
    pub zero_mean: bool,
}

/// Samples produced by a kernel generator
#[derive(Debug, Clone, PartialEq)]
pub enum KernelSamples {
    Complex(Array1<Complex64>),
    Real(Array1<f64>),
}

impl KernelSamples {
    pub fn len(&self) -> usize {
        match self {
            Self::Complex(psi) => psi.len(),
            Self::Real(psi) => psi.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    pub fn as_complex(&self) -> Option<&Array1<Complex64>> {
        match self {
            Self::Complex(psi) => Some(psi),
            Self::Real(_) => None,
        }
    }

    pub fn as_real(&self) -> Option<&Array1<f64>> {
        match self {
            Self::Real(psi) => Some(psi),
            Self::Complex(_) => None,
        }
    }

    /// Promote to complex samples (real kernels get a zero imaginary part)
    pub fn to_complex(&self) -> Array1<Complex64> {
        match self {
            Self::Complex(psi) => psi.clone(),
            Self::Real(psi) => psi.mapv(|v| Complex64::new(v, 0.0)),
        }
    }
}

impl WaveletFamily {
    /// Every family, one entry per variant
    pub const ALL: [WaveletFamily; 2] = [WaveletFamily::Morlet, WaveletFamily::Ricker];

    /// Canonical registry name
    pub fn name(self) -> &'static str {
        match self {
            Self::Morlet => "morlet",
            Self::Ricker => "ricker",
        }
    }

    /// Kernel generator for this family
    pub fn kernel(self) -> KernelFn {
        match self {
            Self::Morlet => morlet_kernel,
            Self::Ricker => ricker_kernel,
        }
    }

    /// Generate `length` samples of this family's kernel
    pub fn generate(self, length: usize, width: f64) -> CwtResult<KernelSamples> {
        (self.kernel())(length, width)
    }

    pub fn admissibility(self) -> Admissibility {
        match self {
            Self::Morlet => Admissibility {
                output: OutputKind::Complex,
                sharper_in: Localization::Frequency,
                zero_mean: true,
            },
            Self::Ricker => Admissibility {
                output: OutputKind::Real,
                sharper_in: Localization::Time,
                zero_mean: true,
            },
        }
    }

    pub fn is_complex(self) -> bool {
        self.admissibility().output == OutputKind::Complex
    }

    /// Ratio of equivalent Fourier period to scale
    ///
    /// # Formula
    /// ```text
    /// morlet: 4*pi / (w0 + sqrt(2 + w0^2))
    /// dog2:   2*pi / sqrt(2 + 1/2)
    /// ```
    /// `width` is the Morlet `w0`; the Ricker factor does not depend on it
    /// but it is still validated.
    pub fn fourier_factor(self, width: f64) -> CwtResult<f64> {
        let w0 = ensure_positive("width", width)?;
        Ok(match self {
            Self::Morlet => 4.0 * PI / (w0 + (2.0 + w0 * w0).sqrt()),
            Self::Ricker => 2.0 * PI / 2.5_f64.sqrt(),
        })
    }
}

impl fmt::Display for WaveletFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveletFamily {
    type Err = CwtError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|&(_, family)| family)
            .ok_or_else(|| CwtError::UnknownFamily(name.to_string()))
    }
}

/// Registry of admissible wavelet kernels
///
/// Zero-sized and stateless; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveletLibrary;

impl WaveletLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a registered name (or alias) to its family
    pub fn family(&self, name: &str) -> CwtResult<WaveletFamily> {
        name.parse()
    }

    /// Resolve a registered name (or alias) to its kernel generator
    pub fn kernel_for(&self, name: &str) -> CwtResult<KernelFn> {
        let family = self.family(name)?;
        tracing::debug!(name, family = family.name(), "resolved wavelet kernel");
        Ok(family.kernel())
    }

    /// All registered names, aliases included
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|&(name, _)| name)
    }
}

fn morlet_kernel(length: usize, width: f64) -> CwtResult<KernelSamples> {
    morlet(length, width, 1.0, true).map(KernelSamples::Complex)
}

fn ricker_kernel(length: usize, width: f64) -> CwtResult<KernelSamples> {
    ricker(length, width).map(KernelSamples::Real)
}

/// Generate a complex Morlet wavelet
///
/// # Arguments
/// * `length` - Number of samples
/// * `w` - Non-dimensional frequency (omega0)
/// * `s` - Scaling factor, windowed over `[-2*pi*s, 2*pi*s]`
/// * `complete` - Subtract the correction term that makes the mean zero
///
/// # Formula
/// ```text
/// psi(x) = pi^(-1/4) * (exp(i*w*x) - exp(-w^2/2)) * exp(-x^2/2)
/// ```
/// The correction term is omitted when `complete` is false; it is
/// negligible for `w >= 5`.
pub fn morlet(length: usize, w: f64, s: f64, complete: bool) -> CwtResult<Array1<Complex64>> {
    ensure_length(length)?;
    let w = ensure_positive("width", w)?;
    let s = ensure_positive("s", s)?;

    let x = Array1::linspace(-s * 2.0 * PI, s * 2.0 * PI, length);

    let norm_factor = PI.powf(-0.25);
    let correction = if complete { (-0.5 * w * w).exp() } else { 0.0 };

    let psi = x.mapv(|xi: f64| {
        let envelope = (-0.5 * xi * xi).exp() * norm_factor;
        (Complex64::from_polar(1.0, w * xi) - correction) * envelope
    });

    Ok(psi)
}

/// Generate a Ricker (Mexican hat) wavelet
///
/// # Formula
/// ```text
/// A = 2 / (sqrt(3*a) * pi^(1/4))
/// psi(x) = A * (1 - x^2/a^2) * exp(-x^2 / (2*a^2)),  x = k - (length - 1) / 2
/// ```
pub fn ricker(length: usize, a: f64) -> CwtResult<Array1<f64>> {
    ensure_length(length)?;
    let a = ensure_positive("width", a)?;

    let amplitude = 2.0 / ((3.0 * a).sqrt() * PI.powf(0.25));
    let wsq = a * a;
    let center = (length - 1) as f64 / 2.0;

    Ok(Array1::from_shape_fn(length, |k| {
        let xsq = (k as f64 - center).powi(2);
        amplitude * (1.0 - xsq / wsq) * (-xsq / (2.0 * wsq)).exp()
    }))
}

fn ensure_length(length: usize) -> CwtResult<usize> {
    if length == 0 {
        return Err(CwtError::invalid("length", length));
    }
    Ok(length)
}
