//! # CWT (Continuous Wavelet Transform) Module
//!
//! Scale ladders and admissible wavelet kernels, the inputs a continuous
//! wavelet transform is assembled from.

pub mod error;
pub mod wavelets;
pub mod scales;
pub mod analysis;
#[cfg(feature = "python")]
pub mod ffi;

pub use analysis::WaveletAnalysis;
pub use error::{CwtError, CwtResult};
pub use scales::{AnalysisConfig, ScaleLadder, ScaleSetBuilder, DEFAULT_DJ};
pub use wavelets::{
    morlet, ricker, Admissibility, KernelFn, KernelSamples, Localization, OutputKind,
    WaveletFamily, WaveletLibrary, DEFAULT_MORLET_W0,
};

#[cfg(feature = "python")]
pub use ffi::{cwt_scales_py, wavelet_kernel_py};
