//! # Wavelet Scales - scale ladders and wavelet kernels for CWT analysis
//!
//! Given a regularly sampled signal, this library computes the set of
//! analysis scales a continuous wavelet transform should be evaluated at,
//! and exposes the admissible wavelet kernels (Morlet, Ricker/DOG2) a
//! transform stage would convolve against the signal.
//!
//! ```
//! use wavelet_scales::{ScaleSetBuilder, WaveletLibrary};
//!
//! let scales = ScaleSetBuilder::new(256, 1.0).scales().unwrap();
//! assert_eq!(scales.s0(), 2.0);
//!
//! let morlet = WaveletLibrary::new().kernel_for("morlet").unwrap();
//! assert_eq!(morlet(64, 5.0).unwrap().len(), 64);
//! ```

pub mod cwt;

pub use cwt::*;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn wavelet_scales(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cwt::cwt_scales_py, m)?)?;
    m.add_function(wrap_pyfunction!(cwt::wavelet_kernel_py, m)?)?;

    Ok(())
}
