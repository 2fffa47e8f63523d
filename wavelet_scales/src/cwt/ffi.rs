//! Python FFI bindings for scale ladders and wavelet kernels
//!
//! Provides Python-callable functions using PyO3.

use numpy::{IntoPyArray, PyArray1};
use pyo3::prelude::*;

use super::error::CwtError;
use super::scales::{ScaleSetBuilder, DEFAULT_DJ};
use super::wavelets::{KernelSamples, WaveletLibrary};

fn to_py_err(e: CwtError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

/// Python-callable scale ladder
///
/// # Arguments
/// * `n` - Signal length
/// * `dt` - Sample spacing (default: 1.0)
/// * `dj` - Scale resolution (default: 0.125)
///
/// # Example (Python)
/// ```python
/// import wavelet_scales
/// scales = wavelet_scales.cwt_scales_py(256, 1.0, 0.125)
/// ```
#[pyfunction]
#[pyo3(signature = (n, dt=1.0, dj=DEFAULT_DJ))]
pub fn cwt_scales_py<'py>(
    py: Python<'py>,
    n: usize,
    dt: f64,
    dj: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let ladder = ScaleSetBuilder::new(n, dt)
        .with_resolution(dj)
        .scales()
        .map_err(to_py_err)?;

    Ok(ladder.into_inner().into_pyarray(py))
}

/// Python-callable kernel generator
///
/// Returns a float array for real families and a complex array for
/// complex ones.
#[pyfunction]
#[pyo3(signature = (family, length, width))]
pub fn wavelet_kernel_py(
    py: Python<'_>,
    family: &str,
    length: usize,
    width: f64,
) -> PyResult<PyObject> {
    let kernel = WaveletLibrary::new().kernel_for(family).map_err(to_py_err)?;

    let psi = match kernel(length, width).map_err(to_py_err)? {
        KernelSamples::Complex(psi) => psi.into_pyarray(py).into_any().unbind(),
        KernelSamples::Real(psi) => psi.into_pyarray(py).into_any().unbind(),
    };

    Ok(psi)
}
