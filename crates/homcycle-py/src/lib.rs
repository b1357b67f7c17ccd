//! PyO3 bindings for `homcycle`.
//!
//! Notes
//! - The Python side owns object lifecycle; each `Matrix` wraps one
//!   `BoundaryMatrix` value and drops it with the Python object.
//! - Precondition violations surface as `ValueError` here instead of panics,
//!   since inputs arrive from Python.

use pyo3::prelude::*;

mod common;
mod cycle;
mod matrix;

#[pymodule]
fn homcycle_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<matrix::Matrix>()?;
    cycle::register(m)?;
    m.add("__version__", homcycle::VERSION)?;
    Ok(())
}
