use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use homcycle::api::{MatrixError, SearchError};

pub fn non_negative(name: &str, v: i64) -> PyResult<usize> {
    usize::try_from(v).map_err(|_| PyValueError::new_err(format!("{name} must be >= 0, got {v}")))
}

pub fn map_matrix_err(err: MatrixError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_search_err(err: SearchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
