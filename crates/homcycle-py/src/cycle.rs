//! Optimal one-cycle search binding.

use crate::common::map_search_err;
use pyo3::prelude::*;

/// Shortest loop through 1-cell `birth`; `None` if there is none.
#[pyfunction]
fn search(bytes: &[u8], birth: u64) -> PyResult<Option<Vec<u64>>> {
    let cycle = homcycle::api::search(bytes, birth).map_err(map_search_err)?;
    Ok(cycle.map(|ids| ids.into_iter().map(|c| c.0).collect()))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(search, m)?)?;
    Ok(())
}
