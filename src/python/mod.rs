//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import kalah_engine as kalah
//!
//! rules = kalah.RulesConfig()
//! state = kalah.GameState.standard(rules, start=0)
//!
//! pit, score = kalah.best_move(state, rules, depth=6)
//! outcome = kalah.apply_move(state, rules, pit)
//! print(outcome.state, outcome.extra_turn)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_search;

pub use py_core::*;
pub use py_search::*;

/// kalah_engine: Kalah rules and alpha-beta move advice.
#[pymodule]
fn kalah_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRulesConfig>()?;
    m.add_class::<PyGameState>()?;
    m.add_class::<PyMoveOutcome>()?;

    m.add_function(wrap_pyfunction!(py_core::apply_move, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::legal_moves, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::is_terminal, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::apply_sweep, m)?)?;

    m.add_function(wrap_pyfunction!(py_search::best_move, m)?)?;
    m.add_function(wrap_pyfunction!(py_search::rank_moves, m)?)?;
    m.add_function(wrap_pyfunction!(py_search::perft, m)?)?;
    m.add_function(wrap_pyfunction!(py_search::random_playout, m)?)?;

    Ok(())
}
