//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_mancala as kalah
//!
//! engine = kalah.Engine()
//! summary = engine.apply_move(kalah.hint(engine))
//! if not summary.game_over and engine.current_player == 1:
//!     engine.apply_move(kalah.choose_best(engine, 1))
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rust_mancala: Kalah rules and a move evaluator.
#[pymodule]
fn rust_mancala(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_class::<PyMoveSummary>()?;

    m.add_function(wrap_pyfunction!(choose_best, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_move, m)?)?;
    m.add_function(wrap_pyfunction!(hint, m)?)?;

    Ok(())
}
