//! Engine and evaluator bindings.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, MoveSummary, PlayerId};
use crate::eval;
use crate::rules::GameEngine;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn to_player(player: u8) -> PyResult<PlayerId> {
    match PlayerId::new(player) {
        p @ (PlayerId::HUMAN | PlayerId::AI) => Ok(p),
        _ => Err(value_error(format!("player must be 0 or 1, got {player}"))),
    }
}

fn to_board(slots: Vec<u32>) -> PyResult<Board> {
    Board::try_from(slots).map_err(value_error)
}

/// Python wrapper for GameEngine.
#[pyclass(name = "Engine")]
#[derive(Clone)]
pub struct PyEngine(pub GameEngine);

#[pymethods]
impl PyEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - board: 14 slot counts, the standard opening if omitted
    /// - current_player: 0 or 1, player 0 if omitted
    #[new]
    #[pyo3(signature = (board = None, current_player = None))]
    fn new(board: Option<Vec<u32>>, current_player: Option<u8>) -> PyResult<Self> {
        let board = board.map(to_board).transpose()?;
        let player = current_player.map(to_player).transpose()?;
        Ok(Self(GameEngine::from_options(board, player)))
    }

    /// Restore the remembered initial position, or install a new one.
    #[pyo3(signature = (board = None, current_player = None))]
    fn reset(&mut self, board: Option<Vec<u32>>, current_player: Option<u8>) -> PyResult<()> {
        let board = board.map(to_board).transpose()?;
        let player = current_player.map(to_player).transpose()?;
        self.0.reset(board, player);
        Ok(())
    }

    /// Copy of the 14 slots.
    #[getter]
    fn board(&self) -> Vec<u32> {
        self.0.board().slots().to_vec()
    }

    /// Copy of the 14 slots as a numpy array.
    fn board_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.0.board().as_slice())
    }

    /// Stores as (player 0, player 1).
    #[getter]
    fn scores(&self) -> (u32, u32) {
        let scores = self.0.scores();
        (scores.human, scores.ai)
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player().0
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.is_game_over()
    }

    /// Legal pits for a player, ascending.
    fn valid_moves(&self, player: u8) -> Vec<usize> {
        self.0.valid_moves(PlayerId::new(player)).to_vec()
    }

    fn is_valid_move(&self, pit: usize, player: u8) -> bool {
        self.0.is_valid_move(pit, PlayerId::new(player))
    }

    /// Play a pit for the side to move.
    ///
    /// Raises ValueError if the move is not legal; the engine is unchanged.
    fn apply_move(&mut self, pit: usize) -> PyResult<PyMoveSummary> {
        self.0.apply_move(pit).map(PyMoveSummary).map_err(value_error)
    }

    /// Play a pit on a copy, returning (engine, summary).
    fn simulate_move(&self, pit: usize) -> PyResult<(PyEngine, PyMoveSummary)> {
        let (engine, summary) = self.0.simulate_move(pit).map_err(value_error)?;
        Ok((Self(engine), PyMoveSummary(summary)))
    }

    /// Independent copy of this engine.
    #[pyo3(name = "clone")]
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let status = if self.0.is_game_over() { "over" } else { "ongoing" };
        format!(
            "Engine(board={:?}, current_player={}, status={})",
            self.0.board().slots(),
            self.0.current_player().0,
            status
        )
    }
}

/// Python wrapper for MoveSummary. Read-only.
#[pyclass(name = "MoveSummary", frozen)]
#[derive(Clone)]
pub struct PyMoveSummary(pub MoveSummary);

#[pymethods]
impl PyMoveSummary {
    #[getter]
    fn player(&self) -> u8 {
        self.0.player.0
    }

    #[getter]
    fn pit(&self) -> usize {
        self.0.pit
    }

    #[getter]
    fn stones_picked(&self) -> u32 {
        self.0.stones_picked
    }

    /// Slots that received a stone, in drop order.
    #[getter]
    fn sequence(&self) -> Vec<usize> {
        self.0.sequence.clone()
    }

    #[getter]
    fn last_position(&self) -> usize {
        self.0.last_position
    }

    #[getter]
    fn landed_in_store(&self) -> bool {
        self.0.landed_in_store
    }

    /// Stones captured, 0 if none.
    #[getter]
    fn captured(&self) -> u32 {
        self.0.captured()
    }

    /// Pit emptied by the capture, None if none.
    #[getter]
    fn capture_opposite(&self) -> Option<usize> {
        self.0.capture.map(|c| c.opposite)
    }

    #[getter]
    fn swept(&self) -> bool {
        self.0.sweep.is_some()
    }

    #[getter]
    fn extra_turn(&self) -> bool {
        self.0.extra_turn
    }

    #[getter]
    fn board(&self) -> Vec<u32> {
        self.0.board.slots().to_vec()
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player.0
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    #[getter]
    fn scores(&self) -> (u32, u32) {
        (self.0.scores.human, self.0.scores.ai)
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveSummary(player={}, pit={}, last_position={}, extra_turn={}, captured={}, game_over={})",
            self.0.player.0,
            self.0.pit,
            self.0.last_position,
            self.0.extra_turn,
            self.0.captured(),
            self.0.game_over
        )
    }
}

/// Best pit for a player with the default weights, None without moves.
#[pyfunction]
pub fn choose_best(engine: &PyEngine, player: u8) -> Option<usize> {
    eval::choose_best(&engine.0, PlayerId::new(player))
}

/// Heuristic score of a pit for a player. Raises ValueError if illegal.
#[pyfunction]
pub fn evaluate_move(engine: &PyEngine, player: u8, pit: usize) -> PyResult<f64> {
    eval::evaluate_move(&engine.0, PlayerId::new(player), pit).map_err(value_error)
}

/// Suggested pit for player 0.
#[pyfunction]
pub fn hint(engine: &PyEngine) -> Option<usize> {
    eval::hint(&engine.0)
}
