//! Rules engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CaptureRule, GameState, MoveOutcome, RulesConfig, RulesOptions, Side};
use crate::rules;

/// Map a crate error to `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn side_from_index(index: usize) -> PyResult<Side> {
    Side::from_index(index).ok_or_else(|| value_error(format!("side must be 0 or 1, got {index}")))
}

/// Python wrapper for RulesConfig.
#[pyclass(name = "RulesConfig", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyRulesConfig(pub RulesConfig);

#[pymethods]
impl PyRulesConfig {
    /// Validate a rules configuration.
    ///
    /// # Arguments
    /// - pits_per_side: Pits in each row (default: 6)
    /// - seeds_per_pit: Seeds per pit at the start (default: 4)
    /// - extra_turn_on_store: Last seed in own store keeps the turn (default: True)
    /// - sweep_on_game_end: Remaining seeds go to their owners at the end (default: True)
    /// - capture_rule: "kalah" or "none" (default: "kalah")
    /// - allow_move_from_empty: Empty pits are legal moves (default: False)
    #[new]
    #[pyo3(signature = (
        pits_per_side = 6,
        seeds_per_pit = 4,
        extra_turn_on_store = true,
        sweep_on_game_end = true,
        capture_rule = "kalah",
        allow_move_from_empty = false
    ))]
    fn new(
        pits_per_side: i64,
        seeds_per_pit: i64,
        extra_turn_on_store: bool,
        sweep_on_game_end: bool,
        capture_rule: &str,
        allow_move_from_empty: bool,
    ) -> PyResult<Self> {
        let capture_rule = match capture_rule {
            "kalah" => CaptureRule::Kalah,
            "none" => CaptureRule::None,
            other => return Err(value_error(format!("unknown capture rule: {other}"))),
        };

        RulesOptions::new()
            .with_pits_per_side(pits_per_side)
            .with_seeds_per_pit(seeds_per_pit)
            .with_extra_turn(extra_turn_on_store)
            .with_sweep(sweep_on_game_end)
            .with_capture_rule(capture_rule)
            .with_moves_from_empty(allow_move_from_empty)
            .build()
            .map(Self)
            .map_err(value_error)
    }

    #[getter]
    fn pits_per_side(&self) -> usize {
        self.0.pits_per_side()
    }

    #[getter]
    fn seeds_per_pit(&self) -> u32 {
        self.0.seeds_per_pit()
    }

    #[getter]
    fn extra_turn_on_store(&self) -> bool {
        self.0.extra_turn_on_store()
    }

    #[getter]
    fn sweep_on_game_end(&self) -> bool {
        self.0.sweep_on_game_end()
    }

    #[getter]
    fn capture_rule(&self) -> &'static str {
        match self.0.capture_rule() {
            CaptureRule::Kalah => "kalah",
            CaptureRule::None => "none",
        }
    }

    #[getter]
    fn allow_move_from_empty(&self) -> bool {
        self.0.allow_move_from_empty()
    }

    fn __repr__(&self) -> String {
        format!(
            "RulesConfig(pits={}, seeds={}, capture={})",
            self.0.pits_per_side(),
            self.0.seeds_per_pit(),
            self.capture_rule()
        )
    }
}

/// Python wrapper for GameState.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    /// Standard opening for `rules`, `start` to move (0 or 1).
    #[staticmethod]
    #[pyo3(signature = (rules, start = 0))]
    fn standard(rules: &PyRulesConfig, start: usize) -> PyResult<Self> {
        Ok(Self(rules::init_standard(&rules.0, side_from_index(start)?)))
    }

    /// Arbitrary position from explicit rows and stores.
    #[staticmethod]
    #[pyo3(signature = (rules, pits0, pits1, store0 = 0, store1 = 0, to_move = 0))]
    fn from_arrays(
        rules: &PyRulesConfig,
        pits0: Vec<u32>,
        pits1: Vec<u32>,
        store0: u32,
        store1: u32,
        to_move: usize,
    ) -> PyResult<Self> {
        rules::init_from_arrays(&rules.0, &pits0, &pits1, store0, store1, side_from_index(to_move)?)
            .map(Self)
            .map_err(value_error)
    }

    #[getter]
    fn to_move(&self) -> usize {
        self.0.to_move().index()
    }

    #[getter]
    fn pits0(&self) -> Vec<u32> {
        self.0.pits(Side::South).to_vec()
    }

    #[getter]
    fn pits1(&self) -> Vec<u32> {
        self.0.pits(Side::North).to_vec()
    }

    #[getter]
    fn stores(&self) -> (u32, u32) {
        (self.0.store(Side::South), self.0.store(Side::North))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(pits0={:?}, pits1={:?}, stores={:?}, to_move={})",
            self.pits0(),
            self.pits1(),
            self.stores(),
            self.to_move()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome", frozen)]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn state(&self) -> PyGameState {
        PyGameState(self.0.state.clone())
    }

    #[getter]
    fn extra_turn(&self) -> bool {
        self.0.extra_turn
    }

    /// Seeds captured, or None.
    #[getter]
    fn captured(&self) -> Option<u32> {
        self.0.capture.map(|c| c.seeds)
    }

    #[getter]
    fn swept(&self) -> bool {
        self.0.swept
    }

    #[getter]
    fn terminal(&self) -> bool {
        self.0.terminal
    }

    #[getter]
    fn already_terminal(&self) -> bool {
        self.0.already_terminal
    }

    /// Sowing path as (kind, side, index) tuples; kind is "pit" or "store".
    #[getter]
    fn path(&self) -> Vec<(&'static str, usize, Option<usize>)> {
        use crate::core::Landing;

        self.0
            .path
            .iter()
            .map(|landing| match landing {
                Landing::Pit { side, index } => ("pit", side.index(), Some(index)),
                Landing::Store { side } => ("store", side.index(), None),
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(pit={}, extra_turn={}, captured={:?}, terminal={})",
            self.0.pit,
            self.0.extra_turn,
            self.captured(),
            self.0.terminal
        )
    }
}

/// Apply a move; raises ValueError if it is illegal.
#[pyfunction]
pub fn apply_move(state: &PyGameState, rules: &PyRulesConfig, pit: usize) -> PyResult<PyMoveOutcome> {
    rules::apply_move(&state.0, &rules.0, pit)
        .map(PyMoveOutcome)
        .map_err(value_error)
}

#[pyfunction]
pub fn legal_moves(state: &PyGameState, rules: &PyRulesConfig) -> Vec<usize> {
    rules::legal_moves(&state.0, &rules.0).to_vec()
}

#[pyfunction]
pub fn is_terminal(state: &PyGameState, rules: &PyRulesConfig) -> bool {
    rules::is_terminal(&state.0, &rules.0)
}

#[pyfunction]
pub fn apply_sweep(state: &PyGameState, rules: &PyRulesConfig) -> PyGameState {
    PyGameState(rules::apply_sweep(&state.0, &rules.0))
}
