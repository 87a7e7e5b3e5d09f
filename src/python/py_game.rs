//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Direction, EngineError, GameConfig};
use crate::game::{Game, TurnReport};

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

/// Python wrapper for Game.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - initial_state: Optional rows to start from (and return to on restart)
    /// - seed: RNG seed for deterministic tile placement
    /// - win_tile: Tile value that wins the game
    /// - strict: Refuse moves and spawns outside the playing status
    #[new]
    #[pyo3(signature = (initial_state = None, seed = None, win_tile = 2048, strict = false))]
    fn new(
        initial_state: Option<Vec<Vec<u32>>>,
        seed: Option<u64>,
        win_tile: u32,
        strict: bool,
    ) -> PyResult<Self> {
        let mut builder = Game::builder().config(
            GameConfig::default()
                .with_win_tile(win_tile)
                .strict(strict),
        );
        if let Some(rows) = &initial_state {
            builder = builder.initial_state(rows);
        }
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let game = builder.build().map_err(to_py_err)?;
        Ok(Self { game })
    }

    fn start(&mut self) -> PyResult<()> {
        self.game.start().map_err(to_py_err)
    }

    fn restart(&mut self) {
        self.game.restart();
    }

    /// Slide tiles. Accepts "left", "ArrowUp", "w", etc.
    ///
    /// Returns True if anything moved.
    #[pyo3(name = "move")]
    fn move_tiles(&mut self, direction: &str) -> PyResult<bool> {
        let direction: Direction = direction
            .parse()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        self.game.move_tiles(direction).map_err(to_py_err)
    }

    fn move_left(&mut self) -> PyResult<bool> {
        self.game.move_left().map_err(to_py_err)
    }

    fn move_right(&mut self) -> PyResult<bool> {
        self.game.move_right().map_err(to_py_err)
    }

    fn move_up(&mut self) -> PyResult<bool> {
        self.game.move_up().map_err(to_py_err)
    }

    fn move_down(&mut self) -> PyResult<bool> {
        self.game.move_down().map_err(to_py_err)
    }

    /// Place a new tile. Returns its (row, col), or None on a full board.
    fn add_new_tile(&mut self) -> PyResult<Option<(usize, usize)>> {
        self.game.add_new_tile().map_err(to_py_err)
    }

    /// Update and return the status string.
    fn check_game_over(&mut self) -> &'static str {
        self.game.check_game_over().as_str()
    }

    /// Move, spawn and check in one call.
    fn play_turn(&mut self, direction: &str) -> PyResult<PyTurnReport> {
        let direction: Direction = direction
            .parse()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        self.game
            .play_turn(direction)
            .map(PyTurnReport)
            .map_err(to_py_err)
    }

    /// Copy of the board as a list of rows.
    fn get_state(&self) -> Vec<Vec<u32>> {
        self.game.state()
    }

    fn get_score(&self) -> u64 {
        self.game.score()
    }

    /// One of "idle", "playing", "win", "lose".
    fn get_status(&self) -> &'static str {
        self.game.status().as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(score={}, status={}, tiles={})",
            self.game.score(),
            self.game.status(),
            self.game.board().tile_count()
        )
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}

/// Python wrapper for TurnReport.
#[pyclass(name = "TurnReport")]
#[derive(Clone, Debug)]
pub struct PyTurnReport(pub TurnReport);

#[pymethods]
impl PyTurnReport {
    #[getter]
    fn moved(&self) -> bool {
        self.0.moved
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.score_delta
    }

    #[getter]
    fn spawned(&self) -> Option<(usize, usize)> {
        self.0.spawned
    }

    #[getter]
    fn status(&self) -> &'static str {
        self.0.status.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "TurnReport(moved={}, score_delta={}, status={})",
            self.0.moved, self.0.score_delta, self.0.status
        )
    }
}
