//! Python bindings for the 2048 board engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(seed=42)
//! game.start()
//!
//! if game.move("left"):
//!     game.add_new_tile()
//!     game.check_game_over()
//!
//! print(game.get_state(), game.get_score(), game.get_status())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_2048: the 2048 board engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyTurnReport>()?;

    Ok(())
}
