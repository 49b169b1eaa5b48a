//! Terminal output formatting
//!
//! Colored tiles, emoji grids and the keyboard display. The solver core
//! never formats anything; drivers call into this module.

pub mod display;
pub mod formatters;
pub mod keyboard;

pub use display::{print_benchmark_result, print_solve_result, write_status};
pub use keyboard::Keyboard;
