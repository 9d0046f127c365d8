//! HTML template rendering handlers for the calculator UI.

mod calculator;

pub use calculator::calculator_handler;
