//! Host-side port implementations for running the flows from a terminal.

mod navigator;
mod picker;

pub use navigator::ConsoleNavigator;
pub use picker::PathImagePicker;
