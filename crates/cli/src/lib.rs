//! ufotweak CLI library.

pub mod cli;
pub mod io;
pub mod parallel;

// Command implementations
pub mod tweak;
pub mod update;

pub use ufotweak_font_tweak::Tweaks;
pub use ufotweak_font_updater::{UpdateOptions, Updater};
