pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod trace;

pub use gesture_oui as engine;
