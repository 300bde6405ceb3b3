pub mod commands;
pub mod render;
pub mod session;
pub mod setup;
pub mod styles;

pub use commands::run;
