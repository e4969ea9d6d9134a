pub mod commands;
pub mod context;
pub mod steps;

pub use context::{AppContext, Ports};
