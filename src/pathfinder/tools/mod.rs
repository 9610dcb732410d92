pub mod aggregate;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod report;
pub mod tally;

pub use error::{Result, ToolError};
