pub mod app;
pub mod cli;
pub mod logging;

pub use app::{run, RunSummary};
pub use cli::{CliArgs, OutputFormat};
