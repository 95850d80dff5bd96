//! Command-line front end: argument parsing and the interactive session.

mod args;
mod session;

pub use args::Args;
pub use session::Session;
