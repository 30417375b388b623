//! Library side of the `pbp` command-line tool.

pub mod logging;
pub mod summary;
pub mod workflow;
