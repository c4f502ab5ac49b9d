//! Targets used with the [log] macros, so `RUST_LOG` can select e.g.
//! `RUST_LOG=dimacs_parse=debug`.

/// Logs from reading DIMACS input.
pub const PARSE: &str = "dimacs_parse";

/// Logs from writing DIMACS output.
pub const WRITE: &str = "dimacs_write";
