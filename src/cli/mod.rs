//! Command-line front-end: argument parsing and subcommand dispatch.
//!
//! One binary, three verbs (spec §6), following the corpus's
//! one-binary-many-subcommand CLI shape with `clap`'s derive API rather
//! than the reference tool's hand-rolled argv scanner.

pub mod args;
pub mod run;
