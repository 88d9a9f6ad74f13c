//! Damascus CLI library.
//!
//! This crate provides the argument definitions and command implementations
//! behind the `damascus` binary: rendering patterns to PNG or PDF and
//! managing layer stack files.

pub mod cli_args;
pub mod commands;
