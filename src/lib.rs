//! Mastermind (workspace facade crate).
//!
//! The game rules live in dedicated crates under `crates/`; this package
//! re-exports them as `mastermind::{core,input,term,types}` and adds the
//! pieces the binary is built from: the command line, the interactive loop
//! and the scripted JSON mode.

pub mod app;
pub mod cli;
pub mod script;

pub use mastermind_core as core;
pub use mastermind_input as input;
pub use mastermind_term as term;
pub use mastermind_types as types;
