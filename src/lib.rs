//! World of Magic (workspace facade crate).
//!
//! Re-exports the gameplay crates under `world_of_magic::{core,input,term,types}`
//! and hosts the runner's configuration and session journal.

pub mod config;
pub mod journal;

pub use world_of_magic_core as core;
pub use world_of_magic_input as input;
pub use world_of_magic_term as term;
pub use world_of_magic_types as types;
