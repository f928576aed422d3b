//! Lowering from Go type declarations to Flow type definitions.
//!
//! The pipeline is strictly top-down. The emitter classifies each
//! declaration's underlying shape (alias, array, map, struct) and drives
//! per-field work: the tag interpreter decides the wire name and
//! optionality, the nullability classifier decides the `?` value marker,
//! and the type resolver turns type shapes into Flow text.

mod config;
mod emitter;
mod tags;
mod types;

#[cfg(test)]
mod types_tests;

pub use config::Config;
pub use emitter::{Emitter, emit, emit_with_config};
