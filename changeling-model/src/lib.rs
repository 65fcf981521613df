//! Structural model types for the changeling source emission layer.
//!
//! This crate provides the in-memory representation of packages and declared
//! types that a generation engine walks when it emits source files. The
//! model is built once, treated as read-only for the duration of a
//! generation run, and consumed by converter implementations.
//!
//! # Architecture
//!
//! ```text
//! schema → Model (packages + types) → engine walk → changeling (emission)
//! ```
//!
//! The model types are designed to be:
//! - Language-agnostic (no Java/Kotlin-specific concerns)
//! - Self-contained (serde for serialization, nothing else)

mod package;

pub use package::{Model, Package, TypeDecl, TypeKind};
