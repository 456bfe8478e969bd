//! Dependency closure resolution over the component source tree
//!
//! This module is organized by stage:
//! - [`imports`]: comment stripping, import extraction, specifier
//!   classification and package normalization
//! - [`local`]: resolving a relative specifier to a concrete file
//! - [`graph`]: the worklist traversal that computes a component's closure

pub mod graph;
pub mod imports;
pub mod local;

pub use graph::{Closure, collect, component_files};
