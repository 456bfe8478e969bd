//! Command implementations for Inlay CLI

pub mod add;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod menu;
pub mod show;
