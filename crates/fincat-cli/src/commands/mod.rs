//! Command implementations.

pub mod catalog;
