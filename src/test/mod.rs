//! Shared fixtures for the unit tests
//!
//! Graph factories used across the algorithm test modules. Each factory documents the shape
//! it builds so expected traversal orders can be read off directly.

pub mod factories;
