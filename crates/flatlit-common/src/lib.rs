//! Common types and utilities for the flatlit workspace.
//!
//! This crate provides foundational items used across all flatlit crates:
//! - Traversal and rewrite limits

// Centralized limits and thresholds
pub mod limits;
