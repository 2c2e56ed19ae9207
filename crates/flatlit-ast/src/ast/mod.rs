//! Arena-allocated AST.
//!
//! Nodes live in a single `NodeArena` and refer to each other by
//! `NodeIndex`. Two parents may hold the same index; a mutation made
//! through one of them is visible through the other.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;

pub use base::{NodeIndex, NodeList};
pub use node::*;
