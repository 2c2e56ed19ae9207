//! JavaScript AST for the flatlit workspace.
//!
//! This crate provides:
//! - The arena-allocated node tree (`NodeArena`, `NodeIndex`, `Node`)
//! - Shape predicates and node builders used by rewrite passes
//! - Scope utilities: enclosing-scope lookup, statement insertion and
//!   parent-link rebuilding
//! - Import of ESTree JSON documents into the arena

pub mod ast;
pub use ast::{Node, NodeArena, NodeIndex, NodeKind, NodeList};

// Syntax utilities shared by transforms
pub mod syntax;

// ESTree JSON import
pub mod estree;
