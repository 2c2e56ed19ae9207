//! Rewrite rules over the arena AST.

pub mod object_extraction;
