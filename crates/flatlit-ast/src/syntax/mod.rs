//! Syntax utilities shared by rewrite passes.

pub mod js_number;
pub mod scope_utils;

pub use js_number::format_js_number;
pub use scope_utils::{get_enclosing_scope, insert_after, rebuild_parent_links};
