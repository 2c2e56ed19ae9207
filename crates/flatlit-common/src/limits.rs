//! Centralized limits for AST traversal and object-literal flattening.
//!
//! Every recursive walk in the workspace is bounded by one of these
//! constants so that pathological input degrades to "leave it alone"
//! instead of overflowing the stack.

/// Maximum depth for AST traversal in the extraction pass.
///
/// Subtrees nested deeper than this are not searched for object literals.
/// Used in `extraction_pass.rs`.
///
/// # JavaScript example
///
/// ```javascript
/// // Deeply nested blocks:
/// {{{{{{{{{{{{{{{{{{{{{{{{{
///   var x = { a: 1 }; // 500 levels of nesting
/// }}}}}}}}}}}}}}}}}}}}}}}}}
/// ```
pub const MAX_AST_DEPTH: u32 = 500;

/// Default maximum nesting depth for recursive object-literal flattening.
///
/// A nested literal found at this depth is assigned whole instead of being
/// flattened further. Used as the default for `FlattenOptions::max_nesting_depth`.
///
/// # JavaScript example
///
/// ```javascript
/// var config = {
///   a: {
///     b: {
///       c: { d: 1 } // each level adds one to the nesting depth
///     }
///   }
/// };
/// ```
pub const MAX_OBJECT_NESTING_DEPTH: u32 = 100;

/// Maximum node depth when importing an ESTree document.
///
/// ESTree JSON is recursive; the importer refuses documents nested deeper
/// than this rather than recursing without bound. JSON text is already
/// capped by serde_json's own 128-level recursion limit, which is hit
/// first, so this bound applies to `serde_json::Value` trees built in
/// memory and handed to the importer directly.
pub const MAX_ESTREE_DEPTH: u32 = 256;
