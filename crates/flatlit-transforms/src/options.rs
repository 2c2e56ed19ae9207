//! Options controlling the object-literal flattening rewrite.

use flatlit_common::limits::MAX_OBJECT_NESTING_DEPTH;
use serde::{Deserialize, Serialize};

/// Configuration for `ObjectLiteralFlattener` and `ObjectExtractionPass`.
///
/// Deserialized from the `--config` JSON file with camelCase keys; missing
/// keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FlattenOptions {
    /// Flatten `get`/`set` accessors and methods like plain properties.
    ///
    /// An accessor turned into an assignment stores the function instead of
    /// defining an accessor. Defaults to `true`, which applies no accessor
    /// check at all; set `false` to keep such entries in the literal.
    pub flatten_accessors: bool,

    /// How many levels of nested object literals below the top-level one
    /// are flattened. Deeper literals are assigned whole.
    pub max_nesting_depth: u32,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            flatten_accessors: true,
            max_nesting_depth: MAX_OBJECT_NESTING_DEPTH,
        }
    }
}
