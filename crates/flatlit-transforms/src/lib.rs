//! Object-literal flattening for the flatlit workspace.
//!
//! - `transforms::object_extraction`: the `ObjectLiteralFlattener` rewrite
//! - `extraction_pass`: driver that applies the rewrite to a whole program
//! - `options`: user-facing configuration
//! - `printer`: renders the arena back to JavaScript

pub mod options;
pub use options::FlattenOptions;

pub mod transforms;
pub use transforms::object_extraction::{
    ExtractOutcome, ExtractResult, IneligibleReason, ObjectLiteralFlattener,
};

pub mod extraction_pass;
pub use extraction_pass::{ExtractionSummary, ObjectExtractionPass};

pub mod printer;
pub use printer::NodePrinter;
