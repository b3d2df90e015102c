pub mod error;
pub mod repl;
pub mod report;
pub mod scanner;

// Re-export error types for convenience
pub use error::{ScanError, ScanErrorKind};
pub use scanner::{ScanOutput, scan};
