// Handlers are referenced by full path in `generate_handler!`; the macro
// cannot see through `pub use` re-exports.
pub mod common;
pub mod tasks;
