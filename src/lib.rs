pub mod archive;
pub mod cli;
pub mod defaults;
pub mod executor;
pub mod parser;

// Re-export main types
pub use executor::{Engine, ExecError, ExecutionContext, Script, Val};
pub use parser::parse_script;
