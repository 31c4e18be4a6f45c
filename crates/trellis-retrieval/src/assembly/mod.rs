//! Context assembly: formatted, citation-indexed evidence text plus
//! citation-usage extraction for generated answers.

pub mod assembler;
pub mod citations;

pub use assembler::assemble;
pub use citations::extract_used;
