pub mod books;
pub mod reference;
pub mod reflow;
pub mod source;
pub mod structure;

// Re-export key types for easier usage
pub use books::{BOOKS, Book, BookNotFound, resolve};
pub use reference::{ReferenceError, ReferenceRange, VerseCursor, parse_reference};
pub use reflow::{BreakStyle, reflow};
pub use source::{PassageError, PassageSource, passage_query, render_passage};
pub use structure::{StructureError, structure};
