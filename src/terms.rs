//! Term index access for spelling suggestions.
//!
//! A spell checker never reads index data itself. The host hands it a
//! [`TermIndex`] handle per request, which is passed through untouched to the
//! suggestion engine for term enumeration and frequency lookups.

pub mod memory;
pub mod reader;
pub mod term;

pub use memory::MemoryTermIndex;
pub use reader::TermIndex;
pub use term::Term;
