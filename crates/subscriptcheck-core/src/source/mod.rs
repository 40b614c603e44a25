pub mod input;
pub mod parse;

pub use input::{ResolvedSource, SourceKind, resolve_source};
pub use parse::parse_source;
