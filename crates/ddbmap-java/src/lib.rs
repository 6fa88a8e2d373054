pub mod serializer;
pub use serializer::Serializer;

pub mod source;
pub use source::{JavaSource, RenderedMethod};
