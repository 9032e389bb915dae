/// The element tree and its construction
mod dom;
mod error;
/// Validation of tag names
mod parsing;
/// Serialization of elements to markup
mod render;

pub use dom::{Attributes, Element, ElementBuilder};
pub use error::MarkupError;

#[cfg(test)]
mod tests;
