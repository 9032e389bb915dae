//! Build a tree of markup elements and render it to text.
//!
//! ```
//! use tagtree::Element;
//!
//! let mut div = Element::builder("div").class(["container"]).build()?;
//! div.add(Element::builder("p").text("hello").build()?);
//! assert_eq!(div.to_string(), r#"<div class="container"><p >hello</p></div>"#);
//! # Ok::<(), tagtree::MarkupError>(())
//! ```

/// Markup elements, their serialization and emission
pub mod html;

pub use html::{Attributes, Element, ElementBuilder, MarkupError};
