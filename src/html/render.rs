use std::fmt;
use std::io::{self, Write};
use tracing::{span, Level};

use super::dom::{Attributes, Element};

impl Attributes {
    /// `key="value"` pairs in insertion order, separated by single spaces. Values are not escaped.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// The space after the tag name is written even when there are no attributes, giving `<p >`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag_name();
        let attrs = self.attributes().render();
        if !self.children().is_empty() {
            write!(f, "<{} {}>{}", tag, attrs, self.text())?;
            for child in self.children() {
                write!(f, "{}", child)?;
            }
            write!(f, "</{}>", tag)
        } else if self.is_void() {
            write!(f, "<{} {}/>", tag, attrs)
        } else {
            write!(f, "<{} {}>{}</{}>", tag, attrs, self.text(), tag)
        }
    }
}

impl Element {
    /// Write this element as a document: the opening tag on its own line, one line per child, then the closing tag.
    ///
    /// Top-level elements open with a bare `<tag>`; other elements keep their attributes.
    /// The element's own text is not written.
    pub fn write_document<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let span = span!(Level::DEBUG, "Writing document", tag = %self.tag_name());
        let _enter = span.enter();
        if self.is_top_level() {
            writeln!(out, "<{}>", self.tag_name())?;
        } else {
            writeln!(out, "<{} {}>", self.tag_name(), self.attributes().render())?;
        }
        for child in self.children() {
            writeln!(out, "{}", child)?;
        }
        writeln!(out, "</{}>", self.tag_name())
    }

    /// [`Element::write_document`] to standard output
    pub fn emit(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_document(&mut handle)?;
        handle.flush()
    }
}
