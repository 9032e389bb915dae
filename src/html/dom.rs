use indexmap::IndexMap;
use std::fmt::Display;
use tracing::{debug, trace};

use super::error::MarkupError;
use super::parsing::validate_tag_name;

/// Ordered attribute mapping. Keys are stored in their hyphenated form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    /// Insert an attribute, translating `_` in the key to `-`.
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(normalize_key(key.as_ref()), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(normalize_key(key).as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::empty();
        attrs.extend(iter);
        attrs
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(k, v)| self.insert(k, v));
    }
}

/// Raw identifiers (`r#type`) lose their prefix, underscores become hyphens
fn normalize_key(key: &str) -> String {
    key.strip_prefix("r#").unwrap_or(key).replace('_', "-")
}

/// Build a list of attributes from `name => value` pairs, where `name` is a bare identifier.
///
/// ```
/// let attrs = tagtree::attributes! { id => "lead", data_id => 7 };
/// assert_eq!(attrs[1], ("data_id".to_string(), "7".to_string()));
/// ```
///
/// Underscores are turned into hyphens once the pairs reach an [`Element`].
#[macro_export]
macro_rules! attributes {
    ($($key:ident => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attrs: Vec<(String, String)> = Vec::new();
        $(attrs.push((stringify!($key).to_string(), ($value).to_string()));)*
        attrs
    }};
}

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: Attributes,
    text: String,
    children: Vec<Element>,
    is_void: bool,
    top_level: bool,
}

impl Element {
    pub fn new(name: impl Display) -> Result<Self, MarkupError> {
        Self::builder(name).build()
    }

    /// An element whose emitted wrapper carries no attributes, see [`Element::write_document`]
    pub fn top_level(name: impl Display) -> Result<Self, MarkupError> {
        Self::builder(name).top_level(true).build()
    }

    pub fn builder(name: impl Display) -> ElementBuilder {
        ElementBuilder::new(name)
    }

    /// Append `child` after any existing children
    pub fn add(&mut self, child: Element) -> &mut Self {
        trace!(parent = %self.tag_name, child = %child.tag_name, "Attaching child");
        self.children.push(child);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.add(child);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_attribute(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn set_top_level(&mut self, top_level: bool) -> &mut Self {
        self.top_level = top_level;
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        self.is_void
    }

    pub fn is_top_level(&self) -> bool {
        self.top_level
    }
}

/// Collects the construction arguments of an [`Element`]
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    tag_name: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
    is_void: bool,
    top_level: bool,
}

impl ElementBuilder {
    pub fn new(name: impl Display) -> Self {
        Self {
            tag_name: name.to_string(),
            ..Default::default()
        }
    }

    /// Class names, joined with spaces into the leading `class` attribute
    pub fn class<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn void(mut self, is_void: bool) -> Self {
        self.is_void = is_void;
        self
    }

    pub fn top_level(mut self, top_level: bool) -> Self {
        self.top_level = top_level;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn build(self) -> Result<Element, MarkupError> {
        validate_tag_name(&self.tag_name)?;
        let mut attributes = Attributes::empty();
        if !self.classes.is_empty() {
            attributes.insert("class", self.classes.join(" "));
        }
        attributes.extend(self.attributes);
        debug!(
            tag = %self.tag_name,
            attributes = attributes.len(),
            void = self.is_void,
            "Created element"
        );
        Ok(Element {
            tag_name: self.tag_name,
            attributes,
            text: self.text,
            children: self.children,
            is_void: self.is_void,
            top_level: self.top_level,
        })
    }
}

#[cfg(test)]
#[test]
fn test_normalize_key() {
    assert_eq!(normalize_key("data_id"), "data-id");
    assert_eq!(normalize_key("http_equiv"), "http-equiv");
    assert_eq!(normalize_key("r#type"), "type");
    assert_eq!(normalize_key("aria-label"), "aria-label");
}

#[cfg(test)]
#[test]
fn test_attribute_overwrite_keeps_position() {
    let mut attrs: Attributes = [("id", "a"), ("title", "t"), ("id", "b")]
        .into_iter()
        .collect();
    attrs.insert("data_id", "1");
    attrs.insert("data-id", "2");
    let collected: Vec<_> = attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(collected, vec![("id", "b"), ("title", "t"), ("data-id", "2")]);
    assert_eq!(attrs.get("data_id"), Some(&"2".to_string()));
}
