//! Owned element tree built from a quick-xml event stream.
//!
//! Upstream responses are small, so the whole document is materialized and
//! mapping code navigates it by element name. Navigation never fails: a
//! missing child is `None`, which the readers in [`extract`](crate::extract)
//! turn into defaults.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::DocumentError;

/// A single XML element with its attributes, child elements and text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute, unescaped.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text and CDATA directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a chain of first-child lookups, e.g. `["stats", "rating", "average"]`.
    pub fn path(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// All elements below this one with the given name, depth-first in
    /// document order. The element itself is not included.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_named(name, &mut found);
        }
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }
}

/// A parsed response document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Decode raw response bytes as UTF-8 and parse them.
    ///
    /// Upstream does not reliably declare its encoding in transport headers,
    /// so the bytes are always treated as UTF-8 (invalid sequences replaced,
    /// a leading byte-order mark dropped).
    pub fn from_utf8_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = String::from_utf8_lossy(bytes);
        Self::parse(text.strip_prefix('\u{feff}').unwrap_or(&text))
    }

    /// Parse a complete XML document.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let mut xml = Reader::from_str(text);
        xml.config_mut().trim_text(true);

        // Open elements, innermost last.
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match xml.read_event()? {
                Event::Start(ref e) => {
                    if root.is_some() {
                        return Err(DocumentError::malformed("content after root element"));
                    }
                    stack.push(start_element(e)?);
                }
                Event::Empty(ref e) => {
                    let element = start_element(e)?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| DocumentError::malformed("unexpected closing tag"))?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Event::Text(ref e) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(DocumentError::malformed(format!(
                "unclosed <{}> element",
                open.name
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| DocumentError::malformed("no root element"))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements with the given name, including the root itself.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.root.collect_named(name, &mut found);
        found
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<Element, DocumentError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value: Cow<'_, str> = attr.unescape_value()?;
        attributes.push((key, value.into_owned()));
    }
    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(DocumentError::malformed("multiple root elements")),
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;
