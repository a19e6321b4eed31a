//! XML-to-tree parser
//!
//! The legacy service returns small, flat XML documents. This module
//! turns a response body into an [`Element`] tree via a single
//! `quick-xml` event pass, from which the endpoint parsers extract
//! attribute maps. Repeated children are always accessible as a list
//! (`children_named`), and empty leaf elements are suppressed when an
//! element is collapsed into [`Attributes`].

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, TvdbError};
use crate::types::Attributes;

/// A parsed XML element: name, accumulated text, child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element name
    pub name: String,
    /// Concatenated text content, entities unescaped, CDATA preserved
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children with the given name, in document order.
    ///
    /// A single occurrence yields a one-element iterator; this is the
    /// force-list access every endpoint parser uses for repeated
    /// elements like `<Series>` and `<Episode>`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Whether this element has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collapse the element's leaf children into an attribute map.
    ///
    /// Nested children are skipped; empty leaf values are suppressed
    /// by [`Attributes::insert`].
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        for child in &self.children {
            if child.is_leaf() {
                attributes.insert(child.name.clone(), child.text.trim().to_string());
            }
        }
        attributes
    }
}

/// Parse an XML document into its root element.
///
/// # Arguments
/// * `body` - Raw XML response text
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML (mismatched tags, bad syntax)
/// - `TvdbError::MissingElement` - the document contains no root element
pub fn parse_document(body: &str) -> Result<Element> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                attach(Element::new(name), &mut stack, &mut root);
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::End(_) => {
                // quick-xml has already verified the end tag matches
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut root);
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions
            _ => {}
        }
    }

    root.ok_or_else(|| TvdbError::MissingElement("document root".to_string()))
}

/// Hand a completed element to its parent, or make it the root.
fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}
