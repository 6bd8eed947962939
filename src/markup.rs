//! Element tree for raw EDGAR filing text
//!
//! A full-submission `.txt` file is an SGML envelope (`<SEC-DOCUMENT>`, `<TYPE>13F-HR`, ...)
//! whose tags are not well-formed XML. The structured parts of the filing sit inside
//! `<XML>...</XML>` sections, so only those sections are parsed. Text without any such
//! section is parsed as a single XML document; if that fails too, the filing has no
//! structured content and yields an empty tree.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::edgar::Result;

const XML_OPEN: &str = "<XML>";
const XML_CLOSE: &str = "</XML>";

/// A named element with its direct text content and child elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Local name, namespace prefix stripped (`ns1:infoTable` -> `infoTable`)
    pub name: String,
    text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Direct text of this element, trimmed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All descendants in document order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self.children.iter())
    }

    /// First descendant with the given local name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|e| e.name == name)
    }
}

/// Pre-order walk over a forest of elements
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Descendants<'a> {
    fn new<I>(roots: I) -> Self
    where
        I: DoubleEndedIterator<Item = &'a Element>,
    {
        Self {
            stack: roots.rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Parsed filing: the top-level elements of every XML section, in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub roots: Vec<Element>,
}

impl Document {
    /// Parse raw filing text into an element tree
    pub fn parse(text: &str) -> Result<Self> {
        let sections = xml_sections(text);
        let mut roots = Vec::new();

        if sections.is_empty() {
            // Plain-text submissions are SGML with unclosed tags and carry no table
            match parse_xml(text) {
                Ok(parsed) => roots.extend(parsed),
                Err(e) => debug!("Filing has no XML sections and is not XML itself: {}", e),
            }
        } else {
            for section in sections {
                roots.extend(parse_xml(section)?);
            }
        }

        Ok(Document { roots })
    }

    /// All elements in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self.roots.iter())
    }

    /// Every element with the given local name, in document order
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |e| e.name == name)
    }
}

/// Slices between `<XML>` and `</XML>` markers, trimmed
fn xml_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(XML_OPEN) {
        let after_open = &rest[start + XML_OPEN.len()..];
        let Some(end) = after_open.find(XML_CLOSE) else {
            sections.push(after_open.trim());
            break;
        };
        sections.push(after_open[..end].trim());
        rest = &after_open[end + XML_CLOSE.len()..];
    }

    sections
}

fn parse_xml(xml: &str) -> Result<Vec<Element>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut roots = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::Empty(empty) => {
                let name = String::from_utf8_lossy(empty.local_name().as_ref()).into_owned();
                attach(&mut stack, &mut roots, Element::new(name));
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::End(_) => {
                if let Some(finished) = stack.pop() {
                    attach(&mut stack, &mut roots, finished);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // Unterminated elements at end of input still carry their content
    while let Some(unclosed) = stack.pop() {
        attach(&mut stack, &mut roots, unclosed);
    }

    Ok(roots)
}

fn attach(stack: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => roots.push(element),
    }
}
