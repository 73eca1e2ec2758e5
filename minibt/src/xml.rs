//! Event-stream parsing of tree description documents.

use quick_xml::{
    events::{attributes::AttrError, BytesStart, Event},
    Reader,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),
    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    #[error("document contains no root element")]
    Empty,
}

/// A parsed XML element with its attributes in document order.
#[derive(Debug, Clone)]
pub(crate) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

pub(crate) fn parse_document(text: &str) -> Result<XmlElement, ParseError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);
    // tag pairing is checked against the element stack below
    reader.check_end_names(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                place(element, &mut stack, &mut root);
            }
            Event::End(end) => {
                let closed = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                match stack.pop() {
                    Some(element) if element.name == closed => {
                        place(element, &mut stack, &mut root)
                    }
                    _ => return Err(ParseError::UnexpectedClose(closed)),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or(ParseError::Empty)
}

fn place(element: XmlElement, stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn element_from(start: &BytesStart) -> Result<XmlElement, ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}
