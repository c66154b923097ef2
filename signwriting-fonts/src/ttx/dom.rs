//! An owned XML element tree.
//!
//! TTX documents are mostly attributes on empty elements, so we keep just
//! enough structure to read them and write them back: ordered attributes,
//! child elements, text and comments. Whitespace between elements is not
//! preserved; the writer re-indents the document.

use std::io::{Read, Write};

use xml::{
    common::XmlVersion,
    reader::{ParserConfig, XmlEvent as ReadEvent},
    writer::{EmitterConfig, EventWriter, XmlEvent as WriteEvent},
};

use crate::error::TtxError;

/// A child of an [`Element`]
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An XML element with its attributes and children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// `true` if this node is an element with the given name.
    pub fn is_element(&self, name: &str) -> bool {
        matches!(self, Node::Element(el) if el.name == name)
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper for setting an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key.to_owned(), value)),
        }
    }

    pub fn required_attr(&self, key: &'static str) -> Result<&str, TtxError> {
        self.attr(key).ok_or_else(|| TtxError::MissingAttribute {
            element: self.name.clone(),
            attribute: key,
        })
    }

    /// Parse a required attribute as a number.
    pub fn number_attr(&self, key: &'static str) -> Result<f64, TtxError> {
        let raw = self.required_attr(key)?;
        raw.trim()
            .parse()
            .map_err(|_| TtxError::InvalidNumber {
                element: self.name.clone(),
                attribute: key,
                value: raw.to_owned(),
            })
    }

    /// Iterate over the child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |el| el.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|el| el.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Replace the children with the given name, in order.
    ///
    /// Each replacement takes the place of the next matching child, so other
    /// nodes between them keep their positions. Surplus matches are removed;
    /// surplus replacements follow the last match, or go at the end if there
    /// was none.
    pub fn replace_children(&mut self, name: &str, replacements: impl IntoIterator<Item = Element>) {
        let mut replacements = replacements.into_iter();
        let mut children = Vec::with_capacity(self.children.len());
        let mut after_last = None;
        for node in std::mem::take(&mut self.children) {
            if !node.is_element(name) {
                children.push(node);
                continue;
            }
            if let Some(replacement) = replacements.next() {
                children.push(Node::Element(replacement));
            }
            after_last = Some(children.len());
        }
        let at = after_last.unwrap_or(children.len());
        children.splice(at..at, replacements.map(Node::Element));
        self.children = children;
    }

    /// Visit every attribute value in this element and its descendants.
    pub fn visit_attributes_mut(&mut self, f: &mut impl FnMut(&mut String)) {
        for (_, value) in self.attributes.iter_mut() {
            f(value);
        }
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child {
                el.visit_attributes_mut(f);
            }
        }
    }

    /// Parse a document, or a fragment with a single root element.
    pub fn parse(text: &str) -> Result<Self, TtxError> {
        Self::read(text.as_bytes())
    }

    pub fn read(reader: impl Read) -> Result<Self, TtxError> {
        let parser = ParserConfig::new()
            .ignore_comments(false)
            .create_reader(reader);
        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;
        for event in parser {
            match event? {
                ReadEvent::StartElement {
                    name, attributes, ..
                } => stack.push(Element {
                    name: name.local_name,
                    attributes: attributes
                        .into_iter()
                        .map(|attr| (attr.name.local_name, attr.value))
                        .collect(),
                    children: Vec::new(),
                }),
                ReadEvent::EndElement { .. } => {
                    // the parser rejects unbalanced documents, so this is always Some
                    let Some(done) = stack.pop() else { continue };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(done)),
                        None => root = Some(done),
                    }
                }
                ReadEvent::Characters(text) | ReadEvent::CData(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.children.push(Node::Text(text));
                    }
                }
                ReadEvent::Comment(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.children.push(Node::Comment(text));
                    }
                }
                _ => (),
            }
        }
        root.ok_or(TtxError::EmptyDocument)
    }

    /// Write this element as the root of a UTF-8 document.
    pub fn write_document(&self, writer: impl Write) -> Result<(), TtxError> {
        let mut writer = EmitterConfig::new()
            .perform_indent(true)
            .create_writer(writer);
        writer.write(WriteEvent::StartDocument {
            version: XmlVersion::Version10,
            encoding: Some("UTF-8"),
            standalone: None,
        })?;
        self.write_into(&mut writer)?;
        writer.into_inner().write_all(b"\n")?;
        Ok(())
    }

    fn write_into<W: Write>(&self, writer: &mut EventWriter<W>) -> Result<(), TtxError> {
        let mut start = WriteEvent::start_element(self.name.as_str());
        for (key, value) in &self.attributes {
            start = start.attr(key.as_str(), value);
        }
        writer.write(start)?;
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_into(writer)?,
                Node::Text(text) => writer.write(WriteEvent::characters(text))?,
                Node::Comment(text) => writer.write(WriteEvent::comment(text))?,
            }
        }
        writer.write(WriteEvent::end_element())?;
        Ok(())
    }
}

/// Format a coordinate or width the way TTX expects.
///
/// Integral values are written without a fractional part, so values we
/// never touch are written back exactly as they were read.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid writing "-0"
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested() {
        let doc = Element::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ttFont sfntVersion="\x00\x01\x00\x00">
  <!-- a comment -->
  <hmtx>
    <mtx name="A" width="500" lsb="10"/>
  </hmtx>
  <name><namerecord nameID="1">Sutton</namerecord></name>
</ttFont>"#,
        )
        .unwrap();
        assert_eq!(doc.name, "ttFont");
        assert_eq!(doc.attr("sfntVersion"), Some("\\x00\\x01\\x00\\x00"));
        assert!(matches!(&doc.children[0], Node::Comment(c) if c.trim() == "a comment"));
        let mtx = doc.child("hmtx").and_then(|h| h.child("mtx")).unwrap();
        assert_eq!(mtx.attr("name"), Some("A"));
        assert_eq!(mtx.number_attr("width").unwrap(), 500.0);
        let record = doc.child("name").and_then(|n| n.child("namerecord")).unwrap();
        assert_eq!(record.children, vec![Node::Text("Sutton".into())]);
    }

    #[test]
    fn malformed_xml() {
        assert!(matches!(
            Element::parse("<ttFont><glyf></ttFont>"),
            Err(TtxError::Xml(_))
        ));
    }

    #[test]
    fn invalid_number() {
        let el = Element::new("mtx").with_attr("width", "wide");
        let err = el.number_attr("width").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number 'wide' for 'width' on <mtx>"
        );
        assert!(matches!(
            el.number_attr("lsb"),
            Err(TtxError::MissingAttribute { attribute: "lsb", .. })
        ));
    }

    #[test]
    fn set_attr_keeps_order() {
        let mut el = Element::new("TTGlyph")
            .with_attr("name", "A")
            .with_attr("xMin", "0");
        el.set_attr("name", "B");
        el.set_attr("yMin", "1");
        let keys: Vec<_> = el.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(keys, [("name", "B"), ("xMin", "0"), ("yMin", "1")]);
    }

    #[test]
    fn replace_children_in_place() {
        let mut glyf = Element::new("glyf");
        glyf.children.push(Node::Comment("header".into()));
        glyf.children
            .push(Node::Element(Element::new("TTGlyph").with_attr("name", "a")));
        glyf.children.push(Node::Comment("empty".into()));
        glyf.children
            .push(Node::Element(Element::new("TTGlyph").with_attr("name", "b")));
        glyf.replace_children(
            "TTGlyph",
            [Element::new("TTGlyph").with_attr("name", "c")],
        );
        assert_eq!(glyf.children.len(), 3);
        assert!(matches!(&glyf.children[0], Node::Comment(_)));
        assert_eq!(glyf.child("TTGlyph").and_then(|g| g.attr("name")), Some("c"));
        assert!(matches!(&glyf.children[2], Node::Comment(c) if c == "empty"));
    }

    #[test]
    fn replace_children_keeps_comments_between() {
        let mut glyf = Element::new("glyf")
            .with_child(Element::new("TTGlyph").with_attr("name", "a"));
        glyf.children.push(Node::Comment("no outline".into()));
        glyf.children
            .push(Node::Element(Element::new("TTGlyph").with_attr("name", "b")));
        glyf.replace_children(
            "TTGlyph",
            ["x", "y", "z"].map(|name| Element::new("TTGlyph").with_attr("name", name)),
        );
        let order: Vec<_> = glyf
            .children
            .iter()
            .map(|node| match node {
                Node::Element(el) => el.attr("name").unwrap_or_default(),
                Node::Comment(_) => "#",
                Node::Text(_) => "",
            })
            .collect();
        assert_eq!(order, ["x", "#", "y", "z"]);
    }

    #[test]
    fn write_then_read() {
        let doc = Element::new("ttFont").with_child(
            Element::new("glyf").with_child(
                Element::new("TTGlyph")
                    .with_attr("name", "A&B")
                    .with_attr("xMin", "-4.5"),
            ),
        );
        let mut out = Vec::new();
        doc.write_document(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(Element::parse(&text).unwrap(), doc);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-4.5), "-4.5");
    }
}
