use std::path::Path;

use crate::error::{Error, Result};

/// An owned XML element. Comments and processing instructions are dropped;
/// text is kept in document order between child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<(String, String)>,
        children: Vec<XmlNode>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
        }
    }

    pub(crate) fn from_roxml(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node.attributes().map(|attr| (attr.name().to_owned(), attr.value().to_owned())).collect();
        let children = node
            .children()
            .filter_map(|child| {
                if child.is_element() {
                    Some(XmlNode::Element(Self::from_roxml(child)))
                } else if child.is_text() {
                    child.text().map(|text| XmlNode::Text(text.to_owned()))
                } else {
                    None
                }
            })
            .collect();
        Self::new(node.tag_name().name(), attributes, children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Like [`attr`](Self::attr), but a missing attribute is a malformed document.
    pub fn require_attr(
        &self,
        key: &str,
        document: &Path,
    ) -> Result<&str> {
        self.attr(key)
            .ok_or_else(|| Error::malformed(document, format!("<{}> is missing the `{key}` attribute", self.name)))
    }

    /// Direct child elements, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(elem) => Some(elem),
            XmlNode::Text(_) => None,
        })
    }

    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.elements().filter(move |elem| elem.name == name)
    }

    pub fn child(
        &self,
        name: &str,
    ) -> Option<&XmlElement> {
        self.elements().find(|elem| elem.name == name)
    }

    /// All text inside this element, including nested elements, with runs of
    /// whitespace collapsed to one space.
    pub fn full_text(&self) -> Option<String> {
        let mut out = String::new();
        self.collect_text(&mut out);
        non_blank(out.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    fn collect_text(
        &self,
        out: &mut String,
    ) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(elem) => elem.collect_text(out),
            }
        }
    }

    pub fn child_text(
        &self,
        name: &str,
    ) -> Option<String> {
        self.child(name).and_then(XmlElement::full_text)
    }

    /// Like [`child_text`](Self::child_text), but a missing or empty child is
    /// a malformed document.
    pub fn require_child_text(
        &self,
        name: &str,
        document: &Path,
    ) -> Result<String> {
        self.child_text(name)
            .ok_or_else(|| Error::malformed(document, format!("<{}> has no <{name}> text", self.name)))
    }

    /// Move every element named `name` out of this subtree, in document order.
    /// Matches are not searched for further matches inside themselves.
    pub fn into_descendants_named(
        self,
        name: &str,
    ) -> Vec<XmlElement> {
        let mut found = Vec::new();
        self.drain_named(name, &mut found);
        found
    }

    fn drain_named(
        self,
        name: &str,
        found: &mut Vec<XmlElement>,
    ) {
        for node in self.children {
            if let XmlNode::Element(elem) = node {
                if elem.name == name {
                    found.push(elem);
                } else {
                    elem.drain_named(name, found);
                }
            }
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
#[path = "../../tests/src/xml/node_tests.rs"]
mod tests;
