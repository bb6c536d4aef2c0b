use std::borrow::Cow;
use std::fmt;

use crate::MarkupError;

const XML_PREFIX: &str = "xml";

/// A single `name="value"` pair. Order of attributes is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, escaped on output.
    Text(String),
    Comment(String),
    /// Pre-serialized markup, written verbatim.
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parse markup and return its document element.
    pub fn parse(text: &str) -> Result<Self, MarkupError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        Ok(from_node(doc.root_element()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Replace an attribute in place, or append it when absent.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// First element named `tag` in document order, `self` included.
    pub fn find_first(&self, tag: &str) -> Option<&Element> {
        if self.name == tag {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_first(tag))
    }

    /// Consume the tree and keep only the first element named `tag`.
    pub fn into_first(self, tag: &str) -> Option<Element> {
        if self.name == tag {
            return Some(self);
        }
        self.children.into_iter().find_map(|child| match child {
            Node::Element(element) => element.into_first(tag),
            _ => None,
        })
    }

    /// Apply `f` to every element named `tag`, `self` included.
    pub fn for_each_named_mut<F>(&mut self, tag: &str, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        if self.name == tag {
            f(self);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.for_each_named_mut(tag, f);
            }
        }
    }

    /// Number of elements named `tag`, `self` included.
    pub fn count_named(&self, tag: &str) -> usize {
        let own = usize::from(self.name == tag);
        own + self
            .child_elements()
            .map(|child| child.count_named(tag))
            .sum::<usize>()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}=\"{}\"", attr.name, escape_attr(&attr.value))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.fmt(f)?,
                Node::Text(text) => f.write_str(&escape_text(text))?,
                Node::Comment(comment) => write!(f, "<!--{comment}-->")?,
                Node::Raw(raw) => f.write_str(raw)?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

/// Escape character data.
pub(crate) fn escape_text(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// Escape an attribute value (double-quoted).
pub(crate) fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

/// Characters XML 1.0 cannot carry even as references; they are dropped.
fn is_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
}

fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let needs = |c: char| {
        matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\'')) || is_forbidden(c)
    };
    if !s.chars().any(needs) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&apos;"),
            c if is_forbidden(c) => {}
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn qualified(node: roxmltree::Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

fn from_node(node: roxmltree::Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let mut element = Element::new(qualified(node, tag.namespace(), tag.name()));

    // Namespaces newly declared on this element become xmlns attributes.
    let inherited: Vec<(Option<String>, String)> = node
        .parent_element()
        .map(|parent| {
            parent
                .namespaces()
                .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
                .collect()
        })
        .unwrap_or_default();
    for ns in node.namespaces() {
        let key = (ns.name().map(str::to_string), ns.uri().to_string());
        if ns.name() == Some(XML_PREFIX) || inherited.contains(&key) {
            continue;
        }
        let name = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        element.attributes.push(Attribute {
            name,
            value: ns.uri().to_string(),
        });
    }

    for attr in node.attributes() {
        element.attributes.push(Attribute {
            name: qualified(node, attr.namespace(), attr.name()),
            value: attr.value().to_string(),
        });
    }

    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(from_node(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.children.push(Node::Text(text.to_string()));
            }
        } else if child.is_comment() {
            if let Some(text) = child.text() {
                element.children.push(Node::Comment(text.to_string()));
            }
        }
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_serializes_empty_element() {
        let path = Element::new("path").with_attr("d", "M 0,0 Z").with_attr("fill", "#fff");
        assert_eq!(path.to_markup(), r##"<path d="M 0,0 Z" fill="#fff"/>"##);
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("svg")
            .with_attr("width", "1")
            .with_attr("viewBox", "0 0 1 1");
        el.set_attr("width", "12");
        el.set_attr("height", "12");
        let names: Vec<_> = el.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["width", "viewBox", "height"]);
        assert_eq!(el.attr("width"), Some("12"));
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("text")
            .with_attr("title", "a\"b'c<&>")
            .text("C & C++ <3");
        assert_eq!(
            el.to_markup(),
            "<text title=\"a&quot;b&apos;c&lt;&amp;&gt;\">C &amp; C++ &lt;3</text>"
        );
    }

    #[test]
    fn raw_children_are_written_verbatim() {
        let g = Element::new("g").raw("<svg/>");
        assert_eq!(g.to_markup(), "<g><svg/></g>");
    }

    #[test]
    fn parse_keeps_default_namespace_first() {
        let el = Element::parse(r#"<svg viewBox="0 0 1 1" xmlns="http://www.w3.org/2000/svg"/>"#)
            .expect("parse");
        assert_eq!(
            el.to_markup(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"/>"#
        );
    }

    #[test]
    fn parse_keeps_prefixed_attributes() {
        let src = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##;
        let el = Element::parse(src).expect("parse");
        assert_eq!(el.to_markup(), src);
    }

    #[test]
    fn parse_keeps_comments_and_text() {
        let src = "<svg><!-- icon --><title>A &amp; B</title></svg>";
        let el = Element::parse(src).expect("parse");
        assert_eq!(el.to_markup(), src);
    }

    #[test]
    fn find_and_count_by_tag() {
        let el = Element::parse("<svg><g><path/><path/></g><path/></svg>").expect("parse");
        assert_eq!(el.count_named("path"), 3);
        assert_eq!(el.find_first("g").map(|g| g.count_named("path")), Some(2));
        assert!(el.find_first("circle").is_none());
    }

    #[test]
    fn into_first_extracts_nested_element() {
        let el = Element::parse("<doc><meta/><svg id=\"x\"/></doc>").expect("parse");
        let svg = el.into_first("svg").expect("svg");
        assert_eq!(svg.attr("id"), Some("x"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Element::parse("not markup"),
            Err(MarkupError::Malformed(_))
        ));
        assert!(Element::parse("<svg><path></svg>").is_err());
    }

    #[test]
    fn escape_drops_characters_xml_cannot_carry() {
        assert_eq!(escape_text("a\u{1}b\u{1f}c"), "abc");
        assert_eq!(escape_attr("x\u{b}\"y\u{ffff}"), "x&quot;y");
        assert_eq!(escape_text("tab\tnl\ncr\r"), "tab\tnl\ncr\r");

        let el = Element::new("text").with_attr("title", "a\u{2}").text("b\u{0}c");
        let reparsed = Element::parse(&el.to_markup()).expect("well-formed");
        assert_eq!(reparsed.attr("title"), Some("a"));
    }
}
