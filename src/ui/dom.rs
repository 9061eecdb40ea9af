//! Minimal in-process page model.
//!
//! Holds just enough of a document tree for the widgets: elements with id,
//! classes and attributes, text nodes, selector lookup (`#id`, `.class`, `tag`,
//! compounds like `li.active`, and descendant chains like `#araclar .tools-grid`),
//! and HTML serialization.

use crate::types::errors::PageError;

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    fn text_content_into(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                for child in &e.children {
                    child.text_content_into(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    // --- classes ---

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds the class when `force` is true, removes it otherwise.
    pub fn toggle_class(&mut self, class: &str, force: bool) {
        if force {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // --- attributes ---

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    // --- content ---

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.text_content_into(&mut out);
        }
        out
    }

    /// Replaces all children with a single text node (none for empty text).
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::text(text));
        }
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Merges adjacent text nodes and drops empty ones, recursively.
    pub fn normalize(&mut self) {
        let mut merged: Vec<Node> = Vec::with_capacity(self.children.len());
        for child in self.children.drain(..) {
            match child {
                Node::Text(t) if t.is_empty() => {}
                Node::Text(t) => match merged.last_mut() {
                    Some(Node::Text(prev)) => prev.push_str(&t),
                    _ => merged.push(Node::Text(t)),
                },
                Node::Element(mut e) => {
                    e.normalize();
                    merged.push(Node::Element(e));
                }
            }
        }
        self.children = merged;
    }

    /// Replaces every descendant element carrying `class` with its own text,
    /// then normalizes. Returns how many elements were unwrapped.
    pub fn unwrap_class(&mut self, class: &str) -> usize {
        let mut count = 0;
        for child in self.children.iter_mut() {
            if let Node::Element(e) = child {
                if e.has_class(class) {
                    let text = e.text_content();
                    *child = Node::Text(text);
                    count += 1;
                } else {
                    count += e.unwrap_class(class);
                }
            }
        }
        if count > 0 {
            self.normalize();
        }
        count
    }

    // --- traversal ---

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First descendant matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Result<&Element, PageError> {
        let path = self
            .select_paths(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))?;
        self.at_path(&path)
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Result<&mut Element, PageError> {
        let path = self
            .select_paths(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))?;
        self.at_path_mut(&path)
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))
    }

    /// Child-index paths of every descendant matching `selector`, in document order.
    pub fn select_paths(&self, selector: &str) -> Result<Vec<Vec<usize>>, PageError> {
        let chain = Selector::parse(selector)?;
        let mut out = Vec::new();
        let mut ancestors = vec![self];
        let mut path = Vec::new();
        collect_matches(self, &chain, &mut ancestors, &mut path, &mut out);
        Ok(out)
    }

    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &i in path {
            current = match current.children.get(i)? {
                Node::Element(e) => e,
                Node::Text(_) => return None,
            };
        }
        Some(current)
    }

    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &i in path {
            current = match current.children.get_mut(i)? {
                Node::Element(e) => e,
                Node::Text(_) => return None,
            };
        }
        Some(current)
    }

    // --- serialization ---

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialized children only.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_attr(&self.classes.join(" "))));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_matches<'a>(
    element: &'a Element,
    chain: &Selector,
    ancestors: &mut Vec<&'a Element>,
    path: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    for (i, child) in element.children.iter().enumerate() {
        let Node::Element(child) = child else {
            continue;
        };
        path.push(i);
        if chain.matches(child, ancestors) {
            out.push(path.clone());
        }
        ancestors.push(child);
        collect_matches(child, chain, ancestors, path, out);
        ancestors.pop();
        path.pop();
    }
}

fn is_marker(c: char) -> bool {
    c == '#' || c == '.'
}

/// One compound selector: optional tag, optional id, any number of classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str, full: &str) -> Result<Self, PageError> {
        let invalid = || PageError::InvalidSelector(full.to_string());
        let mut compound = Compound::default();
        let mut rest = token;

        let tag_end = rest.find(is_marker).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(is_marker).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return Err(invalid());
            }
            match marker {
                '#' if compound.id.is_none() => compound.id = Some(name.to_string()),
                '.' => compound.classes.push(name.to_string()),
                _ => return Err(invalid()),
            }
            rest = &body[end..];
        }

        let valid_ident = |s: &str| {
            s.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        };
        let all_valid = compound.tag.as_deref().map_or(true, valid_ident)
            && compound.id.as_deref().map_or(true, valid_ident)
            && compound.classes.iter().all(|c| valid_ident(c));
        if !all_valid {
            return Err(invalid());
        }
        Ok(compound)
    }

    fn matches(&self, e: &Element) -> bool {
        self.tag.as_deref().map_or(true, |t| e.tag == t)
            && self
                .id
                .as_deref()
                .map_or(true, |id| e.id.as_deref() == Some(id))
            && self.classes.iter().all(|c| e.has_class(c))
    }
}

/// Descendant chain of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selector {
    chain: Vec<Compound>,
}

impl Selector {
    fn parse(selector: &str) -> Result<Self, PageError> {
        let chain = selector
            .split_whitespace()
            .map(|token| Compound::parse(token, selector))
            .collect::<Result<Vec<_>, _>>()?;
        if chain.is_empty() {
            return Err(PageError::InvalidSelector(selector.to_string()));
        }
        Ok(Self { chain })
    }

    /// `ancestors` runs from the search root to the element's parent.
    fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.chain.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }
        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// A page: the body tree plus focus state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub body: Element,
    focused: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Element::new("body"))
    }
}

impl Page {
    pub fn new(body: Element) -> Self {
        Self {
            body,
            focused: None,
        }
    }

    pub fn query_selector(&self, selector: &str) -> Result<&Element, PageError> {
        self.body.query_selector(selector)
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Result<&mut Element, PageError> {
        self.body.query_selector_mut(selector)
    }

    /// Every element matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<&Element>, PageError> {
        Ok(self
            .body
            .select_paths(selector)?
            .iter()
            .filter_map(|p| self.body.at_path(p))
            .collect())
    }

    /// Inserts `node` immediately before the first element matching `selector`.
    pub fn insert_before(&mut self, selector: &str, node: impl Into<Node>) -> Result<(), PageError> {
        let mut path = self
            .body
            .select_paths(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))?;
        let index = path.pop().unwrap_or(0);
        let parent = self
            .body
            .at_path_mut(&path)
            .ok_or_else(|| PageError::ElementNotFound(selector.to_string()))?;
        parent.children.insert(index, node.into());
        Ok(())
    }

    /// Moves focus to the element with `id`.
    pub fn focus(&mut self, id: &str) {
        self.focused = Some(id.to_string());
    }

    /// Removes focus from the element with `id`, if it has it.
    pub fn blur(&mut self, id: &str) {
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn to_html(&self) -> String {
        self.body.to_html()
    }
}
