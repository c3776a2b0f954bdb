pub mod parser;
pub mod css;

use std::collections::HashMap;

/// Internal DOM node representation.
/// Carries only what scene resolution needs: tag, attributes, text, children.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self {
            tag: "#document".into(),
            attributes: HashMap::new(),
            text: String::new(),
            children,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<DomNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
        }
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whether the class attribute contains `class` as a whole word
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|w| w == class))
            .unwrap_or(false)
    }

    /// First node in this subtree with the given id, depth-first
    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// First node in this subtree carrying the given class, depth-first
    pub fn find_by_class(&self, class: &str) -> Option<&DomNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// All nodes carrying the given class, in document order
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a DomNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a DomNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }
}

/// Parsed DOM tree with metadata
#[derive(Debug, Clone)]
pub struct DomTree {
    pub root: DomNode,
    pub title: String,
}

impl DomTree {
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn attr_lookup() {
        let node = DomNode::element("div", attrs(&[("data-info", "Earth: Blue")]), vec![]);
        assert_eq!(node.attr("data-info"), Some("Earth: Blue"));
        assert_eq!(node.attr("data-other"), None);
    }

    #[test]
    fn class_matching_is_whole_word() {
        let node = DomNode::element("div", attrs(&[("class", "earth-orbit orbit")]), vec![]);
        assert!(node.has_class("orbit"));
        assert!(node.has_class("earth-orbit"));
        assert!(!node.has_class("earth"));
    }

    #[test]
    fn find_by_id_descends() {
        let inner = DomNode::element("div", attrs(&[("id", "planet-mars")]), vec![]);
        let orbit = DomNode::element("div", attrs(&[("class", "mars-orbit")]), vec![inner]);
        let root = DomNode::document(vec![orbit]);
        let found = root.find_by_id("planet-mars");
        match found {
            Some(node) => assert_eq!(node.tag, "div"),
            None => panic!("expected to find planet-mars"),
        }
        assert!(root.find_by_id("planet-pluto").is_none());
    }

    #[test]
    fn find_all_by_class_preserves_document_order() {
        let first = DomNode::element("div", attrs(&[("class", "planet"), ("id", "planet-a")]), vec![]);
        let second = DomNode::element("div", attrs(&[("class", "planet"), ("id", "planet-b")]), vec![]);
        let root = DomNode::document(vec![first, second]);
        let planets = root.find_all_by_class("planet");
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].id(), Some("planet-a"));
        assert_eq!(planets[1].id(), Some("planet-b"));
    }

    #[test]
    fn node_count_includes_whole_subtree() {
        let leaf = DomNode::text("hi");
        let child = DomNode::element("p", HashMap::new(), vec![leaf]);
        let root = DomNode::document(vec![child]);
        assert_eq!(root.node_count(), 3);
    }

    #[test]
    fn collect_text_joins_with_spaces() {
        let a = DomNode::text("Third planet");
        let b = DomNode::text("from the Sun");
        let root = DomNode::element("p", HashMap::new(), vec![a, b]);
        assert_eq!(root.collect_text(), "Third planet from the Sun");
    }
}
