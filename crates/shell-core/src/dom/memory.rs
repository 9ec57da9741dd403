//! In-memory document (for development/testing).

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use scraper::{ElementRef, Html};

use super::Document;

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    parent: Option<NodeId>,
    removed: bool,
}

/// A single-threaded stand-in for a browser document.
///
/// `set_inner_html` parses the markup with `scraper` and indexes every element
/// under its real parent, keeping its `id`, `class`, other attributes and
/// serialized `inner_html`.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<Node>>,
    scroll_y: Cell<u32>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create an empty document with a `body` root.
    pub fn new() -> Self {
        let root = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![root]),
            scroll_y: Cell::new(0),
        }
    }

    /// Create a document whose body is the given markup.
    pub fn with_body(html: &str) -> Self {
        let doc = Self::new();
        doc.set_inner_html(&doc.root(), html);
        doc
    }

    /// The `body` element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Markup last assigned to an element.
    pub fn inner_html(&self, element: &NodeId) -> String {
        self.nodes
            .borrow()
            .get(element.0)
            .map(|node| node.inner_html.clone())
            .unwrap_or_default()
    }

    /// Markup of the element with `id`, if attached.
    pub fn inner_html_by_id(&self, id: &str) -> Option<String> {
        self.element_by_id(id).map(|el| self.inner_html(&el))
    }

    /// Whether an element carries `class`.
    pub fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(element.0)
            .is_some_and(|node| node.classes.contains(class))
    }

    /// Tag name of an element.
    pub fn tag(&self, element: &NodeId) -> String {
        self.nodes
            .borrow()
            .get(element.0)
            .map(|node| node.tag.clone())
            .unwrap_or_default()
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> u32 {
        self.scroll_y.get()
    }

    /// Simulate the user scrolling.
    pub fn set_scroll_y(&self, y: u32) {
        self.scroll_y.set(y);
    }

    fn detach_descendants(nodes: &mut [Node], ancestor: NodeId) {
        let mut doomed: Vec<usize> = Vec::new();
        for index in 0..nodes.len() {
            let mut cursor = nodes[index].parent;
            while let Some(parent) = cursor {
                if parent == ancestor {
                    doomed.push(index);
                    break;
                }
                cursor = nodes[parent.0].parent;
            }
        }
        for index in doomed {
            nodes[index].removed = true;
        }
    }

    fn index_element(nodes: &mut Vec<Node>, parent: NodeId, element: ElementRef<'_>) {
        let value = element.value();
        let mut node = Node {
            tag: value.name().to_string(),
            inner_html: element.inner_html(),
            parent: Some(parent),
            ..Node::default()
        };
        for (name, attr) in value.attrs() {
            match name {
                "id" => node.id = Some(attr.to_string()),
                "class" => {
                    node.classes = attr.split_whitespace().map(str::to_string).collect();
                }
                _ => {
                    node.attributes.insert(name.to_string(), attr.to_string());
                }
            }
        }
        nodes.push(node);

        let id = NodeId(nodes.len() - 1);
        for child in element.children() {
            if let Some(child) = ElementRef::wrap(child) {
                Self::index_element(nodes, id, child);
            }
        }
    }

    fn attached(nodes: &[Node], element: NodeId) -> bool {
        let mut cursor = Some(element);
        while let Some(id) = cursor {
            match nodes.get(id.0) {
                Some(node) if !node.removed => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .map(NodeId)
            .find(|el| nodes[el.0].id.as_deref() == Some(id) && Self::attached(&nodes, *el))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .map(NodeId)
            .filter(|el| nodes[el.0].classes.contains(class) && Self::attached(&nodes, *el))
            .collect()
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if !Self::attached(&nodes, *element) {
            return;
        }
        Self::detach_descendants(&mut nodes, *element);
        nodes[element.0].inner_html = html.to_string();

        let fragment = Html::parse_fragment(html);
        for child in fragment.root_element().children() {
            if let Some(child) = ElementRef::wrap(child) {
                Self::index_element(&mut nodes, *element, child);
            }
        }
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            node.classes.remove(class);
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let node = nodes.get(element.0)?;
        match name {
            "id" => node.id.clone(),
            "class" => Some(node.classes.iter().cloned().collect::<Vec<_>>().join(" ")),
            _ => node.attributes.get(name).cloned(),
        }
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            match name {
                "id" => node.id = Some(value.to_string()),
                "class" => {
                    node.classes = value.split_whitespace().map(str::to_string).collect();
                }
                _ => {
                    node.attributes.insert(name.to_string(), value.to_string());
                }
            }
        }
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        Self::attached(&self.nodes.borrow(), *element)
    }

    fn scroll_to_top(&self) {
        self.scroll_y.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_body_indexes_ids_and_classes() {
        let doc = MemoryDocument::with_body(
            r#"<main id="app-container" class="shell wide"></main><footer class="site-footer">x</footer>"#,
        );

        let container = doc.element_by_id("app-container").unwrap();
        assert_eq!(doc.tag(&container), "main");
        assert!(doc.has_class(&container, "shell"));
        assert!(doc.has_class(&container, "wide"));
        assert_eq!(doc.elements_by_class("site-footer").len(), 1);
    }

    #[test]
    fn test_set_inner_html_replaces_children() {
        let doc = MemoryDocument::with_body(r#"<div id="app-container"></div>"#);
        let container = doc.element_by_id("app-container").unwrap();

        doc.set_inner_html(&container, r#"<section id="press-container"></section>"#);
        let press = doc.element_by_id("press-container").unwrap();
        assert!(doc.is_connected(&press));

        doc.set_inner_html(&container, r#"<section id="blog-container"></section>"#);
        assert!(doc.element_by_id("press-container").is_none());
        assert!(!doc.is_connected(&press));
        assert!(doc.element_by_id("blog-container").is_some());
        assert_eq!(
            doc.inner_html(&container),
            r#"<section id="blog-container"></section>"#
        );
    }

    #[test]
    fn test_nested_replacement_detaches_grandchildren() {
        let doc = MemoryDocument::with_body(r#"<div id="app-container"></div>"#);
        let container = doc.element_by_id("app-container").unwrap();
        doc.set_inner_html(&container, r#"<ul id="list"></ul>"#);
        let list = doc.element_by_id("list").unwrap();
        doc.set_inner_html(&list, r#"<li class="item">a</li><li class="item">b</li>"#);
        assert_eq!(doc.elements_by_class("item").len(), 2);

        doc.set_inner_html(&container, "<p>gone</p>");
        assert!(doc.elements_by_class("item").is_empty());
    }

    #[test]
    fn test_replacing_wrapper_detaches_nested_container() {
        let doc = MemoryDocument::with_body(r#"<main id="app-container"></main>"#);
        let container = doc.element_by_id("app-container").unwrap();
        doc.set_inner_html(
            &container,
            r#"<section id="wrap"><div id="press-container"><p>old</p></div></section>"#,
        );
        let press = doc.element_by_id("press-container").unwrap();
        let wrap = doc.element_by_id("wrap").unwrap();

        doc.set_inner_html(&wrap, "<p>replaced</p>");
        assert!(!doc.is_connected(&press));
        assert!(doc.element_by_id("press-container").is_none());
        assert!(doc.is_connected(&wrap));
    }

    #[test]
    fn test_parsed_elements_keep_inner_html() {
        let doc = MemoryDocument::with_body(r#"<div id="a"><span>x</span></div>"#);
        assert_eq!(doc.inner_html_by_id("a").as_deref(), Some("<span>x</span>"));
        let outer = doc.element_by_id("a").unwrap();
        assert_eq!(doc.tag(&outer), "div");
    }

    #[test]
    fn test_set_inner_html_on_detached_element_is_noop() {
        let doc = MemoryDocument::with_body(r#"<div id="app-container"></div>"#);
        let container = doc.element_by_id("app-container").unwrap();
        doc.set_inner_html(&container, r#"<div id="stale"></div>"#);
        let stale = doc.element_by_id("stale").unwrap();
        doc.set_inner_html(&container, "");

        doc.set_inner_html(&stale, r#"<span id="ghost"></span>"#);
        assert!(doc.element_by_id("ghost").is_none());
    }

    #[test]
    fn test_attributes_quoting() {
        let doc = MemoryDocument::with_body(
            r#"<button class="pill-btn" data-tab='roles' data-note="a > b" disabled></button><iframe id=dbox-iframe src=about:blank>"#,
        );
        let button = doc.elements_by_class("pill-btn")[0];
        assert_eq!(doc.attribute(&button, "data-tab").as_deref(), Some("roles"));
        assert_eq!(doc.attribute(&button, "data-note").as_deref(), Some("a > b"));
        assert_eq!(doc.attribute(&button, "disabled").as_deref(), Some(""));

        let frame = doc.element_by_id("dbox-iframe").unwrap();
        assert_eq!(doc.attribute(&frame, "src").as_deref(), Some("about:blank"));
    }

    #[test]
    fn test_comments_and_closing_tags_skipped() {
        let doc = MemoryDocument::with_body(
            r#"<!-- <div id="commented"></div> --><!DOCTYPE html><div id="real"></div>"#,
        );
        assert!(doc.element_by_id("commented").is_none());
        assert!(doc.element_by_id("real").is_some());
    }

    #[test]
    fn test_class_mutation() {
        let doc = MemoryDocument::with_body(r#"<a id="opt" class="donate-option"></a>"#);
        let option = doc.element_by_id("opt").unwrap();
        doc.add_class(&option, "selected");
        assert!(doc.has_class(&option, "selected"));
        doc.remove_class(&option, "selected");
        assert!(!doc.has_class(&option, "selected"));
    }

    #[test]
    fn test_scroll_to_top() {
        let doc = MemoryDocument::new();
        doc.set_scroll_y(640);
        doc.scroll_to_top();
        assert_eq!(doc.scroll_y(), 0);
    }
}
