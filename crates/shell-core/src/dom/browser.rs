//! `web-sys` binding of the DOM seam.

use web_sys::{Element, Window};

use super::Document;

/// The live browser document.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    window: Window,
    document: web_sys::Document,
}

impl BrowserDocument {
    /// Bind to the global window, if there is one.
    pub fn from_global() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// The underlying window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The underlying document.
    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for BrowserDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        // HTMLCollection is live; snapshot it before callers mutate classes.
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn is_connected(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
