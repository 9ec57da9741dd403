//! The DOM seam.
//!
//! The router and every page widget touch the page only through [`Document`].
//! On `wasm32` it is implemented over `web-sys`; everywhere else
//! [`MemoryDocument`] stands in.

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::*;
pub use memory::*;

/// Operations the shell needs from a document.
pub trait Document {
    /// Handle to an element in this document.
    type Element: Clone;

    /// Look up an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All attached elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// Replace an element's children with parsed markup.
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Add a class to an element's class list.
    fn add_class(&self, element: &Self::Element, class: &str);

    /// Remove a class from an element's class list.
    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Read an attribute.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Whether the element is still part of the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Reset the viewport scroll position to the top.
    fn scroll_to_top(&self);
}
