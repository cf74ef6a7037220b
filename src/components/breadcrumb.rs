//! Breadcrumbs - hierarchical navigation trails.

use super::{component, slot_method};

component!(
    /// `<coral-breadcrumb>` - a trail of [`BreadcrumbItem`]s.
    Breadcrumb,
    "coral-breadcrumb"
);

impl Breadcrumb {
    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    slot_method!(
        /// Append items to the trail.
        "",
        add
    );
}

component!(
    /// `<coral-breadcrumb-item>` - one step in the trail.
    BreadcrumbItem,
    "coral-breadcrumb-item"
);

impl BreadcrumbItem {
    /// Create an item with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let item = Self::new();
        item.element.set_string("label", label.into());
        item
    }

    /// When set the item renders as a link.
    pub fn href(&self) -> String {
        self.element.get_string("href", "")
    }

    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.element.set_string("href", href.into());
        self
    }

    pub fn target(&self) -> String {
        self.element.get_string("target", "")
    }

    pub fn set_target(&mut self, target: impl Into<String>) -> &mut Self {
        self.element.set_string("target", target.into());
        self
    }

    pub fn rel(&self) -> String {
        self.element.get_string("rel", "noreferrer noopener")
    }

    pub fn set_rel(&mut self, rel: impl Into<String>) -> &mut Self {
        self.element.set_string("rel", rel.into());
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    slot_method!("prefix", add_to_prefix);
    slot_method!("suffix", add_to_suffix);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_breadcrumb_trail_order() {
        let home = BreadcrumbItem::with_label("Home");
        let docs = BreadcrumbItem::with_label("Docs");
        let page = BreadcrumbItem::with_label("Install");
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add(&[&home, &docs, &page]);

        let children = breadcrumb.element().slot_children("");
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].node_id(), home.node_id());
        assert_eq!(children[2].node_id(), page.node_id());
    }

    #[test]
    fn test_breadcrumb_item_rel_default() {
        let item = BreadcrumbItem::new();
        assert_eq!(item.rel(), "noreferrer noopener");
    }
}
