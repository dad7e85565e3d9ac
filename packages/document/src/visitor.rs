use crate::element::{Element, ElementContent, LeafContent};

/// Visitor pattern for traversing element trees immutably
///
/// Default implementations walk the whole tree depth-first, parents before
/// children. Override `visit_*` methods to act on specific nodes.
pub trait Visitor: Sized {
    fn visit_element(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_leaf(&mut self, _leaf: &LeafContent) {
        // Leaf node, no children to walk
    }
}

pub fn walk_elements<V: Visitor>(visitor: &mut V, elements: &[Element]) {
    for element in elements {
        visitor.visit_element(element);
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &Element) {
    match &element.content {
        ElementContent::Children(children) => walk_elements(visitor, children),
        ElementContent::Leaf(leaf) => visitor.visit_leaf(leaf),
    }
}

/// Collects every element id in traversal order
#[derive(Debug, Default)]
pub struct IdCollector {
    pub ids: Vec<String>,
}

impl Visitor for IdCollector {
    fn visit_element(&mut self, element: &Element) {
        self.ids.push(element.id.clone());
        walk_element(self, element);
    }
}

/// Counts elements and tracks the deepest nesting level
#[derive(Debug, Default)]
pub struct TreeStats {
    pub elements: usize,
    pub leaves: usize,
    pub max_depth: usize,
    depth: usize,
}

impl Visitor for TreeStats {
    fn visit_element(&mut self, element: &Element) {
        self.elements += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        walk_element(self, element);
        self.depth -= 1;
    }

    fn visit_leaf(&mut self, _leaf: &LeafContent) {
        self.leaves += 1;
    }
}
