use crate::geometry::point::{Path, Paths};

/// One solution contour with its place in the containment hierarchy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyNode {
    contour: Path,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Position among the siblings.
    index: usize,
    is_open: bool,
}

impl PolyNode {
    pub fn contour(&self) -> &Path {
        &self.contour
    }

    /// `None` for top level nodes.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Containment tree of a solution. Nodes live in an arena and are addressed
/// by index; top level outers and open paths are the root's children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
    children: Vec<usize>,
}

impl PolyTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
    }

    pub(crate) fn create_node(&mut self, contour: Path, is_open: bool) -> usize {
        let index = self.nodes.len();

        self.nodes.push(PolyNode {
            contour,
            is_open,
            ..PolyNode::default()
        });

        index
    }

    pub(crate) fn add_child(&mut self, parent: Option<usize>, child: usize) {
        let siblings = match parent {
            Some(parent) => &mut self.nodes[parent].children,
            None => &mut self.children,
        };
        let index = siblings.len();

        siblings.push(child);

        let node = &mut self.nodes[child];
        node.parent = parent;
        node.index = index;
    }

    /// Drops the single enclosing outer of a negative offset, promoting its
    /// holes to the top level. Anything else means nothing was inside it.
    pub(crate) fn remove_outer(&mut self) {
        let outer = match self.children.as_slice() {
            [outer] if !self.nodes[*outer].children.is_empty() => *outer,
            _ => {
                self.clear();
                return;
            }
        };

        let children = std::mem::take(&mut self.nodes[outer].children);
        self.children.clear();

        for child in children {
            self.add_child(None, child);
        }
    }

    pub fn node(&self, index: usize) -> &PolyNode {
        &self.nodes[index]
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn first(&self) -> Option<usize> {
        self.children.first().copied()
    }

    /// Next node in depth-first order.
    pub fn get_next(&self, index: usize) -> Option<usize> {
        match self.nodes[index].children.first() {
            Some(child) => Some(*child),
            None => self.next_sibling_up(index),
        }
    }

    fn next_sibling_up(&self, index: usize) -> Option<usize> {
        let node = &self.nodes[index];
        let siblings = match node.parent {
            Some(parent) => &self.nodes[parent].children,
            None => &self.children,
        };

        match siblings.get(node.index + 1) {
            Some(sibling) => Some(*sibling),
            None => node.parent.and_then(|parent| self.next_sibling_up(parent)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.first(), move |&index| self.get_next(index))
    }

    /// Number of nodes reachable from the root.
    pub fn total(&self) -> usize {
        self.iter().count()
    }

    /// Holes sit at odd depths below the root.
    pub fn is_hole(&self, index: usize) -> bool {
        let mut result = false;
        let mut parent = self.nodes[index].parent;

        while let Some(index) = parent {
            result = !result;
            parent = self.nodes[index].parent;
        }

        result
    }

    pub fn paths(&self) -> Paths {
        self.collect_paths(|_| true)
    }

    pub fn closed_paths(&self) -> Paths {
        self.collect_paths(|node| !node.is_open)
    }

    /// Open paths are always top level.
    pub fn open_paths(&self) -> Paths {
        self.children
            .iter()
            .map(|&index| &self.nodes[index])
            .filter(|node| node.is_open)
            .map(|node| node.contour.clone())
            .collect()
    }

    fn collect_paths<F>(&self, predicate: F) -> Paths
    where
        F: Fn(&PolyNode) -> bool,
    {
        self.iter()
            .map(|index| &self.nodes[index])
            .filter(|node| !node.contour.is_empty() && predicate(node))
            .map(|node| node.contour.clone())
            .collect()
    }
}
