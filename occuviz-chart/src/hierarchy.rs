//! Two level aggregation tree for nested and packed charts.
//!
//! The root sits at depth 0 and every record becomes a leaf at depth 1. Label
//! visibility in the packing binding keys off that depth, so the builder never
//! adds intermediate levels.

use occuviz_data::EmploymentView;
use serde::Serialize;

pub const DEFAULT_ROOT_NAME: &str = "Occupations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    pub name: String,
    /// Own value. `None` for interior nodes, whose value is the sum of their children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn leaf(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    pub fn root(name: impl Into<String>, children: Vec<HierarchyNode>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Explicit value if set, otherwise the exact sum over children
    pub fn total(&self) -> u64 {
        match self.value {
            Some(value) => value,
            // Saturates rather than wrapping on absurd totals
        None => self
            .children
            .iter()
            .fold(0u64, |acc, child| acc.saturating_add(child.total())),
        }
    }

    /// Pre-order walk passing each node with its depth (this node is depth 0)
    pub fn visit_with_depth<F: FnMut(&HierarchyNode, usize)>(&self, f: &mut F) {
        self.visit_inner(0, f);
    }

    fn visit_inner<F: FnMut(&HierarchyNode, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        for child in &self.children {
            child.visit_inner(depth + 1, f);
        }
    }

    /// Childless descendants in order. The node the walk starts from is
    /// never its own leaf, so a root without children has none.
    pub fn leaves(&self) -> Vec<&HierarchyNode> {
        let mut leaves = Vec::new();
        self.children.iter().for_each(|c| c.collect_leaves(&mut leaves));
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a HierarchyNode>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            self.children.iter().for_each(|c| c.collect_leaves(out));
        }
    }
}

pub fn build_employment_hierarchy(views: &[EmploymentView]) -> HierarchyNode {
    build_named_employment_hierarchy(DEFAULT_ROOT_NAME, views)
}

/// Root named `root_name` with one leaf per view, in input order
#[tracing::instrument(skip(views), fields(leaves = views.len()))]
pub fn build_named_employment_hierarchy(root_name: &str, views: &[EmploymentView]) -> HierarchyNode {
    let children = views
        .iter()
        .map(|v| HierarchyNode::leaf(v.occupation.clone(), v.employment))
        .collect();
    HierarchyNode::root(root_name, children)
}
