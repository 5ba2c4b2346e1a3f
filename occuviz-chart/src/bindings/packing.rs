use crate::hierarchy::HierarchyNode;
use occuviz_scales::{display_name, display_value, ColorAssigner};
use serde::Serialize;

/// Depth whose labels are drawn; the root (depth 0) stays unlabeled
pub const LABELED_DEPTH: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLabel {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub name: String,
    pub value: String,
}

/// Hierarchy node decorated for the packing renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackedNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_index: Option<usize>,
    pub depth: usize,
    pub label: NodeLabel,
    pub tooltip: TooltipContent,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PackedNode>,
}

impl PackedNode {
    /// Childless descendants in order; never includes `self`
    pub fn leaves(&self) -> Vec<&PackedNode> {
        self.children
            .iter()
            .flat_map(|child| {
                if child.children.is_empty() {
                    vec![child]
                } else {
                    child.leaves()
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelStyle {
    pub fill: &'static str,
    pub stroke: bool,
    pub visible_depth: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipOptions {
    pub trigger: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnimationOptions {
    pub enter: &'static str,
    pub exit: &'static str,
    pub update: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingSpec {
    pub chart_type: &'static str,
    pub category_field: &'static str,
    pub value_field: &'static str,
    pub drill: bool,
    pub padding: u32,
    pub layout_padding: u32,
    pub data: PackedNode,
    pub label: LabelStyle,
    pub tooltip: TooltipOptions,
    pub animation: AnimationOptions,
}

/// Circle packing spec over a hierarchy root. Leaves get a color slot from
/// their name; interior nodes report their summed value.
#[tracing::instrument(skip_all, fields(root = %root.name))]
pub fn packing(root: &HierarchyNode, colors: &ColorAssigner) -> PackingSpec {
    PackingSpec {
        chart_type: "circlePacking",
        category_field: "name",
        value_field: "value",
        drill: true,
        padding: 0,
        layout_padding: 5,
        data: pack_node(root, 0, colors),
        label: LabelStyle {
            fill: "white",
            stroke: false,
            visible_depth: LABELED_DEPTH,
        },
        tooltip: TooltipOptions {
            trigger: vec!["click", "hover"],
        },
        animation: AnimationOptions {
            enter: "cubicInOut",
            exit: "cubicInOut",
            update: "cubicInOut",
        },
    }
}

fn pack_node(node: &HierarchyNode, depth: usize, colors: &ColorAssigner) -> PackedNode {
    // The root is never a leaf, even with no children
    let is_leaf = depth > 0 && node.is_leaf();
    let value = if is_leaf {
        node.value
    } else {
        Some(node.total())
    };

    PackedNode {
        name: node.name.clone(),
        value,
        color_index: is_leaf.then(|| colors.color_index_of(&node.name)),
        depth,
        label: NodeLabel {
            visible: depth == LABELED_DEPTH,
        },
        tooltip: TooltipContent {
            name: display_name(Some(node.name.as_str())),
            value: display_value(value.map(|v| v as f64)),
        },
        children: node
            .children
            .iter()
            .map(|c| pack_node(c, depth + 1, colors))
            .collect(),
    }
}
