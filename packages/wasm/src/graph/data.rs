//! Payload carried by curriculum tree nodes.
//!
//! The renderer reads these fields; layout ignores them. Callback fields set
//! on the JS side (`onClick`, `onToggleCollapse`) are skipped on
//! deserialization, and `undefined`/`null` flags read as `false`.

use serde::{Deserialize, Serialize};

use super::nullable;

/// Text direction the node is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
    /// Top to bottom.
    #[default]
    Ttb,
}

/// Visual progress style of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockStyle {
    Complete,
    #[default]
    Normal,
    InProgress,
    QuarterProgress,
    HalfProgress,
    ThreeQuarterProgress,
}

/// Data attached to a `treeNode` record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeNodeData {
    #[serde(deserialize_with = "nullable::or_default")]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_modules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub is_selected: bool,
    #[serde(deserialize_with = "nullable::or_default")]
    pub is_highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable::or_default")]
    pub can_zoom: bool,
    #[serde(deserialize_with = "nullable::or_default")]
    pub has_questions: bool,
    #[serde(deserialize_with = "nullable::or_default")]
    pub disabled: bool,
}

impl TreeNodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Space-separated CSS classes for the node's current state.
    pub fn class_name(&self) -> String {
        let mut classes = vec!["tree-node"];

        if self.is_selected {
            classes.push("tree-node--selected");
        }
        if self.is_highlighted {
            classes.push("tree-node--highlighted");
        }
        if self.disabled {
            classes.push("tree-node--disabled");
        }

        classes.join(" ")
    }

    pub fn has_sub_modules(&self) -> bool {
        self.sub_modules.as_ref().is_some_and(|m| !m.is_empty())
    }
}
