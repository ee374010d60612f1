//! Lumina Graph - WASM Module
//!
//! This module provides the tree auto-layout used by the Lumina Graph
//! front-end to position prerequisite and curriculum trees. It is compiled to
//! WebAssembly and exposes a JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `graph`: Node and edge records, forest construction and validation
//! - `layout`: Subtree-width auto layout (vertical and horizontal)
//! - `logging`: `log` records forwarded to the browser console
//! - `error`: Typed malformed-forest errors
//!
//! Everything outside this file is plain Rust and usable without a JS host.

use js_sys::{Array, Object, Reflect};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod graph;
pub mod layout;
pub mod logging;

pub use error::LayoutError;

use graph::{Edge, HierarchyItem, NodeId, TreeNodeData};
use layout::{LayoutOptions, TreeLayout};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(logging::DEFAULT_LEVEL);
}

impl From<LayoutError> for JsValue {
    fn from(err: LayoutError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// The part of a JS node object the layout needs.
#[derive(Deserialize)]
struct NodeKey {
    id: NodeId,
}

/// Deserialize a JS array, treating `undefined` / `null` as empty.
fn read_list<T: DeserializeOwned>(value: JsValue) -> Result<Vec<T>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn read_options(value: JsValue) -> Result<LayoutOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(LayoutOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

// =========================================================================
// Layout
// =========================================================================

/// Compute positions for a forest of tree nodes.
///
/// Returns new node objects: shallow copies of the inputs with `position`
/// set. The input objects are not modified.
///
/// # Arguments
///
/// * `nodes` - Array of `{ id, ... }` node objects
/// * `edges` - Array of `{ source, target, ... }` parent → child edges
/// * `options` - `{ direction, horizontalSpacing, verticalSpacing, parentPolicy, strict }`,
///   every field optional
///
/// # Errors
///
/// Throws on cyclic edges, non-finite spacing, and (when `strict` or
/// `parentPolicy: "reject"`) on duplicate ids, dangling edges or multiple parents.
#[wasm_bindgen(js_name = autoLayout)]
pub fn compute_auto_layout(
    nodes: Array,
    edges: JsValue,
    options: JsValue,
) -> Result<Array, JsValue> {
    let keys: Vec<NodeKey> = serde_wasm_bindgen::from_value(nodes.clone().into())?;
    let edges: Vec<Edge> = read_list(edges)?;
    let options = read_options(options)?;

    let ids: Vec<&str> = keys.iter().map(|k| k.id.as_str()).collect();
    let result = TreeLayout::new(options).compute(&ids, &edges)?;

    let position_key = JsValue::from_str("position");
    let laid_out = Array::new();
    for (node, position) in nodes.iter().zip(&result.positions) {
        let copy = Object::assign(&Object::new(), node.unchecked_ref());
        Reflect::set(&copy, &position_key, &serde_wasm_bindgen::to_value(position)?)?;
        laid_out.push(&copy);
    }

    Ok(laid_out)
}

/// Build `{ nodes, edges }` from `[{ id, parentId?, data }]`.
///
/// Nodes get type `treeNode` and position `(0, 0)`; each `data` value is
/// passed through as-is.
#[wasm_bindgen(js_name = createTreeFromHierarchy)]
pub fn build_hierarchy(items: Array) -> Result<JsValue, JsValue> {
    let keys: Vec<HierarchyItem<IgnoredAny>> =
        serde_wasm_bindgen::from_value(items.clone().into())?;

    // Carry each item's index as its payload so the JS data can be
    // re-attached after the Rust side builds the records.
    let indexed: Vec<HierarchyItem<u32>> = keys
        .into_iter()
        .zip(0u32..)
        .map(|(item, index)| HierarchyItem {
            id: item.id,
            parent_id: item.parent_id,
            data: index,
        })
        .collect();
    let hierarchy = graph::create_tree_from_hierarchy(indexed);

    let data_key = JsValue::from_str("data");
    let nodes = Array::new();
    for node in &hierarchy.nodes {
        let value = serde_wasm_bindgen::to_value(node)?;
        let data = Reflect::get(&items.get(node.data), &data_key)?;
        Reflect::set(&value, &data_key, &data)?;
        nodes.push(&value);
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("nodes"), &nodes)?;
    Reflect::set(
        &result,
        &JsValue::from_str("edges"),
        &serde_wasm_bindgen::to_value(&hierarchy.edges)?,
    )?;

    Ok(result.into())
}

/// Throw if the nodes and edges do not form a clean forest.
///
/// Rejects duplicate ids, edges with unknown endpoints, nodes with more than
/// one parent and cycles.
#[wasm_bindgen(js_name = validateTree)]
pub fn validate_tree(nodes: JsValue, edges: JsValue) -> Result<(), JsValue> {
    let keys: Vec<NodeKey> = read_list(nodes)?;
    let edges: Vec<Edge> = read_list(edges)?;

    let ids: Vec<&str> = keys.iter().map(|k| k.id.as_str()).collect();
    graph::validate(&ids, &edges)?;
    Ok(())
}

// =========================================================================
// Node Data
// =========================================================================

/// CSS class names for a node's data.
#[wasm_bindgen(js_name = treeNodeClassName)]
pub fn tree_node_class_name(data: JsValue) -> Result<String, JsValue> {
    let data: TreeNodeData = serde_wasm_bindgen::from_value(data)?;
    Ok(data.class_name())
}

/// Whether a node's data lists at least one submodule.
#[wasm_bindgen(js_name = hasSubModules)]
pub fn has_sub_modules(data: JsValue) -> Result<bool, JsValue> {
    let data: TreeNodeData = serde_wasm_bindgen::from_value(data)?;
    Ok(data.has_sub_modules())
}

// =========================================================================
// Diagnostics
// =========================================================================

/// Set the console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| js_sys::Error::new(&format!("unknown log level {level:?}")))?;
    logging::init(filter);
    Ok(())
}
