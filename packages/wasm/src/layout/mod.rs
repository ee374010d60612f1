//! Layout algorithms for tree visualization.
//!
//! This module computes target positions for tree nodes. The front-end
//! renderer draws each node at the position it is given.

pub mod auto_layout;
pub mod options;

pub use auto_layout::{LayoutResult, TreeLayout, auto_layout};
pub use options::{LayoutDirection, LayoutOptions};
