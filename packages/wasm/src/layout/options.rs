//! Layout configuration.
//!
//! Options deserialize directly from the JS options object. Every field is
//! named in camelCase and optional: a missing, `undefined` or `null` field
//! takes its default.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::graph::ParentPolicy;

/// Orientation of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Parents above children; siblings spread along x.
    #[default]
    Vertical,
    /// Parents left of children; siblings spread along y.
    Horizontal,
}

/// Configuration for the auto layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OptionsInput")]
pub struct LayoutOptions {
    /// Tree orientation.
    pub direction: LayoutDirection,
    /// Sibling slot width in vertical mode, level step in horizontal mode.
    pub horizontal_spacing: f64,
    /// Level step in vertical mode, sibling slot width in horizontal mode.
    pub vertical_spacing: f64,
    /// Resolution of several edges targeting one node.
    pub parent_policy: ParentPolicy,
    /// Reject duplicate ids and edges with unknown endpoints.
    pub strict: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Vertical,
            horizontal_spacing: 300.0,
            vertical_spacing: 150.0,
            parent_policy: ParentPolicy::LastWins,
            strict: false,
        }
    }
}

/// Wire shape of [`LayoutOptions`], with every field nullable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OptionsInput {
    direction: Option<LayoutDirection>,
    horizontal_spacing: Option<f64>,
    vertical_spacing: Option<f64>,
    parent_policy: Option<ParentPolicy>,
    strict: Option<bool>,
}

impl From<OptionsInput> for LayoutOptions {
    fn from(input: OptionsInput) -> Self {
        let defaults = Self::default();
        Self {
            direction: input.direction.unwrap_or(defaults.direction),
            horizontal_spacing: input.horizontal_spacing.unwrap_or(defaults.horizontal_spacing),
            vertical_spacing: input.vertical_spacing.unwrap_or(defaults.vertical_spacing),
            parent_policy: input.parent_policy.unwrap_or(defaults.parent_policy),
            strict: input.strict.unwrap_or(defaults.strict),
        }
    }
}

impl LayoutOptions {
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_spacing(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn with_parent_policy(mut self, policy: ParentPolicy) -> Self {
        self.parent_policy = policy;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// `(slot, level)` spacing: the per-slot unit along the sibling axis and
    /// the per-generation step along the depth axis.
    pub fn axis_spacing(&self) -> (f64, f64) {
        match self.direction {
            LayoutDirection::Vertical => (self.horizontal_spacing, self.vertical_spacing),
            LayoutDirection::Horizontal => (self.vertical_spacing, self.horizontal_spacing),
        }
    }

    /// Reject spacings that would poison every coordinate.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidSpacing { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.direction, LayoutDirection::Vertical);
        assert_eq!(options.horizontal_spacing, 300.0);
        assert_eq!(options.vertical_spacing, 150.0);
        assert_eq!(options.parent_policy, ParentPolicy::LastWins);
        assert!(!options.strict);
    }

    #[test]
    fn test_unset_fields_take_defaults() {
        let options = LayoutOptions::from(OptionsInput {
            direction: Some(LayoutDirection::Horizontal),
            vertical_spacing: Some(80.0),
            ..OptionsInput::default()
        });
        assert_eq!(options.direction, LayoutDirection::Horizontal);
        assert_eq!(options.horizontal_spacing, 300.0);
        assert_eq!(options.vertical_spacing, 80.0);
        assert_eq!(options.parent_policy, ParentPolicy::LastWins);
        assert!(!options.strict);

        assert_eq!(
            LayoutOptions::from(OptionsInput::default()),
            LayoutOptions::default()
        );
    }

    #[test]
    fn test_axis_spacing_swaps_with_direction() {
        let options = LayoutOptions::default().with_spacing(40.0, 10.0);
        assert_eq!(options.axis_spacing(), (40.0, 10.0));

        let options = options.with_direction(LayoutDirection::Horizontal);
        assert_eq!(options.axis_spacing(), (10.0, 40.0));
    }

    #[test]
    fn test_non_finite_spacing_is_rejected() {
        let options = LayoutOptions::default().with_spacing(f64::INFINITY, 150.0);
        assert!(matches!(
            options.validate(),
            Err(LayoutError::InvalidSpacing {
                name: "horizontalSpacing",
                ..
            })
        ));

        let options = LayoutOptions::default().with_spacing(300.0, f64::NAN);
        assert!(options.validate().is_err());
        assert!(LayoutOptions::default().validate().is_ok());
    }
}
