//! Mount Options
//!
//! Configuration shared by the bootstrap pass and the component.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKER_CLASS: &str = "react-delete-button";
pub const DEFAULT_REVERT_AFTER_MS: u32 = 1000;

/// Labels and class names of the rendered control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    /// Markup shown while armed
    pub confirm_label: String,
    /// Base class, always present
    pub link_class: String,
    /// Modifier class added while armed
    pub armed_class: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            confirm_label: "[sure?]".to_string(),
            link_class: "bt-link".to_string(),
            armed_class: "delete-confirm".to_string(),
        }
    }
}

/// Options for a mount pass. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountOptions {
    /// Class marking placeholder elements
    pub marker_class: String,
    /// Delay before an armed control reverts
    pub revert_after_ms: u32,
    /// Hold the pre-click width while armed
    pub keep_width: bool,
    #[serde(flatten)]
    pub appearance: Appearance,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            revert_after_ms: DEFAULT_REVERT_AFTER_MS,
            keep_width: true,
            appearance: Appearance::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MountOptions::default();
        assert_eq!(options.marker_class, "react-delete-button");
        assert_eq!(options.revert_after_ms, 1000);
        assert!(options.keep_width);
        assert_eq!(options.appearance.confirm_label, "[sure?]");
        assert_eq!(options.appearance.link_class, "bt-link");
        assert_eq!(options.appearance.armed_class, "delete-confirm");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: MountOptions =
            serde_json::from_str(r#"{ "revertAfterMs": 2500, "confirmLabel": "Really?" }"#).unwrap();

        assert_eq!(options.revert_after_ms, 2500);
        assert_eq!(options.appearance.confirm_label, "Really?");
        assert_eq!(options.marker_class, "react-delete-button");
        assert_eq!(options.appearance.link_class, "bt-link");
        assert!(options.keep_width);
    }

    #[test]
    fn test_empty_json_is_default() {
        let options: MountOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, MountOptions::default());
    }

    #[test]
    fn test_keep_width_off() {
        let options: MountOptions =
            serde_json::from_str(r#"{ "keepWidth": false, "markerClass": "delete-button" }"#)
                .unwrap();
        assert!(!options.keep_width);
        assert_eq!(options.marker_class, "delete-button");
    }
}
