//! Placeholder Reading
//!
//! Extracts the label and default action from server-rendered placeholder markup.

use web_sys::Element;

use crate::error::MountError;

/// What the second click does once the control stops suppressing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlTarget {
    /// Submit button; submits the enclosing form
    Submit,
    /// Anchor; follows the delete endpoint
    Link { href: String },
}

/// Label and target captured from a placeholder at mount time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub label: String,
    pub target: ControlTarget,
}

impl Placeholder {
    /// Read a placeholder element.
    /// Prefers the first nested button or anchor; falls back to the container's own markup.
    pub fn read(element: &Element) -> Result<Self, MountError> {
        match element.query_selector("button, a").map_err(MountError::dom)? {
            Some(child) => {
                Self::from_child(&child.tag_name(), child.inner_html(), child.get_attribute("href"))
            }
            None => Self::from_container(element.inner_html()),
        }
    }

    /// Placeholder with a nested interactive element
    pub fn from_child(
        tag: &str,
        inner_html: String,
        href: Option<String>,
    ) -> Result<Self, MountError> {
        let target = if tag.eq_ignore_ascii_case("a") {
            match href {
                Some(href) if !href.trim().is_empty() => ControlTarget::Link { href },
                _ => return Err(MountError::MissingHref),
            }
        } else {
            ControlTarget::Submit
        };
        Self::with_label(inner_html, target)
    }

    /// Placeholder holding its label directly
    pub fn from_container(inner_html: String) -> Result<Self, MountError> {
        Self::with_label(inner_html, ControlTarget::Submit)
    }

    fn with_label(markup: String, target: ControlTarget) -> Result<Self, MountError> {
        let label = markup.trim();
        if label.is_empty() {
            return Err(MountError::EmptyLabel);
        }
        Ok(Self {
            label: label.to_string(),
            target,
        })
    }
}
