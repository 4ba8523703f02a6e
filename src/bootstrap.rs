//! Bootstrap
//!
//! Finds placeholder elements and mounts one `DeleteButton` into each.

use leptos::mount::{mount_to, UnmountHandle};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::components::DeleteButton;
use crate::error::MountError;
use crate::options::MountOptions;
use crate::placeholder::Placeholder;

/// Set on a placeholder once a control lives in it
pub const MOUNTED_ATTR: &str = "data-confirm-mounted";

/// A control mounted into a placeholder. Dropping it unmounts the control.
pub struct MountedControl {
    handle: UnmountHandle<AnyViewState>,
}

impl MountedControl {
    /// Remove the control; its cleanup cancels any pending revert
    pub fn unmount(self) {
        drop(self.handle);
    }

    /// Keep the control mounted for the rest of the page's life
    pub fn forget(self) {
        std::mem::forget(self.handle);
    }
}

/// Mount controls into every placeholder in the current document
pub fn mount_document(options: &MountOptions) -> Result<Vec<MountedControl>, MountError> {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or(MountError::NoDocument)?;
    Ok(mount_in(&root, options))
}

/// Mount controls into the placeholders under `root`, in document order.
/// Malformed placeholders are logged and skipped.
pub fn mount_in(root: &Element, options: &MountOptions) -> Vec<MountedControl> {
    // Collect first: the collection is live
    let found = root.get_elements_by_class_name(&options.marker_class);
    let placeholders: Vec<Element> = (0..found.length()).filter_map(|i| found.item(i)).collect();

    let mut mounted = Vec::with_capacity(placeholders.len());
    for (index, placeholder) in placeholders.iter().enumerate() {
        match mount_into(placeholder, options) {
            Ok(control) => mounted.push(control),
            Err(MountError::AlreadyMounted) => {
                log::debug!("placeholder #{} already mounted", index);
            }
            Err(err) => {
                log::warn!("skipping placeholder #{} (.{}): {}", index, options.marker_class, err);
            }
        }
    }

    log::info!(
        "mounted {} of {} delete controls",
        mounted.len(),
        placeholders.len()
    );
    mounted
}

/// Replace one placeholder's contents with a mounted control
pub fn mount_into(placeholder: &Element, options: &MountOptions) -> Result<MountedControl, MountError> {
    if placeholder.has_attribute(MOUNTED_ATTR) {
        return Err(MountError::AlreadyMounted);
    }

    let Placeholder { label, target } = Placeholder::read(placeholder)?;
    let parent = placeholder
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement)?;

    parent
        .set_attribute(MOUNTED_ATTR, "")
        .map_err(MountError::dom)?;
    parent.set_inner_html("");

    let appearance = options.appearance.clone();
    let revert_after_ms = options.revert_after_ms;
    let keep_width = options.keep_width;
    let handle = mount_to(parent, move || {
        view! {
            <DeleteButton
                label=label
                target=target
                appearance=appearance
                revert_after_ms=revert_after_ms
                keep_width=keep_width
            />
        }
        .into_any()
    });

    Ok(MountedControl { handle })
}
