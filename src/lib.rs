//! Confirm-Delete Frontend
//!
//! Replaces server-rendered delete placeholders with a two-click control
//! that asks for confirmation before letting the delete go through.

pub mod bootstrap;
pub mod components;
pub mod error;
pub mod logging;
pub mod options;
pub mod placeholder;
pub mod state;
pub mod timer;

use wasm_bindgen::prelude::*;

pub use bootstrap::{mount_document, mount_in, mount_into, MountedControl};
pub use error::MountError;
pub use options::{Appearance, MountOptions};

/// JS entry point: mount every placeholder, returning how many were mounted.
/// `options` is an optional object of `MountOptions` fields in camelCase.
#[wasm_bindgen(js_name = mountDeleteButtons)]
pub fn mount_delete_buttons(options: JsValue) -> Result<u32, JsValue> {
    let options = if options.is_undefined() || options.is_null() {
        MountOptions::default()
    } else {
        serde_wasm_bindgen::from_value::<MountOptions>(options)
            .map_err(|e| MountError::Options(e.to_string()))?
    };

    let controls = mount_document(&options)?;
    let count = controls.len() as u32;
    controls.into_iter().for_each(MountedControl::forget);
    Ok(count)
}
