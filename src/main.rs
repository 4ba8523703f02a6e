//! Confirm-Delete Frontend Entry Point

use confirm_delete::{logging, mount_document, MountOptions, MountedControl};
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    // Controls live as long as the page
    match mount_document(&MountOptions::default()) {
        Ok(controls) => controls.into_iter().for_each(MountedControl::forget),
        Err(err) => log::error!("delete controls not mounted: {}", err),
    }
}
