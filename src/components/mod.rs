//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod delete_button;

pub use delete_button::{render, DeleteButton, Rendered};
