//! Mount Errors

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MountError {
    #[error("No document available")]
    NoDocument,

    #[error("Placeholder is already mounted")]
    AlreadyMounted,

    #[error("Placeholder is not an HTML element")]
    NotHtmlElement,

    #[error("Placeholder has no label content")]
    EmptyLabel,

    #[error("Link placeholder has no href")]
    MissingHref,

    #[error("Invalid mount options: {0}")]
    Options(String),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl MountError {
    pub(crate) fn dom(err: JsValue) -> Self {
        MountError::Dom(format!("{:?}", err))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
