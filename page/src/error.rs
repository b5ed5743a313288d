//! Errors raised while wiring modules to the page.

use carousel::dom::MountError;

/// Failure to initialize a page module.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No `window` global (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// A carousel container could not be mounted.
    #[error(transparent)]
    Mount(#[from] MountError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(carousel::dom::describe_js(&err))
    }
}
