use js_sys::{Function, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

#[derive(Debug, Error, PartialEq)]
pub enum CopyError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn clipboard_write_text() -> Result<(JsValue, Function), CopyError> {
    let navigator: JsValue = window().ok_or(CopyError::Unavailable)?.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| CopyError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(CopyError::Unavailable);
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| CopyError::Unavailable)?
        .dyn_into::<Function>()
        .map_err(|_| CopyError::Unavailable)?;
    Ok((clipboard, write_text))
}

/// `navigator.clipboard.writeText(text)`, resolved.
pub async fn write_text(text: &str) -> Result<(), CopyError> {
    let (clipboard, write_text) = clipboard_write_text()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| CopyError::Rejected(describe(err)))?
        .dyn_into::<Promise>()
        .map_err(|err| CopyError::Rejected(describe(err)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| CopyError::Rejected(describe(err)))
}
