//! Clipboard adapter over `navigator.clipboard.writeText`.
//!
//! The clipboard object is looked up reflectively: it is absent on insecure
//! origins and in Node, and the lookup turns that into a `Clipboard` error.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use vault_core::ports::ClipboardPort;
use vault_types::{Result, VaultError};

pub struct BrowserClipboard;

impl BrowserClipboard {
    fn clipboard() -> Result<JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| VaultError::Clipboard("No window object".to_string()))?;
        let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| VaultError::JsInterop(format!("{:?}", e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(VaultError::Clipboard("Clipboard API not available".to_string()));
        }
        Ok(clipboard)
    }
}

#[async_trait(?Send)]
impl ClipboardPort for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let clipboard = Self::clipboard()?;
        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| VaultError::JsInterop(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| VaultError::Clipboard("writeText is not a function".to_string()))?;
        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| VaultError::Clipboard(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| VaultError::JsInterop("writeText did not return a Promise".to_string()))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| VaultError::Clipboard(format!("{:?}", e)))?;
        Ok(())
    }
}
