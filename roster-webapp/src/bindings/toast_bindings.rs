use wasm_bindgen::prelude::*;

use roster_commons::notify::{Notify, Severity};

#[wasm_bindgen(module = "/js/platform/toast.js")]
extern "C" {
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(title: String, message: String, variant: String);
}

/// Platform toast display behind the `Notify` seam.
#[derive(Clone)]
pub struct ToastNotifier;

impl ToastNotifier {
    pub fn new() -> ToastNotifier {
        ToastNotifier
    }
}

impl Notify for ToastNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        show_toast(title.to_string(), message.to_string(), severity.as_str().to_string());
    }
}
