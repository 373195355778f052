use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init)]
    fn aos_init(options: JsValue);
}

/// Options handed to `AOS.init`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AosOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
    pub easing: &'static str,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 700,
            once: true,
            offset: 100,
            easing: "ease-in-out",
        }
    }
}

fn library_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("AOS")).ok())
        .map_or(false, |aos| !aos.is_undefined() && !aos.is_null())
}

/// Starts the scroll animations when the AOS script is on the page. Without
/// it, elements carrying `data-aos` simply stay static.
pub fn init_scroll_animations() {
    if !library_loaded() {
        error!("AOS library (aos.js) not loaded correctly. Animations will not work.");
        return;
    }
    match serde_wasm_bindgen::to_value(&AosOptions::default()) {
        Ok(options) => {
            aos_init(options);
            info!("Scroll animations initialized");
        }
        Err(e) => error!("Failed to encode AOS options: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_site_settings() {
        let value = serde_json::to_value(AosOptions::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "duration": 700,
                "once": true,
                "offset": 100,
                "easing": "ease-in-out"
            })
        );
    }
}
