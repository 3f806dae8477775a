use autodrive_core::{Dataset, Vehicle};
use wasm_bindgen::JsValue;

const DATA_GLOBAL: &str = "CARS_DATA";

/// Reads the catalogue the page ships in `window.CARS_DATA`. Pages that do
/// not define it get the bundled catalogue; a present but unusable value
/// yields an empty one.
pub fn load() -> Dataset {
    let Some(window) = crate::dom::window() else {
        return Dataset::bundled();
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(DATA_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return Dataset::bundled();
    }

    if !js_sys::Array::is_array(&value) {
        crate::dom::log_error("window.CARS_DATA is not an array");
        return Dataset::default();
    }

    let vehicles: Vec<Vehicle> = match serde_wasm_bindgen::from_value(value) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            crate::dom::log_error(&format!("window.CARS_DATA is malformed: {e}"));
            return Dataset::default();
        }
    };

    Dataset::new(vehicles).unwrap_or_else(|e| {
        crate::dom::log_error(&format!("window.CARS_DATA rejected: {e}"));
        Dataset::default()
    })
}
