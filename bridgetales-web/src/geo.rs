//! One-shot browser geolocation.

use crate::dom;
use bridgetales_core::Coordinates;
use js_sys::{Promise, Reflect};
use log::{debug, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn number(target: &JsValue, field: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(field))
        .ok()
        .and_then(|value| value.as_f64())
}

/// Ask the browser for the current position.
///
/// Returns `None` when geolocation is missing, the reader declines, or the
/// reported position is unusable; callers then search around the fallback.
#[allow(clippy::future_not_send)]
pub async fn current_position() -> Option<Coordinates> {
    let Some(geolocation) = dom::window().and_then(|win| win.navigator().geolocation().ok()) else {
        info!("geolocation unavailable, using fallback position");
        return None;
    };
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let position = match JsFuture::from(promise).await {
        Ok(position) => position,
        Err(err) => {
            debug!("position refused: {}", dom::js_error_message(&err));
            return None;
        }
    };
    let coords = Reflect::get(&position, &JsValue::from_str("coords")).ok()?;
    Coordinates::checked(number(&coords, "latitude")?, number(&coords, "longitude")?)
}
