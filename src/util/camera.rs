//! Camera capability glue.
//!
//! The permission contract is granted or denied. A granted stream is only
//! used for the live preview; frames never leave the browser because
//! detection is simulated.

use wasm_bindgen::JsCast;
use web_sys::{MediaStream, MediaStreamTrack};

/// Open a video stream.
///
/// Resolves to `None` when the user refuses, no device exists, or the API is
/// missing.
pub async fn open_stream() -> Option<MediaStream> {
    let window = web_sys::window()?;
    let devices = window.navigator().media_devices().ok()?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&wasm_bindgen::JsValue::TRUE);
    let promise = devices.get_user_media_with_constraints(&constraints).ok()?;
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(value) => value.dyn_into::<MediaStream>().ok(),
        Err(err) => {
            log::warn!("camera access denied: {err:?}");
            None
        }
    }
}

/// Ask for video access without keeping the stream.
pub async fn request_access() -> bool {
    match open_stream().await {
        Some(stream) => {
            stop_stream(&stream);
            true
        }
        None => false,
    }
}

/// Stop every track so the browser releases the device.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
