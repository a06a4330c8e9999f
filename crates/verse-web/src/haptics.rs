use verse_engine::Haptics;

/// Vibration through `navigator.vibrate`.
/// Browsers without the Vibration API (or without a window) ignore the pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHaptics;

impl Haptics for WebHaptics {
    fn pulse(&mut self, duration_ms: u32) {
        if let Some(window) = web_sys::window() {
            if !window.navigator().vibrate_with_duration(duration_ms) {
                log::debug!("vibration refused by the browser");
            }
        }
    }
}
