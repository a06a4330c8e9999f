use glam::Vec2;
use js_sys::Function;
use wasm_bindgen::JsValue;
use verse_engine::{ApproxTextMeasurer, FontWeight, TextMeasurer, TextStyle};

/// Text measurement backed by a host callback.
///
/// The callback receives `(text, cssFont)` and returns the advance width in
/// pixels, typically `ctx.measureText(text).width` on a 2D canvas. Letter
/// spacing is added on the Rust side. If the callback throws or returns a
/// non-number, the approximate measurer answers instead.
pub struct JsTextMeasurer {
    callback: Function,
}

impl JsTextMeasurer {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

/// CSS `font` shorthand for a text style.
pub fn css_font(style: &TextStyle) -> String {
    let weight = match style.weight {
        FontWeight::Normal => "400",
        FontWeight::Bold => "700",
        FontWeight::ExtraBold => "800",
    };
    format!("{} {}px sans-serif", weight, style.size)
}

impl TextMeasurer for JsTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        let font = css_font(style);
        let width = self
            .callback
            .call2(&JsValue::NULL, &JsValue::from_str(text), &JsValue::from_str(&font))
            .ok()
            .and_then(|value| value.as_f64())
            .filter(|w| w.is_finite() && *w >= 0.0);

        match width {
            Some(w) => {
                let glyphs = text.chars().count() as f32;
                let spacing = style.letter_spacing * (glyphs - 1.0).max(0.0);
                Vec2::new(w as f32 + spacing, style.size * ApproxTextMeasurer::LINE_HEIGHT)
            }
            None => ApproxTextMeasurer.measure(text, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_font_maps_weight_and_size() {
        let style = TextStyle::new(28.0).with_weight(FontWeight::ExtraBold);
        assert_eq!(css_font(&style), "800 28px sans-serif");
        assert_eq!(css_font(&TextStyle::new(9.5)), "400 9.5px sans-serif");
    }
}
