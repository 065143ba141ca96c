use wasm_bindgen::prelude::*;
use starfall_engine::Color;

pub mod game;
use game::{CometClicker, CUSTOM_COMET_COLOUR};

starfall_web::export_game!(CometClicker, "comet-clicker");

/// Current comet colour as `#rrggbb`, for the colour picker.
#[wasm_bindgen]
pub fn get_colour_hex() -> String {
    with_runner(|r| r.game().colour_hex())
}

/// Set the comet colour from a `#rrggbb` string. Takes effect on the next tick.
#[wasm_bindgen]
pub fn set_colour_hex(css: &str) -> Result<(), JsValue> {
    let colour = Color::parse_css_hex(css).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_runner(|r| r.push_custom(CUSTOM_COMET_COLOUR, colour.to_hex() as f32, 0.0, 0.0));
    Ok(())
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.game().score())
}
