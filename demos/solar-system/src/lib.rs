use wasm_bindgen::prelude::*;

pub mod game;
use game::SolarSystem;

starfall_web::export_game!(SolarSystem, "solar-system");
