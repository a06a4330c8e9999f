use wasm_bindgen::prelude::*;

mod bodies;
mod captions;
mod clock;
mod config;
mod game;
mod rider;
mod rocket;
mod scene;
use game::SolarRider;

verse_web::export_game!(SolarRider, "solar-rider", vectors);
