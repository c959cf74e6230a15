use wasm_bindgen::prelude::*;

mod renderer;
mod scene;
pub mod scene_graph;
pub mod takeoff;
mod utils;

#[wasm_bindgen(start)]
pub fn dummy_main() {}

#[wasm_bindgen]
pub fn run() {
    utils::set_panic_hook();
    renderer::main();
}
