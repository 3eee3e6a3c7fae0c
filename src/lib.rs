#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::core::GlowState;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("iconset-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let main = document
        .query_selector("main")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing <main>"))?;

    for part in [
        ui::build_heading(&document)?,
        ui::build_search_bar(&document)?,
        ui::build_chip_row(&document)?,
        ui::build_links(&document)?,
    ] {
        main.append_child(&part).map_err(|e| anyhow!("{:?}", e))?;
    }

    // The glow is decorative; a host without a 2d context loses the layer,
    // not the page.
    match render::GlowLayer::new(&document) {
        Ok(layer) => {
            let layer = Rc::new(layer);
            main.append_child(layer.container())
                .map_err(|e| anyhow!("{:?}", e))?;

            let viewport = dom::viewport_snapshot(&window);
            let state = Rc::new(RefCell::new(GlowState::new(viewport)));
            layer
                .sync_backing_size(&viewport)
                .map_err(|e| anyhow!("{:?}", e))?;

            events::wire_pointermove(&window, state.clone());
            events::wire_resize(&window, state.clone(), layer.clone());
            frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { state, layer })));
        }
        Err(e) => log::error!("glow layer unavailable, continuing without it: {}", e),
    }

    Ok(())
}
