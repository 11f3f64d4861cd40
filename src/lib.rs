#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod galaxy;
mod paint;
mod particles;
mod schedule;
mod theme;
mod timer;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("linktree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    // The three layers are independent; one failing must not take the others down.
    let wiring: [(&str, fn(&web::Document) -> anyhow::Result<()>); 3] = [
        ("theme", theme::wire),
        ("galaxy", galaxy::wire),
        ("particles", particles::wire),
    ];
    for (name, wire) in wiring {
        if let Err(e) = wire(&document) {
            log::error!("[{}] wiring failed: {:?}", name, e);
        }
    }
    Ok(())
}
