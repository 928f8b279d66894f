#![cfg(target_arch = "wasm32")]
//! Browser entry point. Every component initializes independently at page
//! load; a missing DOM anchor disables only that component (logged, never
//! fatal), and they then run concurrently off the render loop, scroll
//! position and discrete input events.

use folio_core::scene::{Camera, SceneState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod carousel;
mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod nav;
mod overlay;
mod render;
mod reveal;
mod stats;
mod tween;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Hero background scene: canvas sizing, GPU init and the persistent
/// render loop.
async fn init_scene(document: &web::Document) {
    let Some(canvas) = dom::by_id(document, "hero-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::warn!("missing #hero-canvas; background scene disabled");
        return;
    };
    wire_canvas_resize(&canvas);

    let gpu = frame::init_gpu(&canvas).await;
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: SceneState::new(constants::SCENE_SEED),
        camera: Camera::portfolio(aspect),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire(&document);
    reveal::wire(&document);
    carousel::wire(&document);
    stats::wire_counters(&document);
    form::wire(&document);

    let modal = overlay::wire(&document);
    events::wire_global_keydown(modal);
    events::wire_cursor_follower(&document);
    ambient::wire(&document);

    init_scene(&document).await;
    Ok(())
}
