#![cfg(target_arch = "wasm32")]
//! WASM entry point: canvas setup, input wiring and the frame loop.

use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use feedlab_core::FeedState;

pub mod dom;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod render;

const FEED_SEED: u64 = 42;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("feedlab-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("feed-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #feed-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing size in sync with CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let feed = Rc::new(RefCell::new(FeedState::new(viewport, FEED_SEED)));
    {
        let f = feed.borrow();
        log::info!(
            "[feed] {} cards, viewport {}x{}",
            f.cards().len(),
            viewport.x,
            viewport.y
        );
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        feed: feed.clone(),
    });

    // The hint banner dismisses on click
    dom::add_click_listener(&document, "feed-hint", {
        let document = document.clone();
        move || overlay::hide_hint(&document)
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        feed,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
