#![cfg(target_arch = "wasm32")]
use aim_core::{AccuracyTracker, AimCamera, CalibrationWizard, KeyRepeat, SensitivityStore, TargetField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod calibration;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod labels;
mod overlay;
mod render;
mod viewport;

/// Handles to the session state shared by every listener and the frame loop.
///
/// Everything runs on the browser's single thread and each handler runs to
/// completion, so `RefCell` borrows never overlap.
#[derive(Clone)]
pub(crate) struct Shared {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub store: Rc<RefCell<SensitivityStore>>,
    pub camera: Rc<RefCell<AimCamera>>,
    pub targets: Rc<RefCell<TargetField>>,
    pub stats: Rc<RefCell<AccuracyTracker>>,
    pub wizard: Rc<RefCell<Option<CalibrationWizard>>>,
    pub key_repeat: Rc<RefCell<KeyRepeat>>,
    pub hit_sound: Option<Rc<audio::HitSound>>,
}

impl Shared {
    pub fn refresh_panel(&self) {
        let state = self.store.borrow().snapshot();
        overlay::sync_panel(&self.document, &state);
    }

    pub fn pointer_locked(&self) -> bool {
        let canvas: &web::Element = self.canvas.as_ref();
        self.document
            .pointer_lock_element()
            .map(|el| &el == canvas)
            .unwrap_or(false)
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aim-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d = render::context_2d(&canvas)?;

    wire_canvas_resize(&canvas);

    // The store must exist before any listener can reach it.
    let store = SensitivityStore::new();
    let stats = AccuracyTracker::new(&store.snapshot());
    let mut camera = AimCamera::new();
    camera.set_game_mode(store.game_mode());
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

    let shared = Shared {
        document: document.clone(),
        canvas: canvas.clone(),
        store: Rc::new(RefCell::new(store)),
        camera: Rc::new(RefCell::new(camera)),
        targets: Rc::new(RefCell::new(TargetField::new(seed))),
        stats: Rc::new(RefCell::new(stats)),
        wizard: Rc::new(RefCell::new(None)),
        key_repeat: Rc::new(RefCell::new(KeyRepeat::default())),
        hit_sound: audio::HitSound::new().map(Rc::new),
    };
    shared.refresh_panel();
    overlay::update_accuracy(&document, &shared.stats.borrow());

    controls::wire_panel(&shared);
    calibration::wire_modal(&shared);
    events::wire_key_repeat(&shared);
    events::wire_pointer(&shared);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(shared, ctx2d)));
    frame::start_loop(frame_ctx);
    Ok(())
}
