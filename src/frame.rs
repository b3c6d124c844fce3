use crate::dom;
use crate::overlay;
use crate::render;
use crate::Shared;
use aim_core::SensitivityState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub shared: Shared,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
    pub last_state: SensitivityState,
    pub last_counts: (u32, u32),
}

impl FrameContext {
    pub fn new(shared: Shared, ctx2d: web::CanvasRenderingContext2d) -> Self {
        let last_state = shared.store.borrow().snapshot();
        Self {
            shared,
            ctx2d,
            last_instant: Instant::now(),
            last_state,
            last_counts: (0, 0),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if dt.as_secs_f32() > 0.25 {
            log::debug!("[frame] slow frame {:.0}ms", dt.as_secs_f32() * 1000.0);
        }
        let now_ms = dom::now_ms();
        let s = &self.shared;

        // Deferred respawns
        let respawned = s.targets.borrow_mut().tick(now_ms);
        if respawned > 0 {
            log::debug!("[targets] respawned {}", respawned);
        }

        // Hover is polled once per frame, so it can trail the camera by a frame
        if s.pointer_locked() {
            let (origin, dir) = s.camera.borrow().center_ray();
            s.targets.borrow_mut().update_hover(origin, dir);
        }

        let state = s.store.borrow().snapshot();
        if state != self.last_state {
            s.camera.borrow_mut().set_game_mode(state.game_mode);
            s.stats.borrow_mut().observe(&state);
            overlay::sync_panel(&s.document, &state);
            self.last_state = state;
        }

        {
            let stats = s.stats.borrow();
            let counts = (stats.total_clicks(), stats.successful_hits());
            if counts != self.last_counts {
                overlay::update_accuracy(&s.document, &stats);
                self.last_counts = counts;
            }
        }

        let width = s.canvas.width().max(1) as f32;
        let height = s.canvas.height().max(1) as f32;
        let mut camera = s.camera.borrow_mut();
        camera.aspect = width / height;
        render::draw(
            &self.ctx2d,
            &s.canvas,
            &camera,
            s.targets.borrow().targets(),
            now_ms,
        );
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
