use crate::dom;
use crate::Shared;
use web_sys as web;

pub fn wire_pointer(shared: &Shared) {
    wire_click(shared);
    wire_mousemove(shared);
    wire_lock_change(shared);
}

/// First click grabs the pointer; once locked, every click is a shot fired
/// through the crosshair.
fn wire_click(shared: &Shared) {
    let s = shared.clone();
    let canvas = shared.canvas.clone();
    dom::add_listener(&canvas, "click", move |_: web::MouseEvent| {
        if !s.pointer_locked() {
            s.canvas.request_pointer_lock();
            return;
        }
        s.stats.borrow_mut().record_click();

        let (origin, dir) = s.camera.borrow().center_ray();
        let offset = s
            .targets
            .borrow_mut()
            .resolve_click(origin, dir, dom::now_ms());
        let Some(offset) = offset else {
            return;
        };
        if let Some(sound) = &s.hit_sound {
            sound.play();
        }
        s.stats.borrow_mut().record_hit();
        let adjusted = s
            .store
            .borrow_mut()
            .adjust_by_hit_offset(offset.x as f64, offset.y as f64);
        if adjusted {
            s.refresh_panel();
        }
    });
}

fn wire_mousemove(shared: &Shared) {
    let s = shared.clone();
    dom::add_listener(&shared.document, "mousemove", move |ev: web::MouseEvent| {
        if !s.pointer_locked() {
            return;
        }
        let sensitivity = s.store.borrow().sensitivity();
        s.camera.borrow_mut().apply_mouse_delta(
            ev.movement_x() as f32,
            ev.movement_y() as f32,
            sensitivity,
        );
    });
}

fn wire_lock_change(shared: &Shared) {
    let s = shared.clone();
    dom::add_listener(&shared.document, "pointerlockchange", move |_: web::Event| {
        let locked = s.pointer_locked();
        let cursor = if locked { "none" } else { "crosshair" };
        _ = s.canvas.style().set_property("cursor", cursor);
        log::info!("[pointer] locked={}", locked);
    });
}
