use crate::dom;
use crate::Shared;
use aim_core::constants::KEY_REPEAT_INTERVAL_MS;
use aim_core::RepeatKey;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typing into a panel field should not also nudge sensitivity.
fn from_text_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .map(|t| {
            t.dyn_ref::<web::HtmlInputElement>().is_some()
                || t.dyn_ref::<web::HtmlSelectElement>().is_some()
        })
        .unwrap_or(false)
}

fn apply_step(shared: &Shared, key: RepeatKey) {
    shared.store.borrow_mut().nudge_sensitivity(key.step());
    shared.refresh_panel();
}

fn clear_interval(interval: &Cell<Option<i32>>) {
    if let Some(handle) = interval.take() {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// ArrowUp / ArrowDown adjust sensitivity once on press, then every 250ms
/// until the key is released or the window loses focus.
pub fn wire_key_repeat(shared: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let s = shared.clone();
    let tick = Closure::wrap(Box::new(move || {
        let key = s.key_repeat.borrow().active_key();
        let due = s.key_repeat.borrow_mut().poll(dom::now_ms());
        if let Some(key) = key {
            for _ in 0..due {
                apply_step(&s, key);
            }
        }
    }) as Box<dyn FnMut()>);
    let tick_fn: js_sys::Function = tick.as_ref().unchecked_ref::<js_sys::Function>().clone();
    tick.forget();

    let s = shared.clone();
    let interval_down = interval.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        let Some(key) = RepeatKey::from_key(&ev.key()) else {
            return;
        };
        if from_text_field(&ev) {
            return;
        }
        ev.prevent_default();
        // Browser auto-repeat is replaced by our own schedule
        if ev.repeat() {
            return;
        }
        if !s.key_repeat.borrow_mut().key_down(key, dom::now_ms()) {
            return;
        }
        apply_step(&s, key);
        clear_interval(&interval_down);
        if let Some(w) = web::window() {
            match w.set_interval_with_callback_and_timeout_and_arguments_0(
                &tick_fn,
                KEY_REPEAT_INTERVAL_MS as i32,
            ) {
                Ok(handle) => interval_down.set(Some(handle)),
                Err(e) => log::error!("[keys] setInterval failed: {:?}", e),
            }
        }
        log::debug!("[keys] repeat {:?}", key);
    });

    let s = shared.clone();
    let interval_up = interval.clone();
    dom::add_listener(&window, "keyup", move |ev: web::KeyboardEvent| {
        if let Some(key) = RepeatKey::from_key(&ev.key()) {
            if s.key_repeat.borrow_mut().key_up(key) {
                clear_interval(&interval_up);
            }
        }
    });

    let s = shared.clone();
    dom::add_listener(&window, "blur", move |_: web::Event| {
        s.key_repeat.borrow_mut().blur();
        clear_interval(&interval);
    });
}
