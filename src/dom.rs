use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds on the wall clock; shared by timers, calibration samples and
/// target respawn.
#[inline]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[inline]
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_: web::Event| handler());
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "");
        } else {
            _ = cl.add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        }
    }
}

#[inline]
pub fn input_value(document: &web::Document, id: &str) -> Option<String> {
    by_id::<web::HtmlInputElement>(document, id).map(|el| el.value())
}

fn is_focused(document: &web::Document, el: &web::Element) -> bool {
    document
        .active_element()
        .map(|active| &active == el)
        .unwrap_or(false)
}

/// Write a field's value unless the user is typing in it.
pub fn set_input_value(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = by_id::<web::HtmlInputElement>(document, id) {
        let element: &web::Element = el.as_ref();
        if !is_focused(document, element) && el.value() != value {
            el.set_value(value);
        }
    }
}

pub fn set_checked(document: &web::Document, id: &str, checked: bool) {
    if let Some(el) = by_id::<web::HtmlInputElement>(document, id) {
        el.set_checked(checked);
    }
}

pub fn set_select_value(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = by_id::<web::HtmlSelectElement>(document, id) {
        el.set_value(value);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
