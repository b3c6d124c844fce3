use crate::constants::*;
use crate::dom;
use crate::Shared;
use aim_core::{parse_dpi, parse_sensitivity, GameMode};
use web_sys as web;

/// Wire the sensitivity panel's fields to the store. Rejected text is logged
/// and left in the field; the store never sees it.
pub fn wire_panel(shared: &Shared) {
    wire_dpi(shared);
    wire_sensitivity(shared, SENSITIVITY_INPUT_ID);
    wire_sensitivity(shared, SENSITIVITY_SLIDER_ID);
    wire_game_mode(shared);
    wire_auto_adjust(shared);
}

fn wire_dpi(shared: &Shared) {
    let Some(el) = shared.document.get_element_by_id(DPI_INPUT_ID) else {
        log::warn!("[panel] missing #{}", DPI_INPUT_ID);
        return;
    };
    let s = shared.clone();
    dom::add_listener(&el, "input", move |_: web::Event| {
        let Some(text) = dom::input_value(&s.document, DPI_INPUT_ID) else {
            return;
        };
        match parse_dpi(&text) {
            Ok(dpi) => {
                s.store.borrow_mut().set_dpi(dpi);
                s.refresh_panel();
            }
            Err(e) => log::warn!("[panel] {}", e),
        }
    });
}

fn wire_sensitivity(shared: &Shared, id: &'static str) {
    let Some(el) = shared.document.get_element_by_id(id) else {
        log::warn!("[panel] missing #{}", id);
        return;
    };
    let s = shared.clone();
    dom::add_listener(&el, "input", move |_: web::Event| {
        let Some(text) = dom::input_value(&s.document, id) else {
            return;
        };
        match parse_sensitivity(&text) {
            Ok(sens) => {
                s.store.borrow_mut().set_sensitivity(sens);
                s.refresh_panel();
            }
            Err(e) => log::warn!("[panel] {}", e),
        }
    });
}

fn wire_game_mode(shared: &Shared) {
    let Some(select) = dom::by_id::<web::HtmlSelectElement>(&shared.document, GAME_MODE_SELECT_ID)
    else {
        log::warn!("[panel] missing #{}", GAME_MODE_SELECT_ID);
        return;
    };
    let s = shared.clone();
    let select_for_listener = select.clone();
    dom::add_listener(&select, "change", move |_: web::Event| {
        match select_for_listener.value().parse::<GameMode>() {
            Ok(mode) => {
                s.store.borrow_mut().set_game_mode(mode);
                s.camera.borrow_mut().set_game_mode(mode);
                s.refresh_panel();
            }
            Err(e) => log::warn!("[panel] {}", e),
        }
    });
}

fn wire_auto_adjust(shared: &Shared) {
    let Some(el) = shared.document.get_element_by_id(AUTO_ADJUST_ID) else {
        log::warn!("[panel] missing #{}", AUTO_ADJUST_ID);
        return;
    };
    let s = shared.clone();
    dom::add_listener(&el, "change", move |_: web::Event| {
        s.store.borrow_mut().toggle_auto_adjustment();
        s.refresh_panel();
    });
}
