use crate::constants::*;
use crate::dom;
use crate::labels;
use crate::Shared;
use aim_core::constants::DEFAULT_CALIBRATION_DISTANCE_CM;
use aim_core::{parse_distance_cm, CalibrationStep, CalibrationWizard};
use web_sys as web;

fn step_index(step: CalibrationStep) -> usize {
    match step {
        CalibrationStep::Instructions => 0,
        CalibrationStep::Measuring => 1,
        CalibrationStep::Input => 2,
        CalibrationStep::Result { .. } => 3,
    }
}

/// Show the section for the wizard's current step, or hide the modal when no
/// calibration is running.
fn render(shared: &Shared) {
    let doc = &shared.document;
    let wizard = shared.wizard.borrow();
    let Some(wizard) = wizard.as_ref() else {
        dom::set_visible(doc, CALIBRATION_MODAL_ID, false);
        return;
    };
    dom::set_visible(doc, CALIBRATION_MODAL_ID, true);
    let active = step_index(wizard.step());
    for (i, id) in CALIBRATION_STEP_IDS.iter().enumerate() {
        dom::set_visible(doc, id, i == active);
    }
    match wizard.step() {
        CalibrationStep::Input => {
            dom::set_text(
                doc,
                CALIBRATION_SAMPLES_ID,
                &labels::sample_count(wizard.session().samples().len()),
            );
        }
        CalibrationStep::Result { dpi } => {
            dom::set_text(doc, CALIBRATION_RESULT_ID, &dpi.to_string());
        }
        _ => {}
    }
}

fn open(shared: &Shared) {
    *shared.wizard.borrow_mut() = Some(CalibrationWizard::new());
    dom::set_input_value(
        &shared.document,
        CALIBRATION_DISTANCE_ID,
        &DEFAULT_CALIBRATION_DISTANCE_CM.to_string(),
    );
    // Measuring needs the cursor free to leave the canvas
    shared.document.exit_pointer_lock();
    render(shared);
}

fn close(shared: &Shared) {
    *shared.wizard.borrow_mut() = None;
    render(shared);
}

/// Run `action` against the open wizard, then redraw. Rejected transitions
/// are already logged by the wizard.
fn with_wizard<R>(shared: &Shared, action: impl FnOnce(&mut CalibrationWizard) -> R) -> Option<R> {
    let result = shared.wizard.borrow_mut().as_mut().map(action);
    render(shared);
    result
}

fn calculate(shared: &Shared) {
    let text = dom::input_value(&shared.document, CALIBRATION_DISTANCE_ID).unwrap_or_default();
    let cm = match parse_distance_cm(&text) {
        Ok(cm) => cm,
        Err(e) => {
            log::warn!("[calibration] {}", e);
            return;
        }
    };
    with_wizard(shared, |w| {
        w.set_physical_distance_cm(cm)?;
        w.calculate()
    });
}

fn accept(shared: &Shared) {
    let applied = {
        let mut wizard = shared.wizard.borrow_mut();
        let mut store = shared.store.borrow_mut();
        wizard.as_mut().map(|w| w.accept(&mut store))
    };
    if let Some(Ok(dpi)) = applied {
        log::info!("[calibration] using {} DPI", dpi);
        shared.refresh_panel();
        close(shared);
    }
}

pub fn wire_modal(shared: &Shared) {
    let doc = shared.document.clone();

    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATE_BUTTON_ID, move || open(&s));
    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATION_CLOSE_ID, move || close(&s));

    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATION_START_ID, move || {
        with_wizard(&s, |w| w.start_measurement(dom::now_ms()));
    });
    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATION_STOP_ID, move || {
        with_wizard(&s, |w| w.stop_measurement());
    });
    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATION_CALCULATE_ID, move || calculate(&s));

    for id in [CALIBRATION_BACK_ID, CALIBRATION_AGAIN_ID] {
        let s = shared.clone();
        dom::add_click_listener(&doc, id, move || {
            with_wizard(&s, |w| w.reset());
        });
    }
    let s = shared.clone();
    dom::add_click_listener(&doc, CALIBRATION_ACCEPT_ID, move || accept(&s));

    // Raw movement while measuring; the pointer does not need to be locked.
    let s = shared.clone();
    dom::add_listener(&doc, "mousemove", move |ev: web::MouseEvent| {
        if let Some(w) = s.wizard.borrow_mut().as_mut() {
            w.record_movement(
                ev.movement_x() as f64,
                ev.movement_y() as f64,
                dom::now_ms(),
            );
        }
    });

    render(shared);
}
