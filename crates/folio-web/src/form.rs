//! Contact-form wiring: the submit simulation and the floating labels.
//!
//! Field values are captured into the core state machine and go nowhere;
//! the two deferred transitions run through `dom::set_timeout` with the
//! machine's generation token, so a stale callback is ignored.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::constants::LABEL_TWEEN_SEC;
use folio_core::form::{ContactForm, FloatingLabel, LabelPose, Submission};

use crate::constants::{
    ACCENT_CSS, LABEL_RESTING_CSS, SENDING_LABEL_HTML, SENT_LABEL_HTML, SUCCESS_GRADIENT_CSS,
};
use crate::dom;

struct Field {
    control: web::Element,
    label: Option<web::Element>,
    float: Rc<RefCell<FloatingLabel>>,
}

fn control_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn set_control_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

fn apply_label_pose(label: &web::Element, pose: &LabelPose) {
    dom::set_style(
        label,
        "transform",
        &format!("translateY({}px) scale({})", pose.y_px, pose.scale),
    );
    dom::set_style(
        label,
        "color",
        if pose.accent {
            ACCENT_CSS
        } else {
            LABEL_RESTING_CSS
        },
    );
}

fn collect_fields(form: &web::Element) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Ok(list) = form.query_selector_all(".form-group input, .form-group textarea") {
        for i in 0..list.length() {
            let Some(control) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok())
            else {
                continue;
            };
            // The floating label is the control's immediate next sibling.
            let label = control.next_element_sibling();
            fields.push(Field {
                control,
                label,
                float: Rc::new(RefCell::new(FloatingLabel::new())),
            });
        }
    }
    fields
}

fn wire_floating_labels(fields: &[Field]) {
    for field in fields {
        let Some(label) = field.label.clone() else {
            continue;
        };
        dom::set_style(
            &label,
            "transition",
            &format!("transform {LABEL_TWEEN_SEC}s ease, color {LABEL_TWEEN_SEC}s ease"),
        );

        let float = field.float.clone();
        let label_focus = label.clone();
        dom::add_listener(&field.control, "focus", move |_| {
            let pose = float.borrow_mut().focus();
            apply_label_pose(&label_focus, &pose);
        });

        let float = field.float.clone();
        let control = field.control.clone();
        dom::add_listener(&field.control, "blur", move |_| {
            let pose = float.borrow_mut().blur(control_value(&control).is_empty());
            apply_label_pose(&label, &pose);
        });
    }
}

fn submission_from(fields: &[Field]) -> Submission {
    let mut submission = Submission::default();
    for field in fields {
        let value = control_value(&field.control);
        match field.control.get_attribute("name").as_deref() {
            Some("name") => submission.name = value,
            Some("email") => submission.email = value,
            Some("message") => submission.message = value,
            _ => {}
        }
    }
    submission
}

fn clear_fields(fields: &[Field]) {
    for field in fields {
        set_control_value(&field.control, "");
        if let Some(label) = &field.label {
            let pose = field.float.borrow_mut().blur(true);
            apply_label_pose(label, &pose);
        }
    }
}

pub fn wire(document: &web::Document) {
    let Some(form) = dom::by_id(document, "contact-form") else {
        log::warn!("missing #contact-form; form simulator disabled");
        return;
    };
    let Some(button) = form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::warn!("contact form has no submit control");
        return;
    };

    let fields = Rc::new(collect_fields(&form));
    wire_floating_labels(&fields);

    let state = Rc::new(RefCell::new(ContactForm::new()));
    let original_label = button.inner_html();

    dom::add_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let Some(timer) = state.borrow_mut().submit(submission_from(&fields)) else {
            return;
        };
        button.set_disabled(true);
        button.set_inner_html(SENDING_LABEL_HTML);

        let state_t1 = state.clone();
        let button_t1 = button.clone();
        let fields_t1 = fields.clone();
        let original_t1 = original_label.clone();
        dom::set_timeout((timer.delay_sec * 1000.0) as i32, move || {
            let Some(timer) = state_t1.borrow_mut().finish_sending(timer.generation) else {
                return;
            };
            button_t1.set_inner_html(SENT_LABEL_HTML);
            dom::set_style(&button_t1, "background", SUCCESS_GRADIENT_CSS);

            let state_t2 = state_t1.clone();
            let button_t2 = button_t1.clone();
            dom::set_timeout((timer.delay_sec * 1000.0) as i32, move || {
                if !state_t2.borrow_mut().finish_sent(timer.generation) {
                    return;
                }
                button_t2.set_inner_html(&original_t1);
                button_t2.set_disabled(false);
                dom::set_style(&button_t2, "background", "");
                clear_fields(&fields_t1);
            });
        });
    });
    log::info!("contact form wired");
}
