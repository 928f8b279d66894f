// The submit-state machine timeline and its stale-timer immunity, plus the
// floating-label poses.

use folio_core::form::{ContactForm, FloatingLabel, FormPhase, Submission};

fn submission() -> Submission {
    Submission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "hello".into(),
    }
}

#[test]
fn full_cycle_idle_sending_sent_idle() {
    let mut form = ContactForm::new();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.button().enabled);

    let t1 = form.submit(submission()).expect("accepted from idle");
    assert_eq!(form.phase(), FormPhase::Sending);
    assert_eq!(t1.delay_sec, 1.5);
    assert!(!form.button().enabled);
    assert!(!form.button().success_tint);
    assert_eq!(form.captured().unwrap().name, "Ada");

    let t2 = form.finish_sending(t1.generation).expect("first timer");
    assert_eq!(form.phase(), FormPhase::Sent);
    assert_eq!(t2.delay_sec, 2.0);
    assert!(!form.button().enabled);
    assert!(form.button().success_tint);

    assert!(form.finish_sent(t2.generation));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.button().enabled);
    assert!(form.captured().is_none());
}

#[test]
fn submit_rejected_outside_idle() {
    let mut form = ContactForm::new();
    let t1 = form.submit(submission()).unwrap();
    assert!(form.submit(submission()).is_none());
    assert!(form.finish_sending(t1.generation).is_some());
    assert!(form.submit(submission()).is_none());
}

#[test]
fn stale_generation_is_ignored() {
    let mut form = ContactForm::new();
    let t1 = form.submit(submission()).unwrap();
    assert!(form.finish_sending(t1.generation.wrapping_sub(1)).is_none());
    assert_eq!(form.phase(), FormPhase::Sending);

    let t2 = form.finish_sending(t1.generation).unwrap();
    assert!(!form.finish_sent(t2.generation.wrapping_add(1)));
    assert_eq!(form.phase(), FormPhase::Sent);
}

#[test]
fn stale_timer_from_previous_cycle_cannot_corrupt_new_one() {
    let mut form = ContactForm::new();
    let old = form.submit(submission()).unwrap();
    let old2 = form.finish_sending(old.generation).unwrap();
    assert!(form.finish_sent(old2.generation));

    // New cycle; the old cycle's timers fire late.
    let fresh = form.submit(submission()).unwrap();
    assert!(form.finish_sending(old.generation).is_none());
    assert!(!form.finish_sent(old2.generation));
    assert_eq!(form.phase(), FormPhase::Sending);
    assert!(form.finish_sending(fresh.generation).is_some());
}

#[test]
fn out_of_order_completion_is_a_noop() {
    let mut form = ContactForm::new();
    let t1 = form.submit(submission()).unwrap();
    // Second timer callback arriving while still Sending does nothing.
    assert!(!form.finish_sent(t1.generation));
    assert_eq!(form.phase(), FormPhase::Sending);
}

#[test]
fn label_raises_on_focus_and_rests_only_when_empty() {
    let mut label = FloatingLabel::new();
    assert_eq!(label.pose().y_px, 0.0);
    assert!(!label.pose().accent);

    let raised = label.focus();
    assert_eq!(raised.y_px, -25.0);
    assert_eq!(raised.scale, 0.8);
    assert!(raised.accent);

    // Non-empty field keeps the label raised after blur.
    let still_raised = label.blur(false);
    assert_eq!(still_raised.y_px, -25.0);
    assert!(still_raised.accent);

    let rested = label.blur(true);
    assert_eq!(rested.y_px, 0.0);
    assert_eq!(rested.scale, 1.0);
    assert!(!rested.accent);
}
