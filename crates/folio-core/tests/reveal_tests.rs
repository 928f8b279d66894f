// Reveal policy: toggling sections, one-shot cards/skills, independent glow
// and the additive visibility marker.

use folio_core::reveal::{
    entrance, in_glow_zone, in_trigger_zone, Effect, RevealKind, RevealState,
};

#[test]
fn section_entrance_toggles_with_zone() {
    let mut s = RevealState::new(RevealKind::Section, 0);
    assert_eq!(&s.update(true)[..], &[Effect::PlayEntrance]);
    // No change while staying inside.
    assert!(s.update(true).is_empty());
    assert_eq!(&s.update(false)[..], &[Effect::ReverseEntrance]);
    // Re-crossing replays; sections are not one-shot.
    assert_eq!(&s.update(true)[..], &[Effect::PlayEntrance]);
}

#[test]
fn card_entrance_plays_at_most_once() {
    let mut s = RevealState::new(RevealKind::Card, 0);
    let first = s.update(true);
    assert!(first.contains(&Effect::PlayEntrance));
    assert!(s.has_played());

    // Any number of direction reversals never replays or reverses it.
    for _ in 0..3 {
        let out = s.update(false);
        assert!(!out.contains(&Effect::ReverseEntrance));
        let back = s.update(true);
        assert!(!back.contains(&Effect::PlayEntrance));
    }
}

#[test]
fn glow_retoggles_independently_of_entrance() {
    let mut s = RevealState::new(RevealKind::Card, 0);
    let first = s.update(true);
    assert_eq!(
        &first[..],
        &[Effect::PlayEntrance, Effect::GlowOn { delay_sec: 0.0 }]
    );
    assert!(s.is_glowing());
    assert_eq!(&s.update(false)[..], &[Effect::GlowOff { delay_sec: 0.0 }]);
    assert_eq!(&s.update(true)[..], &[Effect::GlowOn { delay_sec: 0.0 }]);
}

#[test]
fn glow_delay_staggers_by_index() {
    let mut s = RevealState::new(RevealKind::Card, 2);
    let effects = s.update(true);
    let delay = effects
        .iter()
        .find_map(|e| match e {
            Effect::GlowOn { delay_sec } => Some(*delay_sec),
            _ => None,
        })
        .expect("glow on enter");
    assert!((delay - 0.2).abs() < 1e-6);
}

#[test]
fn skill_first_entry_also_fills_the_bar() {
    let mut s = RevealState::new(RevealKind::Skill, 1);
    let effects = s.update(true);
    assert!(effects.contains(&Effect::PlayEntrance));
    assert!(effects.contains(&Effect::FillSkill));
    // One-shot: the fill never restarts either.
    s.update(false);
    assert!(!s.update(true).contains(&Effect::FillSkill));
}

#[test]
fn sections_and_timeline_have_no_glow() {
    for kind in [RevealKind::Section, RevealKind::TimelineItem] {
        let mut s = RevealState::new(kind, 0);
        let effects = s.update(true);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::GlowOn { .. } | Effect::GlowOff { .. })));
    }
}

#[test]
fn visibility_marker_is_additive_and_single_shot() {
    let mut s = RevealState::new(RevealKind::TimelineItem, 0);
    assert!(s.mark_visible());
    assert!(!s.mark_visible());
    assert!(!s.mark_visible());
}

#[test]
fn timeline_items_alternate_entry_side() {
    assert!(entrance(RevealKind::TimelineItem, 0).dx_px < 0.0);
    assert!(entrance(RevealKind::TimelineItem, 1).dx_px > 0.0);
    assert!(entrance(RevealKind::TimelineItem, 2).dx_px < 0.0);
}

#[test]
fn card_entrances_stagger_and_start_shrunk() {
    let e0 = entrance(RevealKind::Card, 0);
    let e3 = entrance(RevealKind::Card, 3);
    assert_eq!(e0.delay_sec, 0.0);
    assert!((e3.delay_sec - 0.3).abs() < 1e-6);
    assert_eq!(e0.start_scale, 0.8);
}

#[test]
fn thresholds_differ_by_kind() {
    assert_eq!(RevealKind::Section.trigger_fraction(), 0.80);
    assert_eq!(RevealKind::Card.trigger_fraction(), 0.85);
    assert_eq!(RevealKind::Skill.trigger_fraction(), 0.85);
}

#[test]
fn zone_predicates() {
    // 1000px viewport: the 80% line sits at 800.
    assert!(in_trigger_zone(799.0, 1000.0, 0.80));
    assert!(!in_trigger_zone(801.0, 1000.0, 0.80));

    // Glow needs the element still on screen.
    assert!(in_glow_zone(500.0, 700.0, 1000.0, 0.85));
    assert!(!in_glow_zone(-300.0, -10.0, 1000.0, 0.85));
    assert!(!in_glow_zone(900.0, 1100.0, 1000.0, 0.85));
}
