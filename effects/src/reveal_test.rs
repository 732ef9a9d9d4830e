use super::*;

// --- stagger_delay_ms ---

#[test]
fn first_sibling_has_no_delay() {
    assert_eq!(stagger_delay_ms(0), 0);
}

#[test]
fn delay_scales_with_sibling_index() {
    assert_eq!(stagger_delay_ms(1), 80);
    assert_eq!(stagger_delay_ms(3), 240);
}

// --- RevealSet ---

#[test]
fn empty_set_has_no_elements() {
    let set = RevealSet::new(0);
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn first_trigger_returns_stagger_delay() {
    let mut set = RevealSet::new(4);
    assert_eq!(set.trigger(2, 2), Some(160));
}

#[test]
fn second_trigger_is_suppressed() {
    let mut set = RevealSet::new(4);
    assert_eq!(set.trigger(1, 1), Some(80));
    assert_eq!(set.trigger(1, 1), None);
    assert_eq!(set.trigger(1, 1), None);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut set = RevealSet::new(2);
    assert_eq!(set.trigger(5, 0), None);
    assert!(!set.fired(5));
}

#[test]
fn elements_latch_independently() {
    let mut set = RevealSet::new(3);
    assert_eq!(set.trigger(0, 0), Some(0));
    assert!(set.fired(0));
    assert!(!set.fired(1));
    assert_eq!(set.trigger(1, 1), Some(80));
    assert!(set.fired(1));
}

#[test]
fn fired_reports_latched_state() {
    let mut set = RevealSet::new(2);
    assert!(!set.fired(0));
    let _ = set.trigger(0, 0);
    assert!(set.fired(0));
}
