use star_defender::input::KeyHold;

const WINDOW: u64 = 8;

#[test]
fn first_press_is_an_edge() {
    let mut keys = KeyHold::new(WINDOW);
    assert!(keys.press(' ', 1));
    assert!(keys.is_held(&' ', 1));
}

#[test]
fn autorepeat_delivered_as_presses_is_not_an_edge() {
    // Terminals without release events report a held key as a stream of
    // presses; only the first of them may fire.
    let mut keys = KeyHold::new(WINDOW);
    let edges = (1..=60u64).step_by(2).filter(|&f| keys.press(' ', f)).count();
    assert_eq!(edges, 1);
}

#[test]
fn press_after_release_is_an_edge() {
    let mut keys = KeyHold::new(WINDOW);
    assert!(keys.press(' ', 1));
    keys.release(&' ');
    assert!(!keys.is_held(&' ', 2));
    assert!(keys.press(' ', 2));
}

#[test]
fn press_after_hold_expires_is_an_edge() {
    let mut keys = KeyHold::new(WINDOW);
    assert!(keys.press(' ', 1));
    assert!(!keys.press(' ', 1 + WINDOW));
    assert!(!keys.is_held(&' ', 2 + 2 * WINDOW));
    assert!(keys.press(' ', 2 + 2 * WINDOW));
}

#[test]
fn repeat_keeps_a_key_held_without_an_edge() {
    let mut keys = KeyHold::new(WINDOW);
    assert!(keys.press('a', 1));
    keys.repeat('a', 9);
    keys.repeat('a', 17);
    assert!(keys.is_held(&'a', 20));
    assert!(!keys.press('a', 20));
}

#[test]
fn any_held_checks_every_binding() {
    let mut keys = KeyHold::new(WINDOW);
    keys.press('d', 5);
    assert!(keys.any_held(&['D', 'd'], 6));
    assert!(!keys.any_held(&['a', 'A'], 6));
    assert!(!keys.any_held(&['D', 'd'], 6 + WINDOW));
}
