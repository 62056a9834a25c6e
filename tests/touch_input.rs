use egui::{Event, Modifiers, PointerButton, Pos2, Rect, TouchDeviceId, TouchId, TouchPhase, pos2};
use europe_map::input::{POINTER_TOUCH_ID, TouchEventKind, TouchInputHandler};
use europe_map::{GestureState, MapView, Region, RegionMap};

fn surface() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 400.0))
}

fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(id),
        phase,
        pos: pos2(x, y),
        force: None,
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn test_touch_lifecycle_produces_ordered_snapshots() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(1, TouchPhase::Start, 10.0, 10.0),
        touch(2, TouchPhase::Start, 50.0, 10.0),
        touch(2, TouchPhase::Move, 60.0, 10.0),
        touch(1, TouchPhase::End, 10.0, 10.0),
        touch(2, TouchPhase::End, 60.0, 10.0),
    ];
    let snapshots = handler.process_events(&events, surface());

    let kinds: Vec<_> = snapshots.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TouchEventKind::Start,
            TouchEventKind::Start,
            TouchEventKind::Move,
            TouchEventKind::End,
            TouchEventKind::End,
        ]
    );
    let counts: Vec<_> = snapshots.iter().map(|s| s.touch_count()).collect();
    assert_eq!(counts, vec![1, 2, 2, 1, 0]);

    // After finger 1 lifts, finger 2 is first
    assert_eq!(snapshots[3].touches.first().unwrap().id, 2);
    assert_eq!(handler.active_touch_count(), 0);
}

#[test]
fn test_touch_starting_outside_surface_is_ignored() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(1, TouchPhase::Start, 500.0, 10.0),
        touch(1, TouchPhase::Move, 100.0, 10.0),
        touch(1, TouchPhase::End, 100.0, 10.0),
    ];
    assert!(handler.process_events(&events, surface()).is_empty());
}

#[test]
fn test_stationary_move_is_dropped() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(1, TouchPhase::Start, 10.0, 10.0),
        touch(1, TouchPhase::Move, 10.0, 10.0),
    ];
    assert_eq!(handler.process_events(&events, surface()).len(), 1);
}

#[test]
fn test_cancel_is_forwarded() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(1, TouchPhase::Start, 10.0, 10.0),
        touch(1, TouchPhase::Cancel, 10.0, 10.0),
    ];
    let snapshots = handler.process_events(&events, surface());
    assert_eq!(snapshots[1].kind, TouchEventKind::Cancel);
    assert_eq!(handler.active_touch_count(), 0);
}

#[test]
fn test_pointer_stands_in_for_a_finger() {
    let mut handler = TouchInputHandler::new();
    let events = [
        Event::PointerMoved(pos2(20.0, 20.0)),
        button(pos2(20.0, 20.0), true),
        Event::PointerMoved(pos2(40.0, 20.0)),
        button(pos2(40.0, 20.0), false),
    ];
    let snapshots = handler.process_events(&events, surface());

    let kinds: Vec<_> = snapshots.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![TouchEventKind::Start, TouchEventKind::Move, TouchEventKind::End]
    );
    assert_eq!(snapshots[0].touches.first().unwrap().id, POINTER_TOUCH_ID);
    assert_eq!(snapshots[1].touches.first().unwrap().pos, pos2(40.0, 20.0));
    assert_eq!(snapshots[2].touch_count(), 0);
}

#[test]
fn test_pointer_leaving_cancels() {
    let mut handler = TouchInputHandler::new();
    let events = [button(pos2(20.0, 20.0), true), Event::PointerGone];
    let snapshots = handler.process_events(&events, surface());
    assert_eq!(snapshots.last().unwrap().kind, TouchEventKind::Cancel);
}

#[test]
fn test_emulated_pointer_is_ignored_alongside_touches() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(7, TouchPhase::Start, 30.0, 30.0),
        button(pos2(30.0, 30.0), true),
        Event::PointerMoved(pos2(35.0, 30.0)),
    ];
    let snapshots = handler.process_events(&events, surface());
    assert_eq!(snapshots.len(), 1);

    // Next frame carries only pointer emulation while the finger is still down
    let snapshots = handler.process_events(&[Event::PointerMoved(pos2(50.0, 30.0))], surface());
    assert!(snapshots.is_empty());
}

#[test]
fn test_lift_away_from_last_move_reports_final_position() {
    let mut handler = TouchInputHandler::new();
    let events = [
        touch(1, TouchPhase::Start, 10.0, 10.0),
        touch(1, TouchPhase::End, 30.0, 10.0),
    ];
    let snapshots = handler.process_events(&events, surface());

    let kinds: Vec<_> = snapshots.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![TouchEventKind::Start, TouchEventKind::Move, TouchEventKind::End]
    );
    assert_eq!(snapshots[1].touches.first().unwrap().pos, pos2(30.0, 10.0));
    assert_eq!(snapshots[2].touch_count(), 0);
}

#[test]
fn test_lift_away_from_touch_down_drags_instead_of_tapping() {
    let map = RegionMap::new(
        egui::vec2(400.0, 400.0),
        vec![Region::new(
            "de",
            "Germany",
            vec![pos2(0.0, 0.0), pos2(400.0, 0.0), pos2(400.0, 400.0), pos2(0.0, 400.0)],
        )],
    );
    let mut handler = TouchInputHandler::new();
    let mut view = MapView::default();
    let events = [
        touch(1, TouchPhase::Start, 10.0, 10.0),
        touch(1, TouchPhase::End, 30.0, 10.0),
    ];

    let mut selected = Vec::new();
    for snapshot in handler.process_events(&events, surface()) {
        view.handle_touch(&snapshot, Pos2::ZERO, &map, |name, _| selected.push(name.to_owned()));
    }
    assert!(selected.is_empty());
    assert_eq!(view.current_transform().pan, egui::vec2(20.0, 0.0));
}

#[test]
fn test_cancelled_second_finger_does_not_leak_a_tap() {
    let map = RegionMap::new(
        egui::vec2(400.0, 400.0),
        vec![Region::new(
            "pl",
            "Poland",
            vec![pos2(0.0, 0.0), pos2(400.0, 0.0), pos2(400.0, 400.0), pos2(0.0, 400.0)],
        )],
    );
    let mut handler = TouchInputHandler::new();
    let mut view = MapView::default();
    let events = [
        touch(1, TouchPhase::Start, 100.0, 100.0),
        touch(2, TouchPhase::Start, 200.0, 100.0),
        touch(2, TouchPhase::Move, 220.0, 100.0),
        touch(2, TouchPhase::Cancel, 220.0, 100.0),
        touch(1, TouchPhase::Move, 100.5, 100.0),
        touch(1, TouchPhase::End, 100.5, 100.0),
    ];

    let mut selected = Vec::new();
    let mut states = Vec::new();
    for snapshot in handler.process_events(&events, surface()) {
        view.handle_touch(&snapshot, Pos2::ZERO, &map, |name, _| selected.push(name.to_owned()));
        states.push(*view.gesture_state());
    }

    assert!(selected.is_empty());
    assert_eq!(states[3], GestureState::Suspended);
    assert_eq!(states[4], GestureState::Suspended);
    assert!(view.gesture_state().is_idle());
    assert_eq!(handler.active_touch_count(), 0);
}

#[test]
fn test_pointer_release_away_from_last_move_reports_final_position() {
    let mut handler = TouchInputHandler::new();
    let events = [button(pos2(20.0, 20.0), true), button(pos2(45.0, 20.0), false)];
    let snapshots = handler.process_events(&events, surface());

    let kinds: Vec<_> = snapshots.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![TouchEventKind::Start, TouchEventKind::Move, TouchEventKind::End]
    );
    assert_eq!(snapshots[1].touches.first().unwrap().pos, pos2(45.0, 20.0));
    assert_eq!(handler.active_touch_count(), 0);
}
