use super::*;
use crate::foundation::core::Canvas;
use crate::render::taskbar::LAUNCHER_ACTION;
use crate::shell::headless::{HeadlessHost, HostCall};

const UP: u8 = 0;
const DOWN: u8 = PRIMARY_BUTTON;

#[test]
fn press_then_release_inside_fires_once_on_release() {
    let mut tb = Taskbar::new(Canvas::SCREEN);
    let mut fsm = TaskbarInteraction::new();
    assert_eq!(tb.buttons()[0].rect, crate::foundation::geom::Rect::new(3, 459, 57, 21));

    let a = fsm.poll(&mut tb, PointerState::new(300, 100, UP));
    assert!(a.clicks.is_empty());
    assert!(!a.taskbar_dirty);

    let b = fsm.poll(&mut tb, PointerState::new(20, 465, DOWN));
    assert!(b.clicks.is_empty());
    assert!(b.taskbar_dirty);
    assert!(tb.buttons()[0].pressed);

    let c = fsm.poll(&mut tb, PointerState::new(20, 465, UP));
    assert_eq!(c.clicks.len(), 1);
    assert_eq!(c.clicks[0].hotspot, Hotspot::Button(0));
    assert_eq!(c.clicks[0].action, LAUNCHER_ACTION);
    assert!(c.taskbar_dirty);
    assert!(!tb.buttons()[0].pressed);

    let d = fsm.poll(&mut tb, PointerState::new(20, 465, UP));
    assert!(d.clicks.is_empty());
    assert!(!d.taskbar_dirty);
}

#[test]
fn holding_the_button_does_not_repeat() {
    let mut tb = Taskbar::new(Canvas::SCREEN);
    let mut fsm = TaskbarInteraction::new();
    for _ in 0..5 {
        let out = fsm.poll(&mut tb, PointerState::new(20, 465, DOWN));
        assert!(out.clicks.is_empty());
    }
    assert!(tb.buttons()[0].pressed);
}

#[test]
fn leaving_while_held_cancels_without_click() {
    let mut tb = Taskbar::new(Canvas::SCREEN);
    let mut fsm = TaskbarInteraction::new();
    fsm.poll(&mut tb, PointerState::new(20, 465, DOWN));

    let left = fsm.poll(&mut tb, PointerState::new(20, 300, DOWN));
    assert!(left.clicks.is_empty());
    assert!(left.taskbar_dirty);
    assert!(!tb.buttons()[0].pressed);

    let released = fsm.poll(&mut tb, PointerState::new(20, 300, UP));
    assert!(released.clicks.is_empty());
}

#[test]
fn volume_hotspot_clicks_with_well_known_action() {
    let mut tb = Taskbar::new(Canvas::SCREEN);
    let mut fsm = TaskbarInteraction::new();
    let v = tb.volume_rect();
    let (x, y) = (v.x + 2, v.y + 2);

    fsm.poll(&mut tb, PointerState::new(x, y, DOWN));
    assert!(tb.volume_pressed());
    let out = fsm.poll(&mut tb, PointerState::new(x, y, UP));
    assert_eq!(
        out.clicks.as_slice(),
        &[Click {
            hotspot: Hotspot::Volume,
            action: VOLUME_ACTION.to_string(),
        }]
    );
}

#[test]
fn step_table() {
    use HotspotState::{Idle, Pressed};
    assert_eq!(step(Idle, true, true, false), (Pressed, false));
    assert_eq!(step(Idle, false, true, false), (Idle, false));
    assert_eq!(step(Idle, true, false, true), (Idle, false));
    assert_eq!(step(Pressed, true, true, true), (Pressed, false));
    assert_eq!(step(Pressed, true, false, true), (Idle, true));
    assert_eq!(step(Pressed, false, false, true), (Idle, false));
}

#[test]
fn click_launches_when_not_running() {
    let mut host = HeadlessHost::new();
    let out = resolve_click(&mut host, "files");
    assert!(matches!(out, ClickOutcome::Launched(_)));
    assert_eq!(host.calls(), &[HostCall::Launch("files".to_string())]);
}

#[test]
fn click_restores_first_instance_with_a_window() {
    let mut host = HeadlessHost::new();
    let first = host.launch("files").unwrap();
    host.launch("files").unwrap();
    host.clear_calls();
    let out = resolve_click(&mut host, "files");
    assert_eq!(out, ClickOutcome::Restored(first.windows[0]));
    assert_eq!(host.calls(), &[HostCall::Restore(first.windows[0])]);
}

#[test]
fn running_without_windows_launches_again() {
    let mut host = HeadlessHost::new();
    host.launch_windowless("tray");
    host.launch("tray").unwrap();
    host.clear_calls();

    assert!(host.is_running("tray"));
    assert!(matches!(resolve_click(&mut host, "tray"), ClickOutcome::Launched(_)));
    assert_eq!(host.running_count(), 2);
}

#[test]
fn failed_launch_is_absorbed() {
    let mut host = HeadlessHost::new();
    host.fail_launches_of("broken");
    assert_eq!(resolve_click(&mut host, "broken"), ClickOutcome::LaunchFailed);
    assert_eq!(host.running_count(), 0);
}
