//! Tests for the stopwatch component.

use super::*;
use crate::key::{new_binding, with_help as key_help, with_keys_str};
use crate::Component;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn key(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::NONE,
    }
}

fn fire(sw: &mut Model, tick: &TickMsg, times: usize) {
    for _ in 0..times {
        sw.update(Box::new(tick.clone()));
    }
}

#[test]
fn test_new_is_idle_at_zero() {
    let sw = new();
    assert_eq!(sw.display(), "00:00:00");
    assert_eq!(sw.elapsed(), 0);
    assert_eq!(sw.state(), TimerState::Idle);
    assert!(sw.tick_handle().is_none());
    assert!(sw.mounted());
    assert!(!sw.focused());
}

#[test]
fn test_start_stop_reset_scenario() {
    let mut sw = new();
    assert!(sw.on_start_command().is_some());
    let tick = sw.tick_msg().unwrap();

    fire(&mut sw, &tick, 3);
    assert_eq!(sw.display(), "00:00:03");

    sw.on_stop_command();
    assert_eq!(sw.state(), TimerState::Stopped);
    fire(&mut sw, &tick, 2);
    assert_eq!(sw.display(), "00:00:03");
    assert_eq!(sw.elapsed(), 3);

    sw.on_reset_command();
    assert_eq!(sw.display(), "00:00:00");
    assert_eq!(sw.state(), TimerState::Idle);

    assert!(sw.on_start_command().is_some());
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 1);
    assert_eq!(sw.display(), "00:00:01");
}

#[test]
fn test_double_start_keeps_single_schedule() {
    let mut sw = new();
    assert!(sw.on_start_command().is_some());
    let handle = sw.tick_handle();
    assert!(sw.on_start_command().is_none());
    assert_eq!(sw.tick_handle(), handle);

    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 5);
    assert_eq!(sw.display(), "00:00:05");
}

#[test]
fn test_accepted_tick_schedules_next() {
    let mut sw = new();
    sw.on_start_command();
    let tick = sw.tick_msg().unwrap();
    assert!(sw.update(Box::new(tick.clone())).is_some());

    sw.on_stop_command();
    assert!(sw.update(Box::new(tick)).is_none());
}

#[test]
fn test_stop_when_idle_is_noop() {
    let mut sw = new();
    sw.on_stop_command();
    assert_eq!(sw.state(), TimerState::Idle);
    assert_eq!(sw.display(), "00:00:00");
}

#[test]
fn test_reset_when_idle_is_noop() {
    let mut sw = new();
    sw.on_reset_command();
    assert_eq!(sw.state(), TimerState::Idle);
    assert_eq!(sw.elapsed(), 0);
    assert_eq!(sw.display(), "00:00:00");
}

#[test]
fn test_stopped_start_resumes_from_elapsed() {
    let mut sw = new();
    sw.on_start_command();
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 61);
    sw.on_stop_command();

    sw.on_start_command();
    assert_eq!(sw.state(), TimerState::Running);
    let resumed = sw.tick_msg().unwrap();
    assert_ne!(resumed, tick);
    fire(&mut sw, &resumed, 1);
    assert_eq!(sw.display(), "00:01:02");

    // ticks from the first run stay cancelled
    fire(&mut sw, &tick, 3);
    assert_eq!(sw.elapsed(), 62);
}

#[test]
fn test_ticks_for_other_instance_are_ignored() {
    let mut a = new();
    let mut b = new();
    a.on_start_command();
    b.on_start_command();

    let b_tick = b.tick_msg().unwrap();
    fire(&mut a, &b_tick, 4);
    assert_eq!(a.elapsed(), 0);
    fire(&mut b, &b_tick, 4);
    assert_eq!(b.elapsed(), 4);
}

#[test]
fn test_toggle() {
    let mut sw = new();
    assert!(sw.on_toggle_command().is_some());
    assert!(sw.running());
    assert!(sw.on_toggle_command().is_none());
    assert_eq!(sw.state(), TimerState::Stopped);
}

#[test]
fn test_command_msg_routing() {
    let mut sw = new();
    let other = new();

    let foreign = CommandMsg {
        id: other.id(),
        command: Command::Start,
    };
    assert!(sw.update(Box::new(foreign)).is_none());
    assert_eq!(sw.state(), TimerState::Idle);

    let own = CommandMsg {
        id: sw.id(),
        command: Command::Start,
    };
    assert!(sw.update(Box::new(own)).is_some());
    assert!(sw.running());

    let broadcast = CommandMsg {
        id: 0,
        command: Command::Stop,
    };
    sw.update(Box::new(broadcast));
    assert_eq!(sw.state(), TimerState::Stopped);
}

#[test]
fn test_keys_require_focus() {
    let mut sw = new();
    assert!(sw.update(Box::new(key('s'))).is_none());
    assert_eq!(sw.state(), TimerState::Idle);

    sw.focus();
    assert!(sw.update(Box::new(key('s'))).is_some());
    assert!(sw.running());

    sw.update(Box::new(key('x')));
    assert_eq!(sw.state(), TimerState::Stopped);

    sw.update(Box::new(key(' ')));
    assert!(sw.running());
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 2);

    sw.update(Box::new(key('r')));
    assert_eq!(sw.state(), TimerState::Idle);
    assert_eq!(sw.display(), "00:00:00");

    sw.blur();
    sw.update(Box::new(key('s')));
    assert_eq!(sw.state(), TimerState::Idle);
}

#[test]
fn test_unknown_messages_are_ignored() {
    let mut sw = new();
    assert!(sw.update(Box::new("hello")).is_none());
    assert!(sw.update(Box::new(42_u32)).is_none());
    assert_eq!(sw.state(), TimerState::Idle);
}

#[test]
fn test_teardown_cancels_schedule() {
    let mut sw = new();
    sw.on_start_command();
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 2);

    sw.teardown();
    assert!(!sw.mounted());
    assert!(sw.tick_handle().is_none());
    assert!(!sw.running());

    fire(&mut sw, &tick, 2);
    assert_eq!(sw.elapsed(), 2);
    assert!(sw.on_start_command().is_none());
    sw.on_reset_command();
    assert_eq!(sw.display(), "00:00:02");

    // second teardown is harmless
    sw.teardown();
    assert!(!sw.mounted());
}

#[test]
fn test_try_new_with_options() {
    let sw = try_new(vec![
        with_labels("Старт", "Стоп", "Сброс"),
        with_help(false),
    ])
    .unwrap();
    let controls = sw.presentation().controls();
    assert_eq!(controls[0].label, "Старт");
    assert_eq!(controls[1].label, "Стоп");
    assert_eq!(controls[2].label, "Сброс");
    assert!(!sw.presentation().show_help);
}

#[test]
fn test_try_new_rejects_empty_label() {
    let err = try_new(vec![with_labels("Start", "", "Reset")]).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidLayout { .. }));
}

#[test]
fn test_try_new_rejects_conflicting_keys() {
    let mut key_map = default_key_map();
    key_map.reset = new_binding(vec![with_keys_str(&["s"]), key_help("s", "reset")]);

    let err = try_new(vec![with_key_map(key_map)]).unwrap_err();
    assert_eq!(
        err,
        crate::Error::ConflictingBinding {
            key: "s".to_string(),
            first: "start".to_string(),
            second: "reset".to_string(),
        }
    );
}

#[test]
fn test_disabled_binding_may_share_key() {
    let mut key_map = default_key_map();
    key_map.toggle = new_binding(vec![with_keys_str(&["s"])]);
    key_map.toggle.set_enabled(false);
    assert!(try_new(vec![with_key_map(key_map)]).is_ok());
}

#[test]
fn test_elapsed_duration() {
    let mut sw = new();
    sw.on_start_command();
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 90);
    assert_eq!(sw.elapsed_duration(), std::time::Duration::from_secs(90));
    assert_eq!(sw.display(), "00:01:30");
}

#[test]
fn test_view_tracks_display() {
    let mut sw = new();
    sw.on_start_command();
    let tick = sw.tick_msg().unwrap();
    fire(&mut sw, &tick, 3661);

    let view = String::from_utf8(strip_ansi_escapes::strip(sw.view())).unwrap();
    assert!(view.contains("01:01:01"));
}

#[test]
fn test_bubbletea_init_is_focused_and_idle() {
    use bubbletea_rs::Model as BubbleTeaModel;

    let (sw, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert!(sw.focused());
    assert_eq!(sw.state(), TimerState::Idle);
}

#[test]
fn test_uppercase_key_map_reaches_commands() {
    let mut key_map = default_key_map();
    key_map.start = new_binding(vec![with_keys_str(&["S"]), key_help("S", "start")]);
    let mut sw = try_new(vec![with_key_map(key_map)]).unwrap();
    sw.focus();

    let shifted = KeyMsg {
        key: KeyCode::Char('S'),
        modifiers: KeyModifiers::SHIFT,
    };
    assert!(sw.update(Box::new(shifted)).is_some());
    assert_eq!(sw.state(), TimerState::Running);
}

#[test]
fn test_default_keys_work_with_caps_lock() {
    let mut sw = new();
    sw.focus();

    let caps = |c: char| KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::SHIFT,
    };
    sw.update(Box::new(caps('S')));
    assert!(sw.running());
    sw.update(Box::new(caps('X')));
    assert_eq!(sw.state(), TimerState::Stopped);
    sw.update(Box::new(caps('R')));
    assert_eq!(sw.state(), TimerState::Idle);
}

#[test]
fn test_try_new_rejects_unparsable_key() {
    let mut key_map = default_key_map();
    key_map.start = new_binding(vec![with_keys_str(&["hyper+f5"]), key_help("f5", "start")]);

    let err = try_new(vec![with_key_map(key_map)]).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidLayout { .. }));
}

#[test]
fn test_try_new_rejects_command_without_keys() {
    let mut key_map = default_key_map();
    key_map.reset = new_binding(vec![key_help("r", "reset")]);
    assert!(try_new(vec![with_key_map(key_map)]).is_err());
}

#[test]
fn test_function_key_binding_is_accepted() {
    let mut key_map = default_key_map();
    key_map.start = new_binding(vec![with_keys_str(&["f5"]), key_help("f5", "start")]);
    let mut sw = try_new(vec![with_key_map(key_map)]).unwrap();
    sw.focus();

    let f5 = KeyMsg {
        key: KeyCode::F(5),
        modifiers: KeyModifiers::NONE,
    };
    assert!(sw.update(Box::new(f5)).is_some());
    assert_eq!(sw.presentation().control(Command::Start).unwrap().hint, "f5");
}

#[test]
fn test_controls_carry_key_hints() {
    let sw = new();
    let hints: Vec<&str> = sw
        .presentation()
        .controls()
        .iter()
        .map(|c| c.hint.as_str())
        .collect();
    assert_eq!(hints, ["s", "x", "r"]);

    let view = String::from_utf8(strip_ansi_escapes::strip(sw.view())).unwrap();
    assert!(view.contains("Start [s]"));
    assert!(view.contains("Stop [x]"));
}

#[test]
fn test_set_key_map_keeps_old_bindings_on_error() {
    let mut sw = new();
    let mut bad = default_key_map();
    bad.stop = new_binding(vec![with_keys_str(&["s"]), key_help("s", "stop")]);

    assert!(sw.set_key_map(bad).is_err());
    assert_eq!(sw.key_map().stop.help().key, "x");
    assert_eq!(sw.presentation().control(Command::Stop).unwrap().hint, "x");
}
