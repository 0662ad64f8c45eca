use macroquad::prelude::*;

use crate::application::InputEvent;
use crate::ui::{BoardLayout, Button};

/// Map a left click to an input event.
///
/// While the completion summary is up, only the play-again button is live.
pub fn click_event(
    layout: &BoardLayout,
    restart: &Button,
    play_again: &Button,
    summary_visible: bool,
    mouse_pos: (f32, f32),
) -> Option<InputEvent> {
    if summary_visible {
        return play_again.is_hovered(mouse_pos).then_some(InputEvent::PlayAgain);
    }
    if restart.is_hovered(mouse_pos) {
        return Some(InputEvent::Restart);
    }
    layout.card_at(mouse_pos).map(InputEvent::SelectCard)
}

/// Map a pressed key to an input event
pub fn key_event(key: KeyCode, summary_visible: bool) -> Option<InputEvent> {
    match key {
        KeyCode::R => Some(InputEvent::Restart),
        KeyCode::Enter | KeyCode::Space if summary_visible => Some(InputEvent::PlayAgain),
        _ => None,
    }
}

/// Collect this frame's input events from mouse and keyboard
pub fn poll_events(
    layout: &BoardLayout,
    restart: &Button,
    play_again: &Button,
    summary_visible: bool,
    mouse_pos: (f32, f32),
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.extend(click_event(layout, restart, play_again, summary_visible, mouse_pos));
    }

    let keys = [KeyCode::R, KeyCode::Enter, KeyCode::Space];
    events.extend(
        keys.iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| key_event(key, summary_visible)),
    );

    events
}
