//! Keyboard/mouse polling into a per-frame `InputState`.
use raylib::prelude::*;

/// Actions held or triggered during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub sprint: bool,
    /// Edge-triggered: true only on the frame the button went down.
    pub fire: bool,
    pub restart: bool,
    /// Horizontal mouse motion in pixels, zero while the cursor is free.
    pub mouse_dx: f32,
}

/// Polls raylib once. A click while the cursor is free captures it instead of
/// firing; Escape releases it.
pub fn process_events(window: &mut RaylibHandle) -> InputState {
    let captured = window.is_cursor_hidden();
    let clicked = window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

    if window.is_key_pressed(KeyboardKey::KEY_ESCAPE) && captured {
        window.enable_cursor();
    } else if clicked && !captured {
        window.disable_cursor();
    }

    let down = |k: KeyboardKey| window.is_key_down(k);
    InputState {
        forward: down(KeyboardKey::KEY_W) || down(KeyboardKey::KEY_UP),
        back: down(KeyboardKey::KEY_S) || down(KeyboardKey::KEY_DOWN),
        strafe_left: down(KeyboardKey::KEY_A),
        strafe_right: down(KeyboardKey::KEY_D),
        turn_left: down(KeyboardKey::KEY_LEFT),
        turn_right: down(KeyboardKey::KEY_RIGHT),
        sprint: down(KeyboardKey::KEY_LEFT_SHIFT) || down(KeyboardKey::KEY_RIGHT_SHIFT),
        fire: clicked && captured,
        restart: window.is_key_pressed(KeyboardKey::KEY_SPACE),
        mouse_dx: if captured { window.get_mouse_delta().x } else { 0.0 },
    }
}
