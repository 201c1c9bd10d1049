//! Keyboard input handling

use game_core::FrameInput;
use winit::keyboard::KeyCode;

/// What a key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Quit,
}

/// Physical key -> control. W/S by position, so non-QWERTY layouts still work.
pub fn map_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::KeyW => Some(Control::Up),
        KeyCode::KeyS => Some(Control::Down),
        KeyCode::Escape => Some(Control::Quit),
        _ => None,
    }
}

/// Level-triggered paddle keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    up: bool,
    down: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Up => self.up = pressed,
            Control::Down => self.down = pressed,
            Control::Quit => {}
        }
    }

    /// Forget held keys, e.g. when the window loses focus and key-up
    /// events would go elsewhere.
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
    }

    pub fn frame_input(&self) -> FrameInput {
        FrameInput::new(self.up, self.down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Control::Up));
        assert_eq!(map_key(KeyCode::KeyS), Some(Control::Down));
        assert_eq!(map_key(KeyCode::Escape), Some(Control::Quit));
        assert_eq!(map_key(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_held_keys_become_frame_input() {
        let mut keys = KeyboardState::new();
        assert_eq!(keys.frame_input(), FrameInput::default());

        keys.set(Control::Up, true);
        assert_eq!(keys.frame_input().dir(), -1);

        keys.set(Control::Down, true);
        assert_eq!(keys.frame_input(), FrameInput::new(true, true));

        keys.set(Control::Up, false);
        assert_eq!(keys.frame_input().dir(), 1);
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyboardState::new();
        keys.set(Control::Up, true);
        keys.set(Control::Down, true);
        keys.release_all();
        assert_eq!(keys.frame_input(), FrameInput::default());
    }

    #[test]
    fn test_quit_does_not_move_paddle() {
        let mut keys = KeyboardState::new();
        keys.set(Control::Quit, true);
        assert_eq!(keys.frame_input(), FrameInput::default());
    }
}
