use pong_core::Key;
use winit::keyboard::KeyCode;

/// Translate a physical key into one the match understands
pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Key::Num1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Key::Num2),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Key::Num3),
        KeyCode::KeyC => Some(Key::C),
        KeyCode::KeyV => Some(Key::V),
        KeyCode::F3 => Some(Key::F3),
        _ => None,
    }
}
