use hc_core::hotkey::KeyCode;
use rdev::Key;

/// Maps an rdev key to the virtual key code used by chords.
///
/// Keys without a counterpart on the ANSI layout (keypad, print screen, …)
/// map to `None` and are dropped by the key source.
pub fn key_code_from_rdev(key: Key) -> Option<KeyCode> {
    let code = match key {
        Key::KeyA => KeyCode::A,
        Key::KeyB => KeyCode::B,
        Key::KeyC => KeyCode::C,
        Key::KeyD => KeyCode::D,
        Key::KeyE => KeyCode::E,
        Key::KeyF => KeyCode::F,
        Key::KeyG => KeyCode::G,
        Key::KeyH => KeyCode::H,
        Key::KeyI => KeyCode::I,
        Key::KeyJ => KeyCode::J,
        Key::KeyK => KeyCode::K,
        Key::KeyL => KeyCode::L,
        Key::KeyM => KeyCode::M,
        Key::KeyN => KeyCode::N,
        Key::KeyO => KeyCode::O,
        Key::KeyP => KeyCode::P,
        Key::KeyQ => KeyCode::Q,
        Key::KeyR => KeyCode::R,
        Key::KeyS => KeyCode::S,
        Key::KeyT => KeyCode::T,
        Key::KeyU => KeyCode::U,
        Key::KeyV => KeyCode::V,
        Key::KeyW => KeyCode::W,
        Key::KeyX => KeyCode::X,
        Key::KeyY => KeyCode::Y,
        Key::KeyZ => KeyCode::Z,
        Key::Num0 => KeyCode::DIGIT_0,
        Key::Num1 => KeyCode::DIGIT_1,
        Key::Num2 => KeyCode::DIGIT_2,
        Key::Num3 => KeyCode::DIGIT_3,
        Key::Num4 => KeyCode::DIGIT_4,
        Key::Num5 => KeyCode::DIGIT_5,
        Key::Num6 => KeyCode::DIGIT_6,
        Key::Num7 => KeyCode::DIGIT_7,
        Key::Num8 => KeyCode::DIGIT_8,
        Key::Num9 => KeyCode::DIGIT_9,
        Key::Equal => KeyCode::EQUAL,
        Key::Minus => KeyCode::MINUS,
        Key::LeftBracket => KeyCode::LEFT_BRACKET,
        Key::RightBracket => KeyCode::RIGHT_BRACKET,
        Key::Quote => KeyCode::QUOTE,
        Key::SemiColon => KeyCode::SEMICOLON,
        Key::BackSlash | Key::IntlBackslash => KeyCode::BACKSLASH,
        Key::Comma => KeyCode::COMMA,
        Key::Slash => KeyCode::SLASH,
        Key::Dot => KeyCode::PERIOD,
        Key::BackQuote => KeyCode::GRAVE,
        Key::Return => KeyCode::RETURN,
        Key::Tab => KeyCode::TAB,
        Key::Space => KeyCode::SPACE,
        Key::Backspace => KeyCode::DELETE,
        Key::Delete => KeyCode::FORWARD_DELETE,
        Key::Escape => KeyCode::ESCAPE,
        Key::Home => KeyCode::HOME,
        Key::End => KeyCode::END,
        Key::PageUp => KeyCode::PAGE_UP,
        Key::PageDown => KeyCode::PAGE_DOWN,
        Key::LeftArrow => KeyCode::LEFT_ARROW,
        Key::RightArrow => KeyCode::RIGHT_ARROW,
        Key::UpArrow => KeyCode::UP_ARROW,
        Key::DownArrow => KeyCode::DOWN_ARROW,
        Key::F1 => KeyCode::F1,
        Key::F2 => KeyCode::F2,
        Key::F3 => KeyCode::F3,
        Key::F4 => KeyCode::F4,
        Key::F5 => KeyCode::F5,
        Key::F6 => KeyCode::F6,
        Key::F7 => KeyCode::F7,
        Key::F8 => KeyCode::F8,
        Key::F9 => KeyCode::F9,
        Key::F10 => KeyCode::F10,
        Key::F11 => KeyCode::F11,
        Key::F12 => KeyCode::F12,
        Key::MetaLeft => KeyCode::COMMAND,
        Key::MetaRight => KeyCode::RIGHT_COMMAND,
        Key::ShiftLeft => KeyCode::SHIFT,
        Key::ShiftRight => KeyCode::RIGHT_SHIFT,
        Key::ControlLeft => KeyCode::CONTROL,
        Key::ControlRight => KeyCode::RIGHT_CONTROL,
        Key::Alt => KeyCode::OPTION,
        Key::AltGr => KeyCode::RIGHT_OPTION,
        Key::CapsLock => KeyCode::CAPS_LOCK,
        Key::Function => KeyCode::FUNCTION,
        _ => return None,
    };
    Some(code)
}
