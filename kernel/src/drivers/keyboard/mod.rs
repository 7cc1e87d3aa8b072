/// PS/2 keyboard decoding.
///
/// Turns one raw scancode into a `Key` event. Decoding is pure; the
/// port read lives with the interrupt handler on bare metal.
pub mod scancode;

pub const BACKSPACE: u8 = 0x0E;
pub const ENTER: u8 = 0x1C;
pub const LSHIFT: u8 = 0x2A;
pub const RSHIFT: u8 = 0x36;
pub const LSHIFT_RELEASE: u8 = 0xAA;
pub const RSHIFT_RELEASE: u8 = 0xB6;

/// What a single scancode means to the line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ShiftPress,
    ShiftRelease,
    Backspace,
    Enter,
    /// Release codes and anything else outside the table.
    Ignored,
}

/// Decode a scancode given the current shift state.
pub fn decode(code: u8, shifted: bool) -> Key {
    match code {
        LSHIFT | RSHIFT => Key::ShiftPress,
        LSHIFT_RELEASE | RSHIFT_RELEASE => Key::ShiftRelease,
        BACKSPACE => Key::Backspace,
        ENTER => Key::Enter,
        _ => match scancode::lookup(code, shifted) {
            Some(c) => Key::Char(c),
            None => Key::Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_codes() {
        assert_eq!(decode(LSHIFT, false), Key::ShiftPress);
        assert_eq!(decode(RSHIFT, true), Key::ShiftPress);
        assert_eq!(decode(LSHIFT_RELEASE, true), Key::ShiftRelease);
        assert_eq!(decode(RSHIFT_RELEASE, false), Key::ShiftRelease);
    }

    #[test]
    fn editing_codes() {
        assert_eq!(decode(BACKSPACE, false), Key::Backspace);
        assert_eq!(decode(ENTER, true), Key::Enter);
    }

    #[test]
    fn releases_and_extended_codes_are_ignored() {
        // 'a' release, Enter release, extended prefix
        for code in [0x9E, 0x9C, 0xE0, 0x3A] {
            assert_eq!(decode(code, false), Key::Ignored, "code {:#x}", code);
        }
    }

    #[test]
    fn printable_follows_shift_state() {
        assert_eq!(decode(0x02, false), Key::Char('1'));
        assert_eq!(decode(0x02, true), Key::Char('!'));
        assert_eq!(decode(0x39, true), Key::Char(' '));
    }
}
