/// Scancode set 1 lookup tables for a US keyboard.
///
/// Index = make code. Only codes up to `SC_MAX` have table entries; keys
/// with no printable meaning (Esc, Tab, Ctrl, Alt, the shift keys, ...)
/// map to a literal `?`.

/// Highest make code with a table entry (Spacebar).
pub const SC_MAX: u8 = 0x39;

const TABLE_LEN: usize = SC_MAX as usize + 1;

static KEY_NAMES: [&str; TABLE_LEN] = [
    "ERROR", "Esc", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=",
    "Backspace", "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]",
    "Enter", "Lctrl", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "`",
    "LShift", "\\", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "RShift",
    "Keypad *", "LAlt", "Spacebar",
];

static ASCII: [char; TABLE_LEN] = [
    '?', '?', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '=',
    '?', '?', 'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '[', ']',
    '?', '?', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\'', '`',
    '?', '\\', 'z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/', '?',
    '?', '?', ' ',
];

static ASCII_SHIFT: [char; TABLE_LEN] = [
    '?', '?', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+',
    '?', '?', 'Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', '{', '}',
    '?', '?', 'A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', ':', '"', '~',
    '?', '|', 'Z', 'X', 'C', 'V', 'B', 'N', 'M', '<', '>', '?', '?',
    '?', '?', ' ',
];

/// Character for a make code, or `None` past the end of the table.
pub fn lookup(code: u8, shifted: bool) -> Option<char> {
    let table = if shifted { &ASCII_SHIFT } else { &ASCII };
    table.get(code as usize).copied()
}

/// Human-readable key name, for diagnostics.
pub fn key_name(code: u8) -> &'static str {
    KEY_NAMES.get(code as usize).copied().unwrap_or("unknown")
}

/// Reverse lookup: the make code that types `c`, and whether shift must be
/// held. Non-printable positions are skipped, so `'?'` resolves to
/// shift + `/` rather than to Esc.
pub fn encode(c: char) -> Option<(u8, bool)> {
    for code in 0..TABLE_LEN {
        if ASCII[code] == '?' {
            continue;
        }
        if ASCII[code] == c {
            return Some((code as u8, false));
        }
        if ASCII_SHIFT[code] == c {
            return Some((code as u8, true));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_row_shifts_to_symbols() {
        assert_eq!(lookup(0x02, false), Some('1'));
        assert_eq!(lookup(0x02, true), Some('!'));
        assert_eq!(lookup(0x0B, true), Some(')'));
    }

    #[test]
    fn letters_follow_shift() {
        assert_eq!(lookup(0x23, false), Some('h'));
        assert_eq!(lookup(0x23, true), Some('H'));
    }

    #[test]
    fn control_keys_are_question_marks() {
        for code in [0x00, 0x01, 0x0F, 0x1D, 0x38] {
            assert_eq!(lookup(code, false), Some('?'), "code {:#x}", code);
        }
    }

    #[test]
    fn no_entry_past_spacebar() {
        assert_eq!(lookup(SC_MAX, false), Some(' '));
        assert_eq!(lookup(SC_MAX + 1, false), None);
    }

    #[test]
    fn encode_finds_shifted_question_mark() {
        assert_eq!(encode('?'), Some((0x35, true)));
        assert_eq!(encode('/'), Some((0x35, false)));
    }

    #[test]
    fn encode_inverts_lookup_for_printables() {
        for c in "abc.txt XYZ_{}|~".chars() {
            let (code, shifted) = encode(c).unwrap();
            assert_eq!(lookup(code, shifted), Some(c));
        }
        assert_eq!(encode('\t'), None);
        assert_eq!(encode('é'), None);
    }

    #[test]
    fn key_names_cover_table() {
        assert_eq!(key_name(0x2A), "LShift");
        assert_eq!(key_name(0x39), "Spacebar");
        assert_eq!(key_name(0x80), "unknown");
    }
}
