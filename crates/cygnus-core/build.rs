use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// (constant, display name, basic keycode, aliases)
///
/// Codes follow the firmware's basic keycode space: HID keyboard usages up to
/// 0xA4, then the firmware's system/consumer codes, then the eight modifiers.
const KEYS: &[(&str, &str, u8, &[&str])] = &[
    ("NO", "NO", 0x00, &[]),
    ("A", "A", 0x04, &[]),
    ("B", "B", 0x05, &[]),
    ("C", "C", 0x06, &[]),
    ("D", "D", 0x07, &[]),
    ("E", "E", 0x08, &[]),
    ("F", "F", 0x09, &[]),
    ("G", "G", 0x0A, &[]),
    ("H", "H", 0x0B, &[]),
    ("I", "I", 0x0C, &[]),
    ("J", "J", 0x0D, &[]),
    ("K", "K", 0x0E, &[]),
    ("L", "L", 0x0F, &[]),
    ("M", "M", 0x10, &[]),
    ("N", "N", 0x11, &[]),
    ("O", "O", 0x12, &[]),
    ("P", "P", 0x13, &[]),
    ("Q", "Q", 0x14, &[]),
    ("R", "R", 0x15, &[]),
    ("S", "S", 0x16, &[]),
    ("T", "T", 0x17, &[]),
    ("U", "U", 0x18, &[]),
    ("V", "V", 0x19, &[]),
    ("W", "W", 0x1A, &[]),
    ("X", "X", 0x1B, &[]),
    ("Y", "Y", 0x1C, &[]),
    ("Z", "Z", 0x1D, &[]),
    ("N1", "1", 0x1E, &[]),
    ("N2", "2", 0x1F, &[]),
    ("N3", "3", 0x20, &[]),
    ("N4", "4", 0x21, &[]),
    ("N5", "5", 0x22, &[]),
    ("N6", "6", 0x23, &[]),
    ("N7", "7", 0x24, &[]),
    ("N8", "8", 0x25, &[]),
    ("N9", "9", 0x26, &[]),
    ("N0", "0", 0x27, &[]),
    ("ENTER", "ENTER", 0x28, &["ENT"]),
    ("ESCAPE", "ESCAPE", 0x29, &["ESC"]),
    ("BACKSPACE", "BACKSPACE", 0x2A, &["BSPC"]),
    ("TAB", "TAB", 0x2B, &[]),
    ("SPACE", "SPACE", 0x2C, &["SPC"]),
    ("MINUS", "MINUS", 0x2D, &["MINS"]),
    ("EQUAL", "EQUAL", 0x2E, &["EQL"]),
    ("LEFT_BRACKET", "LEFT_BRACKET", 0x2F, &["LBRC"]),
    ("RIGHT_BRACKET", "RIGHT_BRACKET", 0x30, &["RBRC"]),
    ("BACKSLASH", "BACKSLASH", 0x31, &["BSLS"]),
    ("SEMICOLON", "SEMICOLON", 0x33, &["SCLN"]),
    ("QUOTE", "QUOTE", 0x34, &["QUOT"]),
    ("GRAVE", "GRAVE", 0x35, &["GRV"]),
    ("COMMA", "COMMA", 0x36, &["COMM"]),
    ("DOT", "DOT", 0x37, &[]),
    ("SLASH", "SLASH", 0x38, &["SLSH"]),
    ("CAPS_LOCK", "CAPS_LOCK", 0x39, &["CAPS"]),
    ("F1", "F1", 0x3A, &[]),
    ("F2", "F2", 0x3B, &[]),
    ("F3", "F3", 0x3C, &[]),
    ("F4", "F4", 0x3D, &[]),
    ("F5", "F5", 0x3E, &[]),
    ("F6", "F6", 0x3F, &[]),
    ("F7", "F7", 0x40, &[]),
    ("F8", "F8", 0x41, &[]),
    ("F9", "F9", 0x42, &[]),
    ("F10", "F10", 0x43, &[]),
    ("F11", "F11", 0x44, &[]),
    ("F12", "F12", 0x45, &[]),
    ("PRINT_SCREEN", "PRINT_SCREEN", 0x46, &["PSCR"]),
    ("INSERT", "INSERT", 0x49, &["INS"]),
    ("HOME", "HOME", 0x4A, &[]),
    ("PAGE_UP", "PAGE_UP", 0x4B, &["PGUP"]),
    ("DELETE", "DELETE", 0x4C, &["DEL"]),
    ("END", "END", 0x4D, &[]),
    ("PAGE_DOWN", "PAGE_DOWN", 0x4E, &["PGDN"]),
    ("RIGHT", "RIGHT", 0x4F, &["RGHT"]),
    ("LEFT", "LEFT", 0x50, &[]),
    ("DOWN", "DOWN", 0x51, &[]),
    ("UP", "UP", 0x52, &[]),
    ("KB_POWER", "KB_POWER", 0x66, &["PWR"]),
    ("SYSTEM_POWER", "SYSTEM_POWER", 0xA5, &["PWR_SYS"]),
    ("SYSTEM_SLEEP", "SYSTEM_SLEEP", 0xA6, &["SLEP"]),
    ("AUDIO_MUTE", "AUDIO_MUTE", 0xA8, &["MUTE"]),
    ("AUDIO_VOL_UP", "AUDIO_VOL_UP", 0xA9, &["VOLU"]),
    ("AUDIO_VOL_DOWN", "AUDIO_VOL_DOWN", 0xAA, &["VOLD"]),
    ("MEDIA_NEXT_TRACK", "MEDIA_NEXT_TRACK", 0xAB, &["MNXT"]),
    ("MEDIA_PREV_TRACK", "MEDIA_PREV_TRACK", 0xAC, &["MPRV"]),
    ("MEDIA_STOP", "MEDIA_STOP", 0xAD, &["MSTP"]),
    ("MEDIA_PLAY_PAUSE", "MEDIA_PLAY_PAUSE", 0xAE, &["MPLY"]),
    ("BRIGHTNESS_UP", "BRIGHTNESS_UP", 0xBD, &["BRIU"]),
    ("BRIGHTNESS_DOWN", "BRIGHTNESS_DOWN", 0xBE, &["BRID"]),
    ("LEFT_CTRL", "LEFT_CTRL", 0xE0, &["LCTL"]),
    ("LEFT_SHIFT", "LEFT_SHIFT", 0xE1, &["LSFT"]),
    ("LEFT_ALT", "LEFT_ALT", 0xE2, &["LALT", "LOPT"]),
    ("LEFT_GUI", "LEFT_GUI", 0xE3, &["LGUI", "LCMD"]),
    ("RIGHT_CTRL", "RIGHT_CTRL", 0xE4, &["RCTL"]),
    ("RIGHT_SHIFT", "RIGHT_SHIFT", 0xE5, &["RSFT"]),
    ("RIGHT_ALT", "RIGHT_ALT", 0xE6, &["RALT", "ROPT"]),
    ("RIGHT_GUI", "RIGHT_GUI", 0xE7, &["RGUI", "RCMD"]),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("key_codes.rs");
    let mut f = File::create(&dest_path).unwrap();

    writeln!(
        f,
        r#"
/// A basic keycode as understood by the firmware's `tap_code`.
///
/// Newtype over the 8-bit basic keycode space; values match HID keyboard
/// usages for ordinary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(pub u8);

impl Key {{
    /// Get the raw numeric code value
    pub const fn code(self) -> u8 {{
        self.0
    }}

    /// Get the name of this key
    pub fn name(self) -> &'static str {{
        key_name(self.0)
    }}

    /// True for the eight modifier keys (0xE0..=0xE7)
    pub const fn is_modifier(self) -> bool {{
        self.0 >= 0xE0 && self.0 <= 0xE7
    }}
}}

impl From<u8> for Key {{
    fn from(code: u8) -> Self {{
        Key(code)
    }}
}}

impl From<Key> for u8 {{
    fn from(key: Key) -> Self {{
        key.0
    }}
}}

impl fmt::Display for Key {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{{}}", self.name())
    }}
}}

impl FromStr for Key {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        key_from_name(s).ok_or_else(|| format!("Unknown key: {{}}", s))
    }}
}}
"#
    )
    .unwrap();

    writeln!(f, "impl Key {{").unwrap();
    for (ident, _, code, _) in KEYS {
        writeln!(f, "    pub const {}: Key = Key(0x{:02X});", ident, code).unwrap();
    }
    writeln!(f, "}}\n").unwrap();

    writeln!(f, "/// Display name for a key code").unwrap();
    writeln!(f, "pub fn key_name(code: u8) -> &'static str {{").unwrap();
    writeln!(f, "    match code {{").unwrap();
    for (_, name, code, _) in KEYS {
        writeln!(f, "        0x{:02X} => \"{}\",", code, name).unwrap();
    }
    writeln!(f, "        _ => \"UNKNOWN\",").unwrap();
    writeln!(f, "    }}\n}}\n").unwrap();

    // (name, code) pairs; display names and aliases are both accepted
    writeln!(f, "static KEY_NAMES: &[(&str, u8)] = &[").unwrap();
    for (ident, name, code, aliases) in KEYS {
        writeln!(f, "    (\"{}\", 0x{:02X}),", name, code).unwrap();
        if ident != name {
            writeln!(f, "    (\"{}\", 0x{:02X}),", ident, code).unwrap();
        }
        for alias in aliases.iter() {
            writeln!(f, "    (\"{}\", 0x{:02X}),", alias, code).unwrap();
        }
    }
    writeln!(f, "];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
