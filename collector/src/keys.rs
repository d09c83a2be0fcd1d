//! Keyboard state polling and key-name lookup.
//!
//! The collector never talks to the OS directly; it goes through two seams:
//!   - [`KeyStateSource`]: "was this key newly pressed since I last asked?"
//!   - [`KeyNameResolver`]: "what does the OS call this key?"
//!
//! On Windows these are backed by `GetAsyncKeyState` and `GetKeyNameTextW`.
//! On other platforms the types compile but never report a press.

/// A Windows virtual-key code.
pub type KeyCode = u8;

/// Lowest polled virtual-key code (`VK_LBUTTON`).
pub const FIRST_KEY_CODE: KeyCode = 1;
/// Highest polled virtual-key code.
pub const LAST_KEY_CODE: KeyCode = 249;

/// Edge-detected key state.
pub trait KeyStateSource {
    /// Returns `true` once per press of `code`. A held key must not report
    /// again until it has been released and pressed anew.
    fn take_press(&mut self, code: KeyCode) -> bool;
}

/// Maps a key code to the display name the OS uses for it.
pub trait KeyNameResolver {
    /// Returns `None` when the key has no printable name.
    fn display_name(&self, code: KeyCode) -> Option<String>;
}

/// Level-only key state ("is this key down right now?").
#[cfg(test)]
pub trait KeyLevelSource {
    fn is_down(&mut self, code: KeyCode) -> bool;
}

/// Turns a [`KeyLevelSource`] into a [`KeyStateSource`] by reporting only
/// idle→pressed transitions. Drives the collector tests, which model the
/// keyboard as held/released keys rather than `GetAsyncKeyState` bits.
#[cfg(test)]
pub struct EdgeDetector<L> {
    level: L,
    down: [bool; 256],
}

#[cfg(test)]
impl<L: KeyLevelSource> EdgeDetector<L> {
    pub fn new(level: L) -> Self {
        Self { level, down: [false; 256] }
    }

    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.level
    }
}

#[cfg(test)]
impl<L: KeyLevelSource> KeyStateSource for EdgeDetector<L> {
    fn take_press(&mut self, code: KeyCode) -> bool {
        let now = self.level.is_down(code);
        let was = std::mem::replace(&mut self.down[code as usize], now);
        now && !was
    }
}

// ── Platform types ────────────────────────────────────────────────────────────

/// System-wide key state via `GetAsyncKeyState`.
#[derive(Debug, Default)]
pub struct AsyncKeyState;

/// Key names via `MapVirtualKeyW` + `GetKeyNameTextW`.
#[derive(Debug, Default)]
pub struct ScanCodeNames;

/// `true` when this build can actually observe the keyboard.
pub const fn is_supported() -> bool {
    cfg!(windows)
}

impl KeyStateSource for AsyncKeyState {
    fn take_press(&mut self, code: KeyCode) -> bool {
        #[cfg(windows)]
        {
            imp::take_press(code)
        }
        #[cfg(not(windows))]
        {
            let _ = code;
            false
        }
    }
}

impl KeyNameResolver for ScanCodeNames {
    fn display_name(&self, code: KeyCode) -> Option<String> {
        #[cfg(windows)]
        {
            imp::display_name(code)
        }
        #[cfg(not(windows))]
        {
            let _ = code;
            None
        }
    }
}

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(windows)]
mod imp {
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        GetAsyncKeyState, GetKeyNameTextW, MapVirtualKeyW, MAPVK_VK_TO_VSC,
    };

    use super::KeyCode;

    /// `GetAsyncKeyState` result for "down now, and pressed since the last call"
    /// (high bit and low bit set).
    const PRESSED_SINCE_LAST_CALL: i16 = -32767;

    /// Longest name `GetKeyNameTextW` may write, in UTF-16 units.
    const NAME_BUFFER_LEN: usize = 1024;

    pub fn take_press(code: KeyCode) -> bool {
        unsafe { GetAsyncKeyState(code as i32) == PRESSED_SINCE_LAST_CALL }
    }

    pub fn display_name(code: KeyCode) -> Option<String> {
        let mut name = [0u16; NAME_BUFFER_LEN];
        let len = unsafe {
            let scan_code = MapVirtualKeyW(code as u32, MAPVK_VK_TO_VSC);
            // GetKeyNameTextW takes a WM_KEYDOWN-style lParam: scan code in bits 16–23.
            let l_param = (scan_code << 16) as i32;
            GetKeyNameTextW(l_param, &mut name)
        };
        if len <= 0 {
            return None;
        }
        let len = (len as usize).min(NAME_BUFFER_LEN);
        Some(String::from_utf16_lossy(&name[..len]))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
