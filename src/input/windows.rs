//! Windows console backend.
//!
//! The only module that touches raw native memory layout: the input queue's
//! `INPUT_RECORD` union is decoded here by [`translate`] and nowhere else.
//! Every native call either succeeds or is indistinguishable from "nothing
//! happened" - no retries, no surfaced poll errors.

use std::io;
use std::mem;

use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    CONSOLE_CURSOR_INFO, CONSOLE_SCREEN_BUFFER_INFO, ENABLE_EXTENDED_FLAGS, ENABLE_MOUSE_INPUT,
    ENABLE_WINDOW_INPUT, GetConsoleCursorInfo, GetConsoleScreenBufferInfo, GetStdHandle,
    INPUT_RECORD, KEY_EVENT, MOUSE_EVENT, PeekConsoleInputW, ReadConsoleInputW, STD_INPUT_HANDLE,
    STD_OUTPUT_HANDLE, SetConsoleCursorInfo, SetConsoleMode, SetConsoleTitleW,
};

use crate::error::Result;

use super::backend::ConsoleBackend;
use super::{InputEvent, MouseButtons, MouseEventFlags};

/// The one concrete console backend: the Windows console API family.
pub struct NativeConsole {
    input: HANDLE,
    output: HANDLE,
}

impl NativeConsole {
    /// Grab the process-wide standard console handles.
    pub fn new() -> Result<Self> {
        let input = unsafe { GetStdHandle(STD_INPUT_HANDLE) };
        let output = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        if input.is_null()
            || input == INVALID_HANDLE_VALUE
            || output.is_null()
            || output == INVALID_HANDLE_VALUE
        {
            return Err(io::Error::last_os_error().into());
        }
        Ok(Self { input, output })
    }
}

impl ConsoleBackend for NativeConsole {
    fn configure_mode(&mut self) -> Result<()> {
        let mode = ENABLE_EXTENDED_FLAGS | ENABLE_MOUSE_INPUT | ENABLE_WINDOW_INPUT;
        if unsafe { SetConsoleMode(self.input, mode) } == 0 {
            return Err(io::Error::last_os_error().into());
        }
        Ok(())
    }

    fn poll(&mut self) -> Option<InputEvent> {
        let mut record: INPUT_RECORD = unsafe { mem::zeroed() };
        let mut count: u32 = 0;

        let ok = unsafe { PeekConsoleInputW(self.input, &mut record, 1, &mut count) };
        if ok == 0 || count == 0 {
            return None;
        }

        // Consume exactly the record we peeked.
        let ok = unsafe { ReadConsoleInputW(self.input, &mut record, 1, &mut count) };
        if ok == 0 || count == 0 {
            return None;
        }

        translate(&record)
    }

    fn set_title(&mut self, title: &str) {
        let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe { SetConsoleTitleW(wide.as_ptr()) };
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        let mut info: CONSOLE_CURSOR_INFO = unsafe { mem::zeroed() };
        if unsafe { GetConsoleCursorInfo(self.output, &mut info) } == 0 {
            return;
        }
        info.bVisible = visible as i32;
        unsafe { SetConsoleCursorInfo(self.output, &info) };
    }

    fn size(&self) -> (u16, u16) {
        let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { mem::zeroed() };
        if unsafe { GetConsoleScreenBufferInfo(self.output, &mut info) } == 0 {
            return (0, 0);
        }
        let columns = (info.srWindow.Right - info.srWindow.Left + 1) as u16;
        let rows = (info.srWindow.Bottom - info.srWindow.Top + 1) as u16;
        (columns, rows)
    }
}

/// Decode one native record into a portable event.
///
/// Keyboard and mouse payloads are copied field-for-field; any other record
/// kind (window resize, focus, menu) is dropped without an event.
fn translate(record: &INPUT_RECORD) -> Option<InputEvent> {
    let kind = record.EventType as u32;
    if kind == KEY_EVENT as u32 {
        let key = unsafe { record.Event.KeyEvent };
        Some(InputEvent::Keyboard {
            character: unsafe { key.uChar.UnicodeChar } as u32,
            pressed: key.bKeyDown != 0,
            virtual_key: key.wVirtualKeyCode,
            scan_code: key.wVirtualScanCode,
        })
    } else if kind == MOUSE_EVENT as u32 {
        let mouse = unsafe { record.Event.MouseEvent };
        Some(InputEvent::Mouse {
            x: mouse.dwMousePosition.X,
            y: mouse.dwMousePosition.Y,
            buttons: MouseButtons::from_bits_retain(mouse.dwButtonState),
            flags: MouseEventFlags::from_bits_retain(mouse.dwEventFlags),
        })
    } else {
        log::debug!("dropping native record kind {kind}");
        None
    }
}
