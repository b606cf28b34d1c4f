//! Console input - the portable event stream over the native input queue.
//!
//! [`ConsoleEventSource`] turns opaque native console records into
//! [`InputEvent`]s. Events are ephemeral: produced per poll, never retained.
//! The only persistent state here is the injection stack, a LIFO of
//! synthetic events that strictly preempt the real queue - the
//! deterministic-testing contract.

pub mod backend;
#[cfg(windows)]
pub mod windows;

pub use backend::{ConsoleBackend, NativeConsole};

use crate::error::Result;

// =============================================================================
// Events
// =============================================================================

bitflags::bitflags! {
    /// Button-state bitmask carried by native mouse records.
    ///
    /// Unknown bits are retained: for wheel events the native API stores the
    /// signed wheel delta in the high 16 bits of this mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseButtons: u32 {
        const LEFT  = 0x0001;
        const RIGHT = 0x0002;
    }
}

impl MouseButtons {
    /// Signed wheel delta for wheel events (positive = away from the user).
    pub fn wheel_delta(self) -> i16 {
        (self.bits() >> 16) as i16
    }
}

bitflags::bitflags! {
    /// Event-flags bitmask carried by native mouse records.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseEventFlags: u32 {
        const MOVED   = 0x0001;
        const WHEELED = 0x0004;
    }
}

/// A translated input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard {
        /// Unicode character code, 0 for pure control keys.
        character: u32,
        /// Key-down rather than key-up.
        pressed: bool,
        virtual_key: u16,
        scan_code: u16,
    },
    Mouse {
        /// Cell column of the cursor.
        x: i16,
        /// Cell row of the cursor.
        y: i16,
        buttons: MouseButtons,
        flags: MouseEventFlags,
    },
}

impl InputEvent {
    /// Convenience constructor for a key-down of a character.
    pub fn key_press(ch: char) -> Self {
        InputEvent::Keyboard {
            character: ch as u32,
            pressed: true,
            virtual_key: 0,
            scan_code: 0,
        }
    }
}

// =============================================================================
// Event Source
// =============================================================================

/// Polls the native input queue through a [`ConsoleBackend`], with a LIFO
/// injection stack consulted first.
pub struct ConsoleEventSource<B: ConsoleBackend> {
    backend: B,
    injected: Vec<InputEvent>,
}

impl ConsoleEventSource<NativeConsole> {
    /// Open the native console. Fails with
    /// [`Error::UnsupportedPlatform`](crate::Error::UnsupportedPlatform) on
    /// platforms without a native console input API.
    pub fn native() -> Result<Self> {
        Self::new(NativeConsole::new()?)
    }
}

impl<B: ConsoleBackend> ConsoleEventSource<B> {
    /// Wrap a backend. Configures the console input mode exactly once,
    /// before the first poll.
    pub fn new(mut backend: B) -> Result<Self> {
        backend.configure_mode()?;
        Ok(Self {
            backend,
            injected: Vec::new(),
        })
    }

    /// Push a synthetic event. Injected events are returned by [`poll`]
    /// last-in-first-out, before any real queue event.
    ///
    /// [`poll`]: ConsoleEventSource::poll
    pub fn inject(&mut self, event: InputEvent) {
        self.injected.push(event);
    }

    /// Non-blocking poll: the top of the injection stack if any, otherwise
    /// at most one translated native record, otherwise `None`.
    ///
    /// A failed native read is indistinguishable from an empty queue.
    pub fn poll(&mut self) -> Option<InputEvent> {
        if let Some(event) = self.injected.pop() {
            return Some(event);
        }
        self.backend.poll()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

// =============================================================================
// Tests
// =============================================================================
