//! Note on/off tracking for keyboard-style controls.
//!
//! Each pointer (mouse, pen, touch contact) holds at most one note. Sliding
//! a held pointer onto another key releases the old note and starts the new
//! one (glissando). Several pointers may hold notes at once, including the
//! same note.
//!
//! Hit-testing is the caller's job: every event carries the note under the
//! pointer, or `None` when the pointer is over no key.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{NoteNumber, PointerId};

/// Highest valid MIDI note number.
pub const MAX_NOTE: NoteNumber = 127;

/// Callback receiving a note number.
pub type NoteCallback = Box<dyn FnMut(NoteNumber)>;

/// Callbacks and flags for a [`NoteInteractionController`].
#[derive(Default)]
pub struct NoteControllerConfig {
    pub on_note_on: Option<NoteCallback>,
    pub on_note_off: Option<NoteCallback>,
    pub disabled: bool,
}

impl NoteControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_note_on(mut self, callback: impl FnMut(NoteNumber) + 'static) -> Self {
        self.on_note_on = Some(Box::new(callback));
        self
    }

    pub fn with_on_note_off(mut self, callback: impl FnMut(NoteNumber) + 'static) -> Self {
        self.on_note_off = Some(Box::new(callback));
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for NoteControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteControllerConfig")
            .field("on_note_on", &self.on_note_on.is_some())
            .field("on_note_off", &self.on_note_off.is_some())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Multi-pointer note tracker.
///
/// Held notes are released when the controller is dropped.
pub struct NoteInteractionController {
    config: NoteControllerConfig,
    held: BTreeMap<PointerId, NoteNumber>,
}

impl NoteInteractionController {
    pub fn new(config: NoteControllerConfig) -> Self {
        Self {
            config,
            held: BTreeMap::new(),
        }
    }

    /// Swap callbacks and flags. Held notes are kept; later note-offs go to
    /// the new callback.
    pub fn update_config(&mut self, config: NoteControllerConfig) {
        self.config = config;
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Press over `note`. A pointer that is already holding a note releases
    /// it first.
    pub fn handle_pointer_down(&mut self, pointer_id: PointerId, note: Option<NoteNumber>) {
        if self.config.disabled {
            return;
        }
        let Some(note) = note.filter(|n| *n <= MAX_NOTE) else {
            return;
        };
        if let Some(previous) = self.held.remove(&pointer_id) {
            self.note_off(previous);
        }
        self.held.insert(pointer_id, note);
        self.note_on(note);
    }

    /// Pointer moved; `note` is what is under it now.
    ///
    /// Moving onto a different key glides to it. Moving off every key keeps
    /// the current note sounding.
    pub fn handle_pointer_move(&mut self, pointer_id: PointerId, note: Option<NoteNumber>) {
        let Some(new_note) = note.filter(|n| *n <= MAX_NOTE) else {
            return;
        };
        let Some(held) = self.held.get_mut(&pointer_id) else {
            return;
        };
        if *held == new_note {
            return;
        }
        let previous = std::mem::replace(held, new_note);
        self.note_off(previous);
        self.note_on(new_note);
    }

    /// Pointer released.
    pub fn handle_pointer_up(&mut self, pointer_id: PointerId) {
        if let Some(note) = self.held.remove(&pointer_id) {
            self.note_off(note);
        }
    }

    /// Pointer stolen by the platform (touch cancel, lost capture).
    pub fn handle_pointer_cancel(&mut self, pointer_id: PointerId) {
        self.handle_pointer_up(pointer_id);
    }

    /// Release every held note, one note-off per pointer.
    pub fn cancel_all(&mut self) {
        if self.held.is_empty() {
            return;
        }
        log::debug!("Releasing {} held note(s)", self.held.len());
        for (_, note) in std::mem::take(&mut self.held) {
            self.note_off(note);
        }
    }

    /// Sounding notes, ascending, each listed once.
    pub fn active_notes(&self) -> Vec<NoteNumber> {
        let mut notes: Vec<NoteNumber> = self.held.values().copied().collect();
        notes.sort_unstable();
        notes.dedup();
        notes
    }

    pub fn is_note_active(&self, note: NoteNumber) -> bool {
        self.held.values().any(|n| *n == note)
    }

    pub fn held_pointer_count(&self) -> usize {
        self.held.len()
    }

    fn note_on(&mut self, note: NoteNumber) {
        log::trace!("note on {}", note);
        if let Some(callback) = self.config.on_note_on.as_mut() {
            callback(note);
        }
    }

    fn note_off(&mut self, note: NoteNumber) {
        log::trace!("note off {}", note);
        if let Some(callback) = self.config.on_note_off.as_mut() {
            callback(note);
        }
    }
}

impl Default for NoteInteractionController {
    fn default() -> Self {
        Self::new(NoteControllerConfig::default())
    }
}

impl fmt::Debug for NoteInteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteInteractionController")
            .field("config", &self.config)
            .field("held", &self.held)
            .finish()
    }
}

impl Drop for NoteInteractionController {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
