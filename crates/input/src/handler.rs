//! Held-key tracker for terminal environments.
//!
//! The game polls key *state* every frame, but terminals deliver key *events*.
//! Press and repeat events mark a key held; a release event clears it. Terminals
//! that never send releases are covered by a timeout refreshed by auto-repeat.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, Control};
use crate::types::{FrameInput, KeyStates};

// A single tap without a release event must not turn into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Discrete presses buffered between frames, at most one per control.
pub const MAX_PENDING_PRESSES: usize = 4;

const HELD_SLOTS: usize = 4;

fn held_slot(control: Control) -> Option<usize> {
    match control {
        Control::Left => Some(0),
        Control::Right => Some(1),
        Control::Up => Some(2),
        Control::Jump => Some(3),
        Control::Replay => None,
    }
}

/// Tracks input state between frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press/repeat time for each held control
    held: [Option<Instant>; HELD_SLOTS],
    presses: ArrayVec<Control, MAX_PENDING_PRESSES>,
    click: Option<(i32, i32)>,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [None; HELD_SLOTS],
            presses: ArrayVec::new(),
            click: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed a terminal key event; returns the control it maps to, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Control> {
        let control = handle_key_event(key)?;
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(control),
            KeyEventKind::Repeat => self.refresh(control),
            KeyEventKind::Release => self.handle_key_release(control),
        }
        Some(control)
    }

    pub fn handle_key_press(&mut self, control: Control) {
        if held_slot(control).is_some() {
            self.refresh(control);
        } else if !self.presses.contains(&control) {
            // Only discrete controls queue, once each, so the buffer cannot fill.
            let _ = self.presses.try_push(control);
        }
    }

    pub fn handle_key_release(&mut self, control: Control) {
        if let Some(slot) = held_slot(control) {
            self.held[slot] = None;
        }
    }

    /// Record a primary-button click in screen pixels. The latest click wins.
    pub fn handle_click(&mut self, position: (i32, i32)) {
        self.click = Some(position);
    }

    /// Feed a key event while a modal screen waits; true for a deliberate press.
    ///
    /// Terminals without release events report auto-repeat as presses. A press
    /// of a movement key seen again within `repeat_gap` comes from a key still
    /// held down and only refreshes the hold.
    pub fn is_new_press(&mut self, key: KeyEvent, repeat_gap: Duration) -> bool {
        if key.kind != KeyEventKind::Press {
            self.handle_key_event(key);
            return false;
        }
        match handle_key_event(key).and_then(held_slot) {
            Some(slot) => {
                let repeat = self.held[slot].is_some_and(|at| at.elapsed() <= repeat_gap);
                self.held[slot] = Some(Instant::now());
                !repeat
            }
            None => true,
        }
    }

    fn refresh(&mut self, control: Control) {
        if let Some(slot) = held_slot(control) {
            self.held[slot] = Some(Instant::now());
        }
    }

    fn is_held(&self, slot: usize) -> bool {
        self.held[slot].is_some()
    }

    /// Sample the held keys and take the pending click for one frame.
    pub fn sample(&mut self) -> FrameInput {
        // Auto-release when terminal does not emit release events.
        let timeout = Duration::from_millis(u64::from(self.key_release_timeout_ms));
        for held in self.held.iter_mut() {
            if held.is_some_and(|at| at.elapsed() > timeout) {
                *held = None;
            }
        }

        FrameInput {
            keys: KeyStates {
                left: self.is_held(0),
                right: self.is_held(1),
                up: self.is_held(2),
                space: self.is_held(3),
            },
            click: self.click.take(),
        }
    }

    /// Take the discrete presses seen since the last call, in arrival order.
    pub fn take_presses(&mut self) -> ArrayVec<Control, MAX_PENDING_PRESSES> {
        std::mem::take(&mut self.presses)
    }

    pub fn reset(&mut self) {
        self.held = [None; HELD_SLOTS];
        self.presses.clear();
        self.click = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
