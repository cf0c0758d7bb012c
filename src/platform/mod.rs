//! Platform layer
//!
//! Terminal frontend pieces that sit between crossterm and the simulation:
//! - Keyboard state (held keys, confirm edges, quit requests)
//! - A drawing backend that rasterizes frames into terminal cells

pub mod terminal;

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Controls;

/// Turns a stream of key events into per-frame `Controls`
///
/// Every press or repeat stamps the key with the current frame number. A key
/// counts as held while its stamp is within `hold_window` frames, which keeps
/// keys alive on terminals that only report presses (OS key repeat refreshes
/// the stamp). On terminals that report releases, a release drops the key
/// before its stamp expires.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    hold_window: u64,
    confirm: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            key_frame: HashMap::new(),
            frame: 0,
            hold_window,
            confirm: false,
            quit: false,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Feed one terminal event; non-key events are ignored
    pub fn handle(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return;
        };
        let code = normalize(*code);

        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, self.frame);
                match code {
                    KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Enter => self.confirm = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn is_held(&self, code: KeyCode) -> bool {
        self.key_frame
            .get(&code)
            .is_some_and(|&last| self.frame.saturating_sub(last) <= self.hold_window)
    }

    fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|&c| self.is_held(c))
    }

    /// Controls for this frame; the confirm edge is consumed
    pub fn controls(&mut self) -> Controls {
        let controls = Controls {
            up: self.any_held(&[KeyCode::Char('w'), KeyCode::Up]),
            down: self.any_held(&[KeyCode::Char('s'), KeyCode::Down]),
            left: self.any_held(&[KeyCode::Char('a'), KeyCode::Left]),
            right: self.any_held(&[KeyCode::Char('d'), KeyCode::Right]),
            shoot: self.is_held(KeyCode::Char(' ')),
            confirm: self.confirm,
        };
        self.confirm = false;
        controls
    }
}

/// Letter keys are tracked case-insensitively so Shift or Caps Lock can't
/// leave a stale upper-case entry behind
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
