//! Session journal - line-delimited JSON record of gameplay events
//!
//! Every record has: type, seq (sequence number), ts (milliseconds since the
//! run started) and frame. A write failure disables the journal for the rest
//! of the session; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameEvent, PickupEffect};

/// Event payload, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEvent {
    Jumped {
        x: i32,
        y: i32,
    },
    ItemCollected {
        item: usize,
        sprite: &'static str,
        value: u32,
        effect: &'static str,
        score: u32,
    },
    PlayerHit {
        enemy: usize,
        health: i32,
    },
    GameOver {
        score: u32,
    },
    Verdict {
        verdict: &'static str,
        score: u32,
    },
    Reset,
}

impl From<&GameEvent> for JournalEvent {
    fn from(event: &GameEvent) -> Self {
        match *event {
            GameEvent::Jumped { x, y } => JournalEvent::Jumped { x, y },
            GameEvent::ItemCollected {
                item,
                sprite,
                value,
                effect,
                score,
            } => JournalEvent::ItemCollected {
                item: item.0,
                sprite: sprite.as_str(),
                value,
                effect: effect_name(effect),
                score,
            },
            GameEvent::PlayerHit { enemy, health } => JournalEvent::PlayerHit { enemy, health },
            GameEvent::GameOver { score } => JournalEvent::GameOver { score },
            GameEvent::VerdictReached { verdict, score } => JournalEvent::Verdict {
                verdict: verdict.as_str(),
                score,
            },
            GameEvent::Reset => JournalEvent::Reset,
        }
    }
}

fn effect_name(effect: PickupEffect) -> &'static str {
    match effect {
        PickupEffect::Score(_) => "score",
        PickupEffect::Launch { .. } => "launch",
        PickupEffect::SpeedBoost { .. } => "speed_boost",
        PickupEffect::EvaluateVerdict => "verdict",
        PickupEffect::Nothing => "none",
    }
}

/// One journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub ts: u64,
    pub frame: u64,
    #[serde(flatten)]
    pub event: JournalEvent,
}

pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// A journal that records nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, frame: u64, ts: u64, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.seq += 1;
        let record = JournalRecord {
            seq: self.seq,
            ts,
            frame,
            event: event.into(),
        };

        self.buf.clear();
        let written = serde_json::to_writer(&mut self.buf, &record)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf).map_err(anyhow::Error::from)
            });
        if let Err(e) = written {
            self.fail(&e);
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.fail(&e.into());
            }
        }
    }

    fn fail(&mut self, error: &anyhow::Error) {
        eprintln!("[Journal] write failed, journal disabled: {}", error);
        self.out = None;
    }

    /// Give back the writer, if the journal is still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
