//! Fire-and-forget sound cues. Playback failures are swallowed; nothing here
//! can influence the simulation.

use std::io::Write;

use crate::entities::Cue;

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Clone, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell. Collect cues are too frequent to be pleasant, so
/// only jumps, pickups and game over make a sound.
///
/// The bell byte is only written, never flushed: hand it the frame's writer
/// so the byte goes out with the frame instead of splitting it.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if cue == Cue::Collect {
            return;
        }
        let _ = self.out.write_all(b"\x07");
    }
}

/// Records cues in order; handy for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub played: Vec<Cue>,
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

/// Hand every pending cue to `sink` and clear the queue.
pub fn drain_cues<S: AudioSink + ?Sized>(cues: &mut Vec<Cue>, sink: &mut S) {
    for cue in cues.drain(..) {
        sink.play(cue);
    }
}
