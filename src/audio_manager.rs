use std::{fs::File, io::Read, io::BufReader, time::{Instant, Duration}, sync::Arc};
use std::collections::HashMap;
use std::io::Cursor;
use rodio::{OutputStream, OutputStreamHandle, Sink, Decoder, Source};

use crate::core::MoveOutcome;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| load_bytes(p))
}

/// Sound effects the game can play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Step,
    Bump,
    LevelClear,
    Victory,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Step, Cue::Bump, Cue::LevelClear, Cue::Victory];

    pub fn for_outcome(outcome: MoveOutcome) -> Option<Cue> {
        match outcome {
            MoveOutcome::Moved(_) => Some(Cue::Step),
            MoveOutcome::Blocked => Some(Cue::Bump),
            MoveOutcome::Advanced { .. } => Some(Cue::LevelClear),
            MoveOutcome::Completed => Some(Cue::Victory),
            MoveOutcome::Ignored => None,
        }
    }

    /// Asset files tried in order; the first one that exists wins.
    fn candidates(self) -> &'static [&'static str] {
        match self {
            Cue::Step => &["assets/sfx_step.wav", "assets/sounds/step.wav", "assets/sounds/foot.wav"],
            Cue::Bump => &["assets/sfx_bump.wav", "assets/sounds/bump.wav"],
            Cue::LevelClear => &["assets/sfx_level_clear.wav", "assets/sounds/level_clear.wav"],
            Cue::Victory => &["assets/sfx_victory.wav", "assets/sounds/victory.wav"],
        }
    }

    /// Rapid key repeats would otherwise stack footsteps and bumps.
    fn min_interval(self) -> Duration {
        match self {
            Cue::Step | Cue::Bump => Duration::from_millis(60),
            Cue::LevelClear | Cue::Victory => Duration::ZERO,
        }
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    cues: HashMap<Cue, Arc<Vec<u8>>>,
    last_played: HashMap<Cue, Instant>,
    volume: f32,
}

impl AudioManager {
    /// `None` when there is no usable output device.
    pub fn new(volume: f32) -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            cues: HashMap::new(),
            last_played: HashMap::new(),
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn load_cues_auto(&mut self) {
        for cue in Cue::ALL {
            match load_bytes_any(cue.candidates()) {
                Some(bytes) => {
                    self.cues.insert(cue, Arc::new(bytes));
                }
                None => log::debug!("No sound file for {:?}", cue),
            }
        }
        log::info!("Loaded {} of {} sound cues", self.cues.len(), Cue::ALL.len());
    }

    pub fn play_outcome(&mut self, outcome: MoveOutcome) {
        if let Some(cue) = Cue::for_outcome(outcome) {
            self.play(cue);
        }
    }

    pub fn play(&mut self, cue: Cue) {
        let now = Instant::now();
        if let Some(last) = self.last_played.get(&cue) {
            if now.duration_since(*last) < cue.min_interval() {
                return;
            }
        }
        let Some(data) = self.cues.get(&cue).cloned() else { return };
        self.last_played.insert(cue, now);

        match cue {
            // Own sink so the fanfare is not queued behind footsteps
            Cue::LevelClear | Cue::Victory => self.play_detached(data),
            Cue::Step | Cue::Bump => {
                if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(data.as_ref().clone()))) {
                    self.sfx_sink.append(dec.amplify(self.volume));
                }
            }
        }
    }

    fn play_detached(&self, data: Arc<Vec<u8>>) {
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(data.as_ref().clone()))) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.volume));
                sink.detach();
            }
        }
    }
}
