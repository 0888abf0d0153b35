use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::sync::Arc;
use std::time::Duration;

use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| {
        let bytes = load_bytes(p)?;
        debug!(path = p, "loaded sound");
        Some(bytes)
    })
}

/// Sound cues for shots and damage. Missing files fall back to short tones.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    gun: Option<Arc<Vec<u8>>>,
    hurt: Option<Arc<Vec<u8>>>,
    death: Option<Arc<Vec<u8>>>,
    gun_volume: f32,
}

impl AudioManager {
    /// `None` when no output device is available.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(err) => {
                warn!(%err, "no audio output, running muted");
                return None;
            }
        };
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            gun: None,
            hurt: None,
            death: None,
            gun_volume: 0.8,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.gun = load_bytes_any(&[
            "assets/sfx_gun.wav",
            "assets/sounds/gun.wav",
            "assets/sounds/shot.wav",
            "assets/sounds/shot.mp3",
        ])
        .map(Arc::new);
        self.hurt = load_bytes_any(&[
            "assets/sfx_hurt.wav",
            "assets/sounds/hurt.wav",
        ])
        .map(Arc::new);
        self.death = load_bytes_any(&[
            "assets/sfx_player_caught.wav",
            "assets/sounds/caught.wav",
            "assets/sounds/caught.mp3",
        ])
        .map(Arc::new);
        if self.gun.is_none() {
            debug!("no gun sound on disk, using synthesized click");
        }
    }

    /// Every shot gets its own sink so rapid fire overlaps instead of queueing.
    pub fn play_gun(&self) {
        let Ok(sink) = Sink::try_new(&self.handle) else { return };
        match self.gun.as_ref().and_then(|d| decode(d)) {
            Some(dec) => sink.append(dec.amplify(self.gun_volume.clamp(0.0, 2.5))),
            None => sink.append(
                SineWave::new(180.0)
                    .take_duration(Duration::from_millis(60))
                    .amplify(0.25),
            ),
        }
        sink.detach();
    }

    pub fn play_hurt(&self) {
        match self.hurt.as_ref().and_then(|d| decode(d)) {
            Some(dec) => self.sfx_sink.append(dec),
            None => self.sfx_sink.append(
                SineWave::new(90.0)
                    .take_duration(Duration::from_millis(120))
                    .amplify(0.3),
            ),
        }
    }

    pub fn play_death(&self) {
        if let Some(dec) = self.death.as_ref().and_then(|d| decode(d)) {
            self.sfx_sink.append(dec);
        }
    }
}

fn decode(data: &Arc<Vec<u8>>) -> Option<Decoder<BufReader<Cursor<Vec<u8>>>>> {
    Decoder::new(BufReader::new(Cursor::new(data.as_ref().clone()))).ok()
}
