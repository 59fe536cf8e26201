//! Rodio-backed playback engine
//!
//! Holds one output stream and one sink for the process lifetime; the
//! scheduler guarantees only one cue plays at a time.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use heckler_core::{PlaybackEngine, PlaybackError};

pub struct RodioEngine {
    // The stream must stay alive for the sink to keep producing output
    _stream: OutputStream,
    sink: Sink,
}

impl RodioEngine {
    /// Open the default output device. `volume` is 0-100.
    pub fn new(volume: u8) -> Result<Self, PlaybackError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::Device {
                reason: e.to_string(),
            })?;
        let sink = Sink::try_new(&handle).map_err(|e| PlaybackError::Device {
            reason: e.to_string(),
        })?;
        sink.set_volume(volume.min(100) as f32 / 100.0);

        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl PlaybackEngine for RodioEngine {
    fn start(&mut self, asset: &Path) -> Result<(), PlaybackError> {
        let file = File::open(asset).map_err(|source| PlaybackError::Open {
            path: asset.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
            path: asset.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.sink.append(source);
        Ok(())
    }

    fn is_busy(&self) -> bool {
        !self.sink.empty()
    }

    fn stop(&mut self) {
        self.sink.stop();
    }
}
