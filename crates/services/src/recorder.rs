use std::io::Cursor;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::api::AudioPayload;
use crate::error::RecorderError;

//
// ─── CAPTURE ENCODING ──────────────────────────────────────────────────────────
//

/// Candidate capture encodings, probed in a fixed order; the first one the
/// input device supports wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureEncoding {
    F32,
    I16,
    U16,
}

impl CaptureEncoding {
    const CANDIDATES: [CaptureEncoding; 3] =
        [CaptureEncoding::F32, CaptureEncoding::I16, CaptureEncoding::U16];

    fn sample_format(self) -> cpal::SampleFormat {
        match self {
            CaptureEncoding::F32 => cpal::SampleFormat::F32,
            CaptureEncoding::I16 => cpal::SampleFormat::I16,
            CaptureEncoding::U16 => cpal::SampleFormat::U16,
        }
    }
}

/// Raw capture output before WAV assembly.
struct CapturedAudio {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

//
// ─── RECORDER ──────────────────────────────────────────────────────────────────
//

struct ActiveRecording {
    stop_tx: Sender<()>,
    done_rx: Receiver<CapturedAudio>,
    handle: JoinHandle<()>,
}

/// Microphone capture for the submit pipeline.
///
/// cpal streams are not `Send`, so each recording runs on a dedicated worker
/// thread that owns the stream for its whole lifetime; the stream is dropped
/// (and the device released) whenever that thread ends, on success and on
/// every failure path alike. Only one recording may be open at a time.
#[derive(Default)]
pub struct Recorder {
    active: Mutex<Option<ActiveRecording>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Open the default input device and start buffering audio.
    ///
    /// # Errors
    ///
    /// Returns `RecorderError::AlreadyRecording` if a recording is open,
    /// `RecorderError::NoInputDevice` when no microphone is available,
    /// `RecorderError::NoSupportedFormat` when none of the candidate
    /// encodings is supported, and `RecorderError::Device` for other
    /// device failures. Every error is terminal for this attempt.
    pub fn start(&self) -> Result<(), RecorderError> {
        let mut guard = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return Err(RecorderError::AlreadyRecording);
        }

        let (ready_tx, ready_rx) = channel();
        let (stop_tx, stop_rx) = channel();
        let (done_tx, done_rx) = channel();

        let handle = std::thread::spawn(move || capture_worker(&ready_tx, &stop_rx, &done_tx));

        match ready_rx.recv() {
            Ok(Ok(())) => {
                tracing::info!("recording started");
                *guard = Some(ActiveRecording {
                    stop_tx,
                    done_rx,
                    handle,
                });
                Ok(())
            }
            Ok(Err(err)) => {
                let _ = handle.join();
                Err(err)
            }
            Err(_) => {
                let _ = handle.join();
                Err(RecorderError::WorkerGone)
            }
        }
    }

    /// Stop capturing, release the microphone, and assemble the buffered
    /// slices into a single WAV payload.
    ///
    /// # Errors
    ///
    /// Returns `RecorderError::NotRecording` when nothing is being
    /// captured and `RecorderError::EmptyRecording` when no audio
    /// accumulated; the device is released in either outcome.
    pub fn stop(&self) -> Result<AudioPayload, RecorderError> {
        let active = {
            let mut guard = self.active.lock().unwrap_or_else(PoisonError::into_inner);
            guard.take().ok_or(RecorderError::NotRecording)?
        };

        let _ = active.stop_tx.send(());
        let captured = active
            .done_rx
            .recv()
            .map_err(|_| RecorderError::WorkerGone)?;
        let _ = active.handle.join();

        tracing::info!(samples = captured.samples.len(), "recording stopped");
        assemble(&captured)
    }
}

//
// ─── CAPTURE WORKER ────────────────────────────────────────────────────────────
//

fn capture_worker(
    ready_tx: &Sender<Result<(), RecorderError>>,
    stop_rx: &Receiver<()>,
    done_tx: &Sender<CapturedAudio>,
) {
    let buffer = Arc::new(Mutex::new(Vec::<f32>::new()));

    let (stream, sample_rate, channels) = match open_input_stream(&buffer) {
        Ok(opened) => opened,
        Err(err) => {
            let _ = ready_tx.send(Err(err));
            return;
        }
    };

    if let Err(err) = stream.play() {
        let _ = ready_tx.send(Err(RecorderError::Device(err.to_string())));
        return;
    }
    let _ = ready_tx.send(Ok(()));

    // Block until stop (or until the handle is dropped). Dropping the stream
    // afterwards is what releases the capture device.
    let _ = stop_rx.recv();
    drop(stream);

    let samples = std::mem::take(
        &mut *buffer.lock().unwrap_or_else(PoisonError::into_inner),
    );
    let _ = done_tx.send(CapturedAudio {
        samples,
        sample_rate,
        channels,
    });
}

fn open_input_stream(
    buffer: &Arc<Mutex<Vec<f32>>>,
) -> Result<(cpal::Stream, u32, u16), RecorderError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(RecorderError::NoInputDevice)?;

    let (encoding, supported) = select_encoding(&device)?;
    let config = supported.config();
    let sample_rate = config.sample_rate.0;
    let channels = config.channels;

    let err_fn = |err: cpal::StreamError| tracing::warn!(%err, "input stream error");

    let stream = match encoding {
        CaptureEncoding::F32 => {
            let buffer = Arc::clone(buffer);
            device.build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    buffer
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .extend_from_slice(data);
                },
                err_fn,
                None,
            )
        }
        CaptureEncoding::I16 => {
            let buffer = Arc::clone(buffer);
            device.build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    let mut guard = buffer.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.extend(data.iter().map(|&s| f32::from(s) / f32::from(i16::MAX)));
                },
                err_fn,
                None,
            )
        }
        CaptureEncoding::U16 => {
            let buffer = Arc::clone(buffer);
            device.build_input_stream(
                &config,
                move |data: &[u16], _: &cpal::InputCallbackInfo| {
                    let mut guard = buffer.lock().unwrap_or_else(PoisonError::into_inner);
                    guard.extend(data.iter().map(|&s| (f32::from(s) - 32768.0) / 32768.0));
                },
                err_fn,
                None,
            )
        }
    }
    .map_err(|err| RecorderError::Device(err.to_string()))?;

    Ok((stream, sample_rate, channels))
}

/// Probe the candidate encodings in order against what the device reports.
fn select_encoding(
    device: &cpal::Device,
) -> Result<(CaptureEncoding, cpal::SupportedStreamConfig), RecorderError> {
    let ranges: Vec<_> = device
        .supported_input_configs()
        .map_err(|err| RecorderError::Device(err.to_string()))?
        .collect();

    for candidate in CaptureEncoding::CANDIDATES {
        if let Some(range) = ranges
            .iter()
            .find(|range| range.sample_format() == candidate.sample_format())
        {
            return Ok((candidate, range.clone().with_max_sample_rate()));
        }
    }

    Err(RecorderError::NoSupportedFormat)
}

//
// ─── WAV ASSEMBLY ──────────────────────────────────────────────────────────────
//

fn assemble(captured: &CapturedAudio) -> Result<AudioPayload, RecorderError> {
    if captured.samples.is_empty() {
        return Err(RecorderError::EmptyRecording);
    }

    let spec = hound::WavSpec {
        channels: captured.channels,
        sample_rate: captured.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|err| RecorderError::Encode(err.to_string()))?;
        for sample in &captured.samples {
            let clamped = sample.clamp(-1.0, 1.0);
            #[allow(clippy::cast_possible_truncation)]
            writer
                .write_sample((clamped * f32::from(i16::MAX)) as i16)
                .map_err(|err| RecorderError::Encode(err.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|err| RecorderError::Encode(err.to_string()))?;
    }

    Ok(AudioPayload {
        filename: "recording.wav".to_string(),
        media_type: "audio/wav".to_string(),
        bytes: cursor.into_inner(),
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capture_is_an_error_not_an_empty_success() {
        let captured = CapturedAudio {
            samples: Vec::new(),
            sample_rate: 44_100,
            channels: 1,
        };
        let err = assemble(&captured).unwrap_err();
        assert!(matches!(err, RecorderError::EmptyRecording));
    }

    #[test]
    fn assembled_recording_is_a_named_wav() {
        let captured = CapturedAudio {
            samples: vec![0.0, 0.5, -0.5, 1.0, -1.0],
            sample_rate: 44_100,
            channels: 1,
        };
        let payload = assemble(&captured).unwrap();

        assert_eq!(payload.filename, "recording.wav");
        assert_eq!(payload.media_type, "audio/wav");
        assert_eq!(&payload.bytes[0..4], b"RIFF");
        assert_eq!(&payload.bytes[8..12], b"WAVE");
    }

    #[test]
    fn out_of_range_samples_are_clamped() {
        let captured = CapturedAudio {
            samples: vec![2.0, -2.0],
            sample_rate: 16_000,
            channels: 1,
        };
        // Clamping keeps encoding from overflowing; success is the assertion.
        let payload = assemble(&captured).unwrap();
        assert!(!payload.bytes.is_empty());
    }

    #[test]
    fn stop_without_start_is_rejected() {
        let recorder = Recorder::new();
        let err = recorder.stop().unwrap_err();
        assert!(matches!(err, RecorderError::NotRecording));
        assert!(!recorder.is_recording());
    }
}
