//! Spoken narration for drill items.
//!
//! Synthesis uses `piper-rs` with one voice per language; utterances are
//! cached as WAV keyed by voice, text and speed, and played through `rodio`.
//! Everything runs on a dedicated worker thread fed over a channel:
//! [`NarrationService::speak`] never blocks the reducer, and the worker
//! silences any in-flight utterance before starting the next one. A missing
//! voice, audio device or synthesis failure downgrades narration to a
//! logged no-op — playback timing never depends on it.

use anyhow::{Context, Result};
use hafalan_core::Language;
use piper_rs::from_config_path;
use piper_rs::synth::{AudioOutputConfig, PiperSpeechSynthesizer};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info, warn};

/// Everything the worker needs, lifted out of `AppConfig` at startup.
#[derive(Debug, Clone)]
pub struct NarrationSettings {
    pub voice_english: PathBuf,
    pub voice_indonesian: PathBuf,
    pub espeak_data_path: PathBuf,
    pub cache_dir: PathBuf,
    pub speed: f32,
    pub volume: f32,
}

impl NarrationSettings {
    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        Self {
            voice_english: config.voice_english.clone().into(),
            voice_indonesian: config.voice_indonesian.clone().into(),
            espeak_data_path: config.espeak_data_path.clone().into(),
            cache_dir: config.narration_cache_dir.clone().into(),
            speed: config.narration_speed,
            volume: config.narration_volume,
        }
    }
}

enum Command {
    Speak { text: String, language: Language },
    Stop,
    Shutdown,
}

/// Fire-and-forget handle to the narration worker.
pub struct NarrationService {
    tx: mpsc::Sender<Command>,
}

impl NarrationService {
    pub fn spawn(settings: NarrationSettings) -> Self {
        let (tx, rx) = mpsc::channel();
        if let Err(err) = thread::Builder::new()
            .name("narration".into())
            .spawn(move || worker(settings, rx))
        {
            warn!("Failed to spawn narration worker: {err}");
        }
        Self { tx }
    }

    /// Queue an utterance. The worker cancels whatever is still speaking
    /// before this one starts.
    pub fn speak(&self, text: String, language: Language) {
        if self
            .tx
            .send(Command::Speak { text, language })
            .is_err()
        {
            debug!("narration worker gone; skipping utterance");
        }
    }

    /// Silence the current utterance, if any.
    pub fn stop(&self) {
        let _ = self.tx.send(Command::Stop);
    }
}

impl Drop for NarrationService {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}

fn worker(settings: NarrationSettings, rx: mpsc::Receiver<Command>) {
    if env::var_os("PIPER_ESPEAKNG_DATA_DIRECTORY").is_none() {
        // Safe because we set a deterministic value before any synthesis.
        unsafe {
            env::set_var(
                "PIPER_ESPEAKNG_DATA_DIRECTORY",
                sanitize_espeak_root(settings.espeak_data_path.clone()),
            );
        }
    }

    let mut voices: HashMap<Language, PiperSpeechSynthesizer> = HashMap::new();
    for (language, voice_path) in [
        (Language::English, &settings.voice_english),
        (Language::Indonesian, &settings.voice_indonesian),
    ] {
        match load_voice(voice_path) {
            Ok(synthesizer) => {
                info!(%language, voice = %voice_path.display(), "Loaded narration voice");
                voices.insert(language, synthesizer);
            }
            Err(err) => {
                warn!(%language, voice = %voice_path.display(), "Narration voice unavailable: {err:#}");
            }
        }
    }

    let output = match OutputStream::try_default() {
        Ok(output) => Some(output),
        Err(err) => {
            warn!("Audio output unavailable, narration disabled: {err}");
            None
        }
    };

    let mut current: Option<Sink> = None;
    while let Ok(command) = rx.recv() {
        match command {
            Command::Stop => {
                if let Some(sink) = current.take() {
                    sink.stop();
                }
            }
            Command::Shutdown => break,
            Command::Speak { text, language } => {
                // Cancel-before-speak: the narration channel is global.
                if let Some(sink) = current.take() {
                    sink.stop();
                }
                let Some((_, handle)) = output.as_ref() else {
                    continue;
                };
                let Some(synthesizer) = voices.get(&language) else {
                    debug!(%language, "no voice for language; skipping utterance");
                    continue;
                };
                match speak_one(synthesizer, &settings, handle, &text, language) {
                    Ok(sink) => current = Some(sink),
                    Err(err) => warn!(%language, "Failed to narrate: {err:#}"),
                }
            }
        }
    }
}

fn speak_one(
    synthesizer: &PiperSpeechSynthesizer,
    settings: &NarrationSettings,
    handle: &OutputStreamHandle,
    text: &str,
    language: Language,
) -> Result<Sink> {
    let voice_path = match language {
        Language::English => &settings.voice_english,
        Language::Indonesian => &settings.voice_indonesian,
    };
    let path = cache_path(&settings.cache_dir, voice_path, text, settings.speed);

    if !path.exists() {
        debug!(path = %path.display(), lang = language.tag(), "Synthesizing new utterance");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Creating narration cache directory")?;
        }
        synthesize(synthesizer, &path, text, settings.speed)?;
    }

    let reader = BufReader::new(File::open(&path).context("Opening cached utterance")?);
    let source = Decoder::new(reader).context("Decoding cached utterance")?;
    let sink = Sink::try_new(handle).context("Creating sink")?;
    sink.set_volume(settings.volume);
    sink.append(source);
    sink.play();
    Ok(sink)
}

fn synthesize(
    synthesizer: &PiperSpeechSynthesizer,
    path: &Path,
    text: &str,
    speed: f32,
) -> Result<()> {
    let output_config = if (speed - 1.0).abs() <= f32::EPSILON {
        None
    } else {
        Some(AudioOutputConfig {
            rate: Some(speed_to_rate_percent(speed)),
            volume: None,
            pitch: None,
            appended_silence_ms: None,
        })
    };
    synthesizer
        .synthesize_to_file(path, text.to_string(), output_config)
        .context("Synthesizing audio")?;
    Ok(())
}

fn load_voice(model_path: &Path) -> Result<PiperSpeechSynthesizer> {
    let config_path = resolve_piper_config(model_path);
    if !config_path.exists() {
        anyhow::bail!(
            "Piper config not found at {} (expected from {})",
            config_path.display(),
            model_path.display()
        );
    }
    let model = from_config_path(&config_path).context("Loading Piper model")?;
    PiperSpeechSynthesizer::new(model).context("Preparing Piper synthesizer")
}

fn cache_path(base: &Path, voice_path: &Path, text: &str, speed: f32) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(voice_path.as_os_str().to_string_lossy().as_bytes());
    hasher.update(text.as_bytes());
    hasher.update(speed.to_le_bytes());
    let hash = format!("{:x}", hasher.finalize());
    base.join(format!("utterance-{hash}.wav"))
}

fn resolve_piper_config(model_path: &Path) -> PathBuf {
    if model_path
        .extension()
        .map(|ext| ext == "onnx")
        .unwrap_or(false)
    {
        return model_path.with_extension("onnx.json");
    }
    model_path.to_path_buf()
}

/// Piper expects the parent directory that contains `espeak-ng-data`. Users
/// often point directly at `.../espeak-ng-data`; trim that to avoid
/// duplicated segments when piper joins the paths.
fn sanitize_espeak_root(path: PathBuf) -> PathBuf {
    if path
        .file_name()
        .map(|name| name == "espeak-ng-data")
        .unwrap_or(false)
    {
        if let Some(parent) = path.parent() {
            return parent.to_path_buf();
        }
    }
    path
}

fn speed_to_rate_percent(speed: f32) -> u8 {
    let clamped = speed.clamp(0.5, 5.5);
    let percent = ((clamped - 0.5) / 5.0) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
