// src/sound.rs

//! Random Windows XP sound effects.
//!
//! The player always has the next clip picked out and prefetched, so a
//! request to play only has to hand a cached clip to the audio thread.

use crate::errors::{CatchatError, CatchatResult};
use bytes::Bytes;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::mpsc;
use std::thread;

pub trait AudioBackend {
    /// Starts loading `url` so a later `play` is quick.
    fn prefetch(&mut self, url: &str);
    /// Starts playing `url` without waiting for it to finish.
    fn play(&mut self, url: &str);
}

impl<T: AudioBackend + ?Sized> AudioBackend for Box<T> {
    fn prefetch(&mut self, url: &str) {
        (**self).prefetch(url)
    }

    fn play(&mut self, url: &str) {
        (**self).play(url)
    }
}

/// Plays nothing. Used when sound is turned off or there is no device.
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn prefetch(&mut self, _url: &str) {}

    fn play(&mut self, url: &str) {
        debug!("Not playing {} (sound disabled)", url);
    }
}

pub struct SoundPlayer<B: AudioBackend> {
    sounds: &'static [&'static str],
    next: &'static str,
    backend: B,
    rng: StdRng,
}

impl<B: AudioBackend> SoundPlayer<B> {
    pub fn new(sounds: &'static [&'static str], backend: B) -> CatchatResult<Self> {
        Self::with_rng(sounds, backend, StdRng::from_os_rng())
    }

    pub fn with_rng(
        sounds: &'static [&'static str],
        mut backend: B,
        mut rng: StdRng,
    ) -> CatchatResult<Self> {
        let next = *sounds
            .choose(&mut rng)
            .ok_or_else(|| CatchatError::audio_error("No sounds to play"))?;
        backend.prefetch(next);

        Ok(Self {
            sounds,
            next,
            backend,
            rng,
        })
    }

    /// The clip the next call to [`play_random_sound`](Self::play_random_sound) will play.
    pub fn next_sound(&self) -> &'static str {
        self.next
    }

    /// Plays the pre-selected clip and picks a new one. Returns what was played.
    pub fn play_random_sound(&mut self) -> &'static str {
        // `with_rng` guarantees a non-empty list
        let picked = self.sounds.choose(&mut self.rng).copied().unwrap_or(self.next);
        let to_play = std::mem::replace(&mut self.next, picked);
        // play first so the clip never waits behind the next download
        self.backend.play(to_play);
        self.backend.prefetch(self.next);
        to_play
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

enum AudioCommand {
    Prefetch(String),
    Play(String),
    /// A download finished; `None` if it failed.
    Loaded(String, Option<Bytes>),
}

/// Sends clips to a dedicated audio thread that owns the output device.
pub struct RodioBackend {
    commands: mpsc::Sender<AudioCommand>,
}

impl RodioBackend {
    /// Opens the default output device on a new thread.
    pub fn spawn() -> CatchatResult<Self> {
        let (commands, receiver) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();
        let loader = commands.clone();

        thread::Builder::new()
            .name("catchat-audio".to_string())
            .spawn(move || {
                let (_stream, handle) = match rodio::OutputStream::try_default() {
                    Ok(output) => {
                        let _ = ready_tx.send(Ok(()));
                        output
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(CatchatError::audio_error(e.to_string())));
                        return;
                    }
                };
                audio_loop(receiver, loader, &handle);
            })?;

        ready_rx
            .recv()
            .map_err(|_| CatchatError::audio_error("Audio thread exited during startup"))??;

        Ok(Self { commands })
    }

    fn send(&self, command: AudioCommand) {
        if self.commands.send(command).is_err() {
            warn!("Audio thread is gone");
        }
    }
}

impl AudioBackend for RodioBackend {
    fn prefetch(&mut self, url: &str) {
        self.send(AudioCommand::Prefetch(url.to_string()));
    }

    fn play(&mut self, url: &str) {
        self.send(AudioCommand::Play(url.to_string()));
    }
}

/// Clips the audio thread has downloaded or is still waiting on.
#[derive(Debug, Default)]
struct ClipCache {
    clips: HashMap<String, Bytes>,
    loading: HashSet<String>,
    /// Clips asked to play before their download finished
    waiting: HashSet<String>,
}

impl ClipCache {
    /// Returns true if `url` still has to be downloaded.
    fn request(&mut self, url: &str) -> bool {
        !self.clips.contains_key(url) && self.loading.insert(url.to_string())
    }

    /// Returns the clip if it can be played right away. Otherwise the clip
    /// is played once it arrives.
    fn play(&mut self, url: &str) -> Option<Bytes> {
        match self.clips.get(url) {
            Some(bytes) => Some(bytes.clone()),
            None => {
                self.waiting.insert(url.to_string());
                None
            }
        }
    }

    /// Stores a finished download. Returns the clip if someone was waiting
    /// to hear it.
    fn loaded(&mut self, url: String, bytes: Option<Bytes>) -> Option<Bytes> {
        self.loading.remove(&url);
        let waiting = self.waiting.remove(&url);
        let bytes = bytes?;
        self.clips.insert(url, bytes.clone());
        waiting.then_some(bytes)
    }
}

/// Downloads happen on short-lived threads that report back through
/// `loader`, so a `Play` of a cached clip never waits on the network.
fn audio_loop(
    commands: mpsc::Receiver<AudioCommand>,
    loader: mpsc::Sender<AudioCommand>,
    handle: &rodio::OutputStreamHandle,
) {
    let client = reqwest::blocking::Client::new();
    let mut cache = ClipCache::default();

    let load = |url: &str, cache: &mut ClipCache| {
        if cache.request(url) {
            spawn_fetch(client.clone(), url.to_string(), loader.clone());
        }
    };

    while let Ok(command) = commands.recv() {
        match command {
            AudioCommand::Prefetch(url) => load(&url, &mut cache),
            AudioCommand::Play(url) => match cache.play(&url) {
                Some(bytes) => play_bytes(handle, &url, bytes),
                None => load(&url, &mut cache),
            },
            AudioCommand::Loaded(url, bytes) => {
                if let Some(bytes) = cache.loaded(url.clone(), bytes) {
                    play_bytes(handle, &url, bytes);
                }
            }
        }
    }
    debug!("Audio thread shutting down");
}

fn spawn_fetch(client: reqwest::blocking::Client, url: String, loader: mpsc::Sender<AudioCommand>) {
    let spawned = thread::Builder::new()
        .name("catchat-fetch".to_string())
        .spawn(move || {
            let bytes = fetch(&client, &url);
            let _ = loader.send(AudioCommand::Loaded(url, bytes));
        });
    if let Err(e) = spawned {
        warn!("Failed to start a download: {}", e);
    }
}

fn fetch(client: &reqwest::blocking::Client, url: &str) -> Option<Bytes> {
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes());
    match response {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            None
        }
    }
}

fn play_bytes(handle: &rodio::OutputStreamHandle, url: &str, bytes: Bytes) {
    if let Err(e) = try_play_bytes(handle, bytes) {
        warn!("Failed to play {}: {}", url, e);
    }
}

fn try_play_bytes(handle: &rodio::OutputStreamHandle, bytes: Bytes) -> CatchatResult<()> {
    // `Bytes` shares the cached buffer, so decoding does not copy the clip
    let source = rodio::Decoder::new(Cursor::new(bytes))
        .map_err(|e| CatchatError::audio_error(e.to_string()))?;
    let sink =
        rodio::Sink::try_new(handle).map_err(|e| CatchatError::audio_error(e.to_string()))?;
    sink.append(source);
    sink.detach();
    Ok(())
}
