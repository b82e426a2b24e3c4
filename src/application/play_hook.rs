//! Play hook use case
//!
//! One run of the engine: gate on configuration, resolve categories through
//! the annoyance detector, pick a sound, persist state once and hand the
//! file to the audio backend. Nothing in here fails outward; every external
//! problem ends the run quietly and is reported only through the outcome.

use std::path::PathBuf;

use rand::Rng;

use crate::domain::config::EngineConfig;
use crate::domain::selection::{pick_category, select_sound, AnnoyanceDetector};

use super::ports::{AudioBackend, HookPayload, SoundPackSource, StateStore};

/// Input parameters for one invocation
#[derive(Debug, Clone)]
pub struct PlayHookInput {
    /// Hook name passed by the host
    pub hook: Option<String>,
    /// Invocation time in epoch seconds
    pub now: f64,
}

/// What an invocation ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum PlayHookOutcome {
    /// Engine disabled globally
    Disabled,
    /// No hook name supplied
    NoHook,
    /// Hook unknown, disabled, or without categories
    InactiveHook,
    /// Only the annoyed category was requested and the threshold was not met
    Suppressed,
    /// A category was chosen but no playable sound was found
    NoSound { category: String },
    /// Playback was started
    Dispatched { category: String, path: PathBuf },
    /// A sound was resolved but the backend could not start it
    PlaybackFailed { category: String, path: PathBuf },
}

/// Invocation controller
pub struct PlayHookUseCase<S, P, D, A, R>
where
    S: StateStore,
    P: SoundPackSource,
    D: HookPayload,
    A: AudioBackend,
    R: Rng,
{
    config: EngineConfig,
    state_store: S,
    packs: P,
    payload: D,
    backend: A,
    rng: R,
}

impl<S, P, D, A, R> PlayHookUseCase<S, P, D, A, R>
where
    S: StateStore,
    P: SoundPackSource,
    D: HookPayload,
    A: AudioBackend,
    R: Rng,
{
    /// Create a new use case instance
    pub fn new(config: EngineConfig, state_store: S, packs: P, payload: D, backend: A, rng: R) -> Self {
        Self {
            config,
            state_store,
            packs,
            payload,
            backend,
            rng,
        }
    }

    /// Execute one invocation
    pub async fn execute(&mut self, input: PlayHookInput) -> PlayHookOutcome {
        if !self.config.enabled {
            tracing::debug!("Engine disabled");
            return PlayHookOutcome::Disabled;
        }

        let Some(hook) = input.hook.as_deref().filter(|h| !h.is_empty()) else {
            return PlayHookOutcome::NoHook;
        };

        let Some(requested) = self.config.active_categories(hook) else {
            tracing::debug!(hook, "Hook inactive");
            return PlayHookOutcome::InactiveHook;
        };
        let requested = requested.to_vec();

        match self.payload.drain().await {
            Ok(bytes) => tracing::debug!(hook, bytes, "Payload drained"),
            Err(e) => tracing::debug!(hook, error = %e, "Payload drain failed"),
        }

        let mut state = self.state_store.load().await;

        let resolution =
            AnnoyanceDetector::new(self.config.annoyance).resolve(&requested, &mut state, input.now);
        let mut dirty = resolution.history_updated;
        if resolution.is_annoyed() {
            tracing::debug!(hook, "Rapid invocations, forcing annoyed category");
        }

        let mut selection = None;
        if let Some(category) = pick_category(&resolution.effective, &mut self.rng) {
            match self.packs.manifest(&self.config.active_pack).await {
                Ok(manifest) => {
                    let file = select_sound(category, &manifest, &mut state, &mut self.rng);
                    dirty |= file.is_some();
                    selection = Some((category.to_string(), file));
                }
                Err(e) => {
                    tracing::warn!(pack = %self.config.active_pack, error = %e, "Manifest unavailable");
                    selection = Some((category.to_string(), None));
                }
            }
        }

        if dirty {
            if let Err(e) = self.state_store.save(&state).await {
                tracing::warn!(error = %e, "State not saved");
            }
        }

        let Some((category, file)) = selection else {
            tracing::debug!(hook, "No category left after annoyance check");
            return PlayHookOutcome::Suppressed;
        };

        let Some(file) = file else {
            tracing::debug!(hook, category = %category, "Category has no sounds");
            return PlayHookOutcome::NoSound { category };
        };

        let Some(path) = self.packs.resolve_sound(&self.config.active_pack, &file).await else {
            tracing::debug!(hook, file = %file, "Sound file missing");
            return PlayHookOutcome::NoSound { category };
        };

        match self.backend.play(&path, self.config.volume).await {
            Ok(()) => {
                tracing::debug!(
                    hook,
                    player = self.backend.name(),
                    path = %path.display(),
                    volume = %self.config.volume,
                    "Playback started"
                );
                PlayHookOutcome::Dispatched { category, path }
            }
            Err(e) => {
                tracing::debug!(hook, error = %e, "Playback not started");
                PlayHookOutcome::PlaybackFailed { category, path }
            }
        }
    }
}
