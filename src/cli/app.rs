//! Main app runner for hook invocations

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::application::ports::ConfigSource;
use crate::application::{PlayHookInput, PlayHookUseCase};
use crate::domain::config::EngineConfig;
use crate::domain::platform::Platform;
use crate::infrastructure::{
    DetectingAudioBackend, JsonConfigSource, JsonStateStore, PackDirectory, StdinPayload,
};

use super::args::HookOptions;
use super::engine_dir::EngineDir;
use super::logging;

/// Exit code for every invocation; the host reads nothing from it
pub const EXIT_SUCCESS: u8 = 0;

/// Run one hook invocation
pub async fn run_hook(options: HookOptions) -> ExitCode {
    let dir = EngineDir::resolve(options.dir);
    logging::init(dir.path());

    let config = load_config(&JsonConfigSource::in_dir(dir.path())).await;

    let mut use_case = PlayHookUseCase::new(
        config,
        JsonStateStore::in_dir(dir.path()),
        PackDirectory::in_dir(dir.path()),
        StdinPayload::new(),
        DetectingAudioBackend::new(Platform::detect()),
        StdRng::from_entropy(),
    );

    let input = PlayHookInput {
        hook: options.hook,
        now: epoch_now(),
    };
    let outcome = use_case.execute(input).await;
    tracing::debug!(?outcome, "Invocation finished");

    ExitCode::from(EXIT_SUCCESS)
}

/// Load configuration, falling back to defaults on any error
pub async fn load_config<C: ConfigSource + ?Sized>(source: &C) -> EngineConfig {
    match source.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %source.path().display(), error = %e, "Using default config");
            EngineConfig::defaults()
        }
    }
}

/// Current time in epoch seconds
pub fn epoch_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
