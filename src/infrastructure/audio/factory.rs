//! Audio player selection with automatic detection

use std::fmt;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::OnceCell;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;
use crate::domain::platform::Platform;

use super::afplay::AfplayPlayer;
use super::aplay::AplayPlayer;
use super::ffplay::FfplayPlayer;
use super::mpv::MpvPlayer;
use super::paplay::PaplayPlayer;
use super::powershell::PowerShellPlayer;

/// Supported playback tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTool {
    /// macOS: afplay
    Afplay,
    /// Linux: paplay (PulseAudio/PipeWire)
    Paplay,
    /// Linux: aplay (ALSA)
    Aplay,
    /// Linux: ffplay
    Ffplay,
    /// Linux: mpv
    Mpv,
    /// WSL and Windows: PowerShell MediaPlayer bridge
    PowerShell,
}

impl PlayerTool {
    /// Executable probed for this tool
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Afplay => "afplay",
            Self::Paplay => "paplay",
            Self::Aplay => "aplay",
            Self::Ffplay => "ffplay",
            Self::Mpv => "mpv",
            Self::PowerShell => "powershell.exe",
        }
    }
}

impl fmt::Display for PlayerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Players to try on a platform, highest priority first
pub fn candidates(platform: Platform) -> &'static [PlayerTool] {
    match platform {
        Platform::MacOs => &[PlayerTool::Afplay],
        Platform::Linux => &[
            PlayerTool::Paplay,
            PlayerTool::Aplay,
            PlayerTool::Ffplay,
            PlayerTool::Mpv,
        ],
        Platform::Wsl | Platform::Windows => &[PlayerTool::PowerShell],
        Platform::Unknown => &[],
    }
}

/// Checks whether an executable can be run
#[async_trait]
pub trait ToolProbe: Send + Sync {
    async fn is_available(&self, program: &str) -> bool;
}

/// Probe using the system lookup command (`which`, or `where` on Windows)
pub struct WhichProbe;

#[async_trait]
impl ToolProbe for WhichProbe {
    async fn is_available(&self, program: &str) -> bool {
        let lookup = if cfg!(windows) { "where" } else { "which" };
        Command::new(lookup)
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Detect the first available player for the platform
pub async fn detect_player<P: ToolProbe + ?Sized>(
    platform: Platform,
    probe: &P,
) -> Option<PlayerTool> {
    for tool in candidates(platform) {
        if probe.is_available(tool.program()).await {
            return Some(*tool);
        }
    }
    None
}

/// Create the adapter for a specific player
pub fn create_player(tool: PlayerTool, platform: Platform) -> Box<dyn AudioBackend> {
    match tool {
        PlayerTool::Afplay => Box::new(AfplayPlayer::new()),
        PlayerTool::Paplay => Box::new(PaplayPlayer::new()),
        PlayerTool::Aplay => Box::new(AplayPlayer::new()),
        PlayerTool::Ffplay => Box::new(FfplayPlayer::new()),
        PlayerTool::Mpv => Box::new(MpvPlayer::new()),
        PlayerTool::PowerShell if platform == Platform::Wsl => Box::new(PowerShellPlayer::wsl()),
        PlayerTool::PowerShell => Box::new(PowerShellPlayer::windows()),
    }
}

/// Backend that probes for a player on first use and keeps the result
/// for the rest of the process.
pub struct DetectingAudioBackend<P: ToolProbe = WhichProbe> {
    platform: Platform,
    probe: P,
    player: OnceCell<Option<Box<dyn AudioBackend>>>,
}

impl DetectingAudioBackend {
    /// Detect players for the given platform with the system probe
    pub fn new(platform: Platform) -> Self {
        Self::with_probe(platform, WhichProbe)
    }
}

impl<P: ToolProbe> DetectingAudioBackend<P> {
    pub fn with_probe(platform: Platform, probe: P) -> Self {
        Self {
            platform,
            probe,
            player: OnceCell::new(),
        }
    }

    async fn player(&self) -> Option<&dyn AudioBackend> {
        self.player
            .get_or_init(|| async {
                let tool = detect_player(self.platform, &self.probe).await;
                tracing::debug!(platform = %self.platform, tool = ?tool, "Player detection");
                tool.map(|tool| create_player(tool, self.platform))
            })
            .await
            .as_deref()
    }
}

#[async_trait]
impl<P: ToolProbe> AudioBackend for DetectingAudioBackend<P> {
    fn name(&self) -> &str {
        self.player
            .get()
            .and_then(|player| player.as_ref())
            .map(|player| player.name())
            .unwrap_or("auto")
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        match self.player().await {
            Some(player) => player.play(path, volume).await,
            None => Err(AudioError::NoPlayerAvailable(self.platform.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeProbe {
        installed: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeProbe {
        fn with(installed: &[&'static str]) -> Self {
            Self {
                installed: installed.to_vec(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ToolProbe for FakeProbe {
        async fn is_available(&self, program: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.installed.iter().any(|p| *p == program)
        }
    }

    #[test]
    fn player_tool_display() {
        assert_eq!(PlayerTool::Afplay.to_string(), "afplay");
        assert_eq!(PlayerTool::Paplay.to_string(), "paplay");
        assert_eq!(PlayerTool::PowerShell.to_string(), "powershell.exe");
    }

    #[test]
    fn unknown_platform_has_no_candidates() {
        assert!(candidates(Platform::Unknown).is_empty());
    }

    #[tokio::test]
    async fn linux_prefers_paplay() {
        let probe = FakeProbe::with(&["mpv", "aplay", "paplay"]);
        assert_eq!(
            detect_player(Platform::Linux, &probe).await,
            Some(PlayerTool::Paplay)
        );
    }

    #[tokio::test]
    async fn linux_falls_back_in_order() {
        let probe = FakeProbe::with(&["mpv", "ffplay"]);
        assert_eq!(
            detect_player(Platform::Linux, &probe).await,
            Some(PlayerTool::Ffplay)
        );

        let probe = FakeProbe::with(&["mpv"]);
        assert_eq!(
            detect_player(Platform::Linux, &probe).await,
            Some(PlayerTool::Mpv)
        );
    }

    #[tokio::test]
    async fn linux_without_players() {
        let probe = FakeProbe::with(&["afplay"]);
        assert_eq!(detect_player(Platform::Linux, &probe).await, None);
    }

    #[tokio::test]
    async fn wsl_uses_powershell() {
        let probe = FakeProbe::with(&["paplay", "powershell.exe"]);
        assert_eq!(
            detect_player(Platform::Wsl, &probe).await,
            Some(PlayerTool::PowerShell)
        );
    }

    #[test]
    fn create_player_names() {
        assert_eq!(create_player(PlayerTool::Mpv, Platform::Linux).name(), "mpv");
        assert_eq!(
            create_player(PlayerTool::PowerShell, Platform::Wsl).name(),
            "powershell (wsl)"
        );
        assert_eq!(
            create_player(PlayerTool::PowerShell, Platform::Windows).name(),
            "powershell"
        );
    }

    #[tokio::test]
    async fn no_player_is_an_error_not_a_panic() {
        let backend = DetectingAudioBackend::with_probe(Platform::Linux, FakeProbe::with(&[]));

        let result = backend.play(Path::new("/p/oops.wav"), Volume::max()).await;

        assert!(matches!(result, Err(AudioError::NoPlayerAvailable(_))));
        assert_eq!(backend.name(), "auto");
    }

    #[tokio::test]
    async fn detection_runs_once() {
        let backend = DetectingAudioBackend::with_probe(Platform::Linux, FakeProbe::with(&[]));

        let _ = backend.play(Path::new("/p/a.wav"), Volume::max()).await;
        let _ = backend.play(Path::new("/p/b.wav"), Volume::max()).await;

        assert_eq!(backend.probe.calls.load(Ordering::SeqCst), 4);
    }
}
