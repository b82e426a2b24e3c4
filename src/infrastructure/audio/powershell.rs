//! PowerShell MediaPlayer bridge (WSL and native Windows)
//!
//! Plays through `System.Windows.Media.MediaPlayer` inside a short
//! PowerShell script. Under WSL the Linux path is first translated with
//! `wslpath -w` so the Windows side can open it.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// How file paths reach the Windows side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Linux path inside WSL, needs `wslpath -w`
    Wsl,
    /// Already a Windows path
    Windows,
}

/// PowerShell bridge player
pub struct PowerShellPlayer {
    style: PathStyle,
}

impl PowerShellPlayer {
    /// Create a bridge for the given path style
    pub fn new(style: PathStyle) -> Self {
        Self { style }
    }

    /// Bridge for WSL
    pub fn wsl() -> Self {
        Self::new(PathStyle::Wsl)
    }

    /// Bridge for native Windows
    pub fn windows() -> Self {
        Self::new(PathStyle::Windows)
    }

    /// Build the invocation for a path already in Windows form
    pub fn command(&self, windows_path: &str, volume: Volume) -> PlayerCommand {
        PlayerCommand::new("powershell.exe")
            .arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(media_player_script(windows_path, volume))
    }

    async fn windows_path(&self, path: &Path) -> Result<String, AudioError> {
        match self.style {
            PathStyle::Windows => Ok(path.to_string_lossy().into_owned()),
            PathStyle::Wsl => wslpath(path).await,
        }
    }
}

/// PowerShell script that opens the file as a URI and plays it for a few seconds.
fn media_player_script(windows_path: &str, volume: Volume) -> String {
    // Forward slashes for the URI, doubled quotes for the single-quoted literal
    let uri_path = windows_path.replace('\\', "/").replace('\'', "''");
    format!(
        "Add-Type -AssemblyName PresentationCore; \
         $p = New-Object System.Windows.Media.MediaPlayer; \
         $p.Open([Uri]::new('file:///{uri_path}')); \
         $p.Volume = {volume}; \
         Start-Sleep -Milliseconds 200; \
         $p.Play(); \
         Start-Sleep -Seconds 3; \
         $p.Close()"
    )
}

/// Translate a WSL path to its Windows form
async fn wslpath(path: &Path) -> Result<String, AudioError> {
    let output = Command::new("wslpath")
        .arg("-w")
        .arg(path)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| AudioError::PathTranslation(e.to_string()))?;

    if !output.status.success() {
        return Err(AudioError::PathTranslation(format!(
            "wslpath exited with status: {}",
            output.status
        )));
    }

    let translated = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if translated.is_empty() {
        return Err(AudioError::PathTranslation(
            "wslpath returned an empty path".to_string(),
        ));
    }
    Ok(translated)
}

#[async_trait]
impl AudioBackend for PowerShellPlayer {
    fn name(&self) -> &str {
        match self.style {
            PathStyle::Wsl => "powershell (wsl)",
            PathStyle::Windows => "powershell",
        }
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        let windows_path = self.windows_path(path).await?;
        self.command(&windows_path, volume).spawn_detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_uses_forward_slash_uri_and_volume() {
        let script = media_player_script(r"C:\Users\peon\packs\peon\sounds\oops.wav", Volume::new(0.5));

        assert!(script.contains("[Uri]::new('file:///C:/Users/peon/packs/peon/sounds/oops.wav')"));
        assert!(script.contains("$p.Volume = 0.5;"));
        assert!(script.starts_with("Add-Type -AssemblyName PresentationCore;"));
        assert!(script.ends_with("$p.Close()"));
    }

    #[test]
    fn script_escapes_single_quotes() {
        let script = media_player_script(r"C:\Peon's\oops.wav", Volume::max());
        assert!(script.contains("'file:///C:/Peon''s/oops.wav'"));
    }

    #[test]
    fn command_runs_non_interactive() {
        let command = PowerShellPlayer::wsl().command(r"C:\a.wav", Volume::max());

        assert_eq!(command.program, "powershell.exe");
        assert_eq!(&command.args[..3], &["-NoProfile", "-NonInteractive", "-Command"]);
        assert!(command.args[3].contains("file:///C:/a.wav"));
    }

    #[tokio::test]
    async fn windows_style_keeps_path() {
        let player = PowerShellPlayer::windows();
        let path = player.windows_path(Path::new(r"C:\a.wav")).await.unwrap();
        assert_eq!(path, r"C:\a.wav");
    }
}
