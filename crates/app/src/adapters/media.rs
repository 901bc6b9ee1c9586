use anyhow::{Context, Result};
use keepsake_core::ports::{MediaPort, MediaState, VideoConfig};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

/// Plays a clip by running an external player as a child process.
///
/// A running child means playing; once it exits the media counts as paused.
pub struct ProcessPlayer {
    program: String,
    args: Vec<String>,
    clip: PathBuf,
    child: Option<Child>,
}

impl ProcessPlayer {
    pub fn new(config: &VideoConfig, clip: impl AsRef<Path>) -> Self {
        Self {
            program: config.player.clone(),
            args: config.args.clone(),
            clip: clip.as_ref().to_path_buf(),
            child: None,
        }
    }
}

impl MediaPort for ProcessPlayer {
    fn play(&mut self) -> Result<()> {
        if self.child.is_some() {
            return Ok(());
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch {} for {}", self.program, self.clip.display()))?;

        info!("Launched {} (pid {}) for {}", self.program, child.id(), self.clip.display());
        self.child = Some(child);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            child.kill().context("Failed to stop video player")?;
            let _ = child.wait();
            debug!("Video player stopped");
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.child.is_none()
    }

    fn poll(&mut self) -> Option<MediaState> {
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(None) => None,
            Ok(Some(status)) => {
                debug!("Video player exited: {}", status);
                self.child = None;
                Some(MediaState::Paused)
            }
            Err(e) => {
                warn!("Failed to poll video player: {}", e);
                self.child = None;
                Some(MediaState::Paused)
            }
        }
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        if let Err(e) = self.pause() {
            warn!("{:#}", e);
        }
    }
}
