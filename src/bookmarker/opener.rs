use crate::error::{BookmarkerError, Result};
use std::cell::RefCell;
use std::process::{Command, Stdio};

/// Opens a saved page's address somewhere the user can read it.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the platform's default handler.
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut command = platform_command(url)?;
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| BookmarkerError::Api(format!("Failed to launch browser: {}", e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(BookmarkerError::Api(format!(
                "Browser launcher exited with {}",
                status
            )))
        }
    }
}

fn platform_command(url: &str) -> Result<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        Ok(cmd)
    }

    #[cfg(target_os = "linux")]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        Ok(cmd)
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        Ok(cmd)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = url;
        Err(BookmarkerError::Api(
            "Opening links is not supported on this platform".to_string(),
        ))
    }
}

/// Does not open anything; remembers what it was asked to open. Used when
/// the user only wants the address printed, and by tests.
#[derive(Debug, Default)]
pub struct NoopOpener {
    opened: RefCell<Vec<String>>,
}

impl NoopOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for NoopOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
