//! The page being captured comes from outside the core: a browser tab, CLI
//! flags, or a test fixture. [`CaptureSource`] is that seam.

use std::env;

pub const TAB_URL_ENV: &str = "BOOKMARKER_TAB_URL";
pub const TAB_TITLE_ENV: &str = "BOOKMARKER_TAB_TITLE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTab {
    pub url: String,
    pub title: String,
}

pub trait CaptureSource {
    /// The page to capture, or `None` when no page is available.
    fn active_tab(&self) -> Option<ActiveTab>;
}

/// A tab described up front, e.g. by command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct GivenTab {
    url: Option<String>,
    title: Option<String>,
}

impl GivenTab {
    pub fn new(url: Option<String>, title: Option<String>) -> Self {
        Self { url, title }
    }

    /// Fills whatever was not given from `BOOKMARKER_TAB_URL` and
    /// `BOOKMARKER_TAB_TITLE`.
    pub fn or_env(self) -> Self {
        Self {
            url: self.url.or_else(|| env::var(TAB_URL_ENV).ok()),
            title: self.title.or_else(|| env::var(TAB_TITLE_ENV).ok()),
        }
    }
}

impl CaptureSource for GivenTab {
    fn active_tab(&self) -> Option<ActiveTab> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        // Pages without a title are saved under their address.
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(url);
        Some(ActiveTab {
            url: url.to_string(),
            title: title.to_string(),
        })
    }
}
