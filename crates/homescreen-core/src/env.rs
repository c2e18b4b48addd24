#![forbid(unsafe_code)]

//! Environment snapshot and platform classification.
//!
//! Detection is string sniffing by nature and therefore fragile; it is
//! confined to [`Platform::classify`], a pure function over a plain-data
//! [`EnvSnapshot`], so the heuristics can be pinned down with synthetic
//! inputs instead of a live browser.

use serde::{Deserialize, Serialize};

/// User-agent substrings identifying iOS-class devices.
const IOS_DEVICE_TOKENS: [&str; 3] = ["iPhone", "iPad", "iPod"];

/// Platform string reported by iPad browsers that masquerade as desktop
/// Macs.
const DESKTOP_MAC_PLATFORM: &str = "MacIntel";

/// Point-in-time snapshot of the environment signals classification reads.
///
/// Captured once by the frontend from `navigator` and `matchMedia`, or
/// built synthetically in tests. All fields are plain data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// `navigator.userAgent`.
    pub user_agent: String,
    /// `navigator.platform`.
    pub platform: String,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: u32,
    /// `matchMedia("(display-mode: standalone)")` result.
    pub display_mode_standalone: bool,
    /// The nonstandard `navigator.standalone` flag (Safari only).
    pub navigator_standalone: bool,
}

impl EnvSnapshot {
    /// Whether the app is already running as an installed/standalone app.
    ///
    /// Either signal alone is sufficient: Safari reports the navigator
    /// flag, everything else the display-mode media query.
    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        self.display_mode_standalone || self.navigator_standalone
    }
}

/// Classified host platform.
///
/// The three Apple variants never emit the native "can install" signal and
/// get manual instructions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Ipados,
    Macos,
    Other,
}

impl Platform {
    /// Classify the environment.
    ///
    /// Order matters: the iPadOS heuristic runs first (iPad browsers report
    /// the desktop Mac platform string but expose multi-touch), then the
    /// iOS device tokens, then the Mac platform prefix.
    #[must_use]
    pub fn classify(env: &EnvSnapshot) -> Self {
        if env.platform == DESKTOP_MAC_PLATFORM && env.max_touch_points > 1 {
            return Self::Ipados;
        }
        if IOS_DEVICE_TOKENS
            .iter()
            .any(|token| env.user_agent.contains(token))
        {
            return Self::Ios;
        }
        if env.platform.starts_with("Mac") {
            return Self::Macos;
        }
        Self::Other
    }

    /// True for the platforms that never emit the native install signal.
    #[must_use]
    pub const fn is_apple(self) -> bool {
        matches!(self, Self::Ios | Self::Ipados | Self::Macos)
    }

    /// Stable lowercase name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Ipados => "ipados",
            Self::Macos => "macos",
            Self::Other => "other",
        }
    }
}
