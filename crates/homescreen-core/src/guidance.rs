#![forbid(unsafe_code)]

//! Manual install instructions for platforms without a native prompt.

use serde::{Deserialize, Serialize};

use crate::env::Platform;

/// Which set of manual instructions the overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guidance {
    /// iOS / iPadOS: install through the Share sheet.
    AddToHomeScreen,
    /// macOS Safari: install through the toolbar Share menu.
    AddToDock,
}

impl Guidance {
    /// Instructions for `platform`, or `None` where the native prompt is
    /// the right path.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::Ios | Platform::Ipados => Some(Self::AddToHomeScreen),
            Platform::Macos => Some(Self::AddToDock),
            Platform::Other => None,
        }
    }

    /// Overlay heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        "Install this app"
    }

    /// Instruction copy.
    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::AddToHomeScreen => {
                "Tap the Share button, then choose \u{201c}Add to Home Screen\u{201d}."
            }
            Self::AddToDock => {
                "Click the Share button in the toolbar, then choose \u{201c}Add to Dock\u{201d}."
            }
        }
    }
}
