#![forbid(unsafe_code)]

//! Core: platform classification, the install-prompt state machine, and
//! manual-install guidance.
//!
//! Design goals:
//! - **Host-driven**: the embedding frontend pushes platform signals in
//!   (`beforeinstallprompt`, `appinstalled`, clicks, elapsed timers) and
//!   executes the [`Effect`]s each transition returns.
//! - **No DOM, no timers, no promises**: all of that stays in the host, so
//!   every install-flow scenario replays as a plain unit test on native
//!   targets.
//! - **Pure detection**: platform sniffing is a total function over an
//!   [`EnvSnapshot`], testable with synthetic inputs.

pub mod controller;
pub mod env;
pub mod guidance;
pub mod options;

pub use controller::{Effect, InstallController, Outcome, PromptState};
pub use env::{EnvSnapshot, Platform};
pub use guidance::Guidance;
pub use options::{InstallOptions, OptionsError};
