#![forbid(unsafe_code)]

//! Install-prompt state machine.
//!
//! The controller owns all transient install-affordance state for one page
//! session: the prompt lifecycle ([`PromptState`]), the deferred capability
//! handle, and button visibility. The host forwards platform signals and
//! executes the [`Effect`]s each transition returns. Nothing here touches
//! the DOM, schedules a timer, or awaits a promise.
//!
//! The handle type `P` is generic so the wasm frontend can store the real
//! `beforeinstallprompt` event object while native tests substitute a mock.

use serde::{Deserialize, Serialize};

use crate::env::{EnvSnapshot, Platform};
use crate::guidance::Guidance;

/// Lifecycle of the native install capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptState {
    /// No deferred capability held.
    Idle,
    /// Capability held, button visible.
    Armed,
    /// Capability used or invalidated.
    Consumed,
}

/// The user's answer to the native install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Dismissed,
}

impl Outcome {
    /// Parse the platform's `userChoice.outcome` string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(Self::Accepted),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }

    /// Stable lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Dismissed => "dismissed",
        }
    }
}

/// Work the host must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<P> {
    /// Start the fire-once proactive reveal timer.
    ScheduleReveal {
        /// Delay before [`InstallController::reveal_elapsed`] should fire.
        delay_ms: u32,
    },
    /// Render the install button. The host render is idempotent by element
    /// id on top of the controller's own visibility guard.
    ShowButton,
    /// Remove the install button; a no-op if none exists.
    RemoveButton,
    /// Invoke the native prompt on the handle and report the user's answer
    /// back through [`InstallController::prompt_settled`].
    RunPrompt(P),
    /// Open the manual-instructions overlay.
    ShowGuidance(Guidance),
}

/// Owns all transient install-affordance state for one page session.
#[derive(Debug)]
pub struct InstallController<P> {
    state: PromptState,
    deferred: Option<P>,
    button_shown: bool,
    platform: Platform,
    standalone: bool,
    reveal_delay_ms: u32,
}

impl<P> InstallController<P> {
    /// Build a controller from a captured environment snapshot.
    ///
    /// Platform classification and the standalone check happen once, here;
    /// the snapshot itself is not retained.
    #[must_use]
    pub fn new(env: &EnvSnapshot, reveal_delay_ms: u32) -> Self {
        Self {
            state: PromptState::Idle,
            deferred: None,
            button_shown: false,
            platform: Platform::classify(env),
            standalone: env.is_standalone(),
            reveal_delay_ms,
        }
    }

    /// Current prompt lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PromptState {
        self.state
    }

    /// Classified platform, fixed at construction.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether a deferred capability handle is currently stored.
    #[must_use]
    pub const fn has_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    /// Whether the controller believes the button is rendered.
    #[must_use]
    pub const fn is_button_shown(&self) -> bool {
        self.button_shown
    }

    /// Startup decision for platforms that never emit the native signal.
    ///
    /// Schedules the proactive reveal unless the app already runs
    /// standalone or the platform will get the native prompt instead. This
    /// is the only path that can lead to a button with no armed capability
    /// behind it.
    pub fn startup(&mut self) -> Vec<Effect<P>> {
        if self.standalone || !self.platform.is_apple() {
            return Vec::new();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            platform = self.platform.name(),
            delay_ms = self.reveal_delay_ms,
            "scheduling proactive install button"
        );
        vec![Effect::ScheduleReveal {
            delay_ms: self.reveal_delay_ms,
        }]
    }

    /// The proactive reveal timer elapsed.
    ///
    /// Timers are never cancelled; a firing that arrives after the button
    /// already exists, or after an install, is absorbed here.
    pub fn reveal_elapsed(&mut self) -> Vec<Effect<P>> {
        if self.button_shown || matches!(self.state, PromptState::Consumed) {
            return Vec::new();
        }
        self.button_shown = true;
        vec![Effect::ShowButton]
    }

    /// The platform announced native install support.
    ///
    /// The host has already suppressed the default install UI so the custom
    /// button is the sole entry point. The handle is stored until the user
    /// activates the button; a repeat signal replaces the stored handle,
    /// since the superseded one can no longer be prompted.
    pub fn can_install(&mut self, handle: P) -> Vec<Effect<P>> {
        if self.deferred.is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!("install signal while armed; replacing stored prompt handle");
        }
        self.deferred = Some(handle);
        self.state = PromptState::Armed;
        if self.button_shown {
            return Vec::new();
        }
        self.button_shown = true;
        vec![Effect::ShowButton]
    }

    /// The user activated the install button.
    ///
    /// With a stored handle this runs the native prompt; the handle is
    /// cleared before the prompt runs so a second activation cannot
    /// re-trigger it. Without one (the Apple path) it opens the
    /// instructions overlay instead.
    pub fn button_activated(&mut self) -> Vec<Effect<P>> {
        match self.deferred.take() {
            Some(handle) => {
                self.state = PromptState::Consumed;
                vec![Effect::RunPrompt(handle)]
            }
            None => match Guidance::for_platform(self.platform) {
                Some(guidance) if !self.standalone => {
                    vec![Effect::ShowGuidance(guidance)]
                }
                _ => Vec::new(),
            },
        }
    }

    /// The awaited user choice arrived from the native prompt.
    ///
    /// The button comes down regardless of the answer; the host logs the
    /// outcome.
    pub fn prompt_settled(&mut self, outcome: Outcome) -> Vec<Effect<P>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(outcome = outcome.as_str(), "install prompt settled");
        let _ = outcome;
        self.button_shown = false;
        vec![Effect::RemoveButton]
    }

    /// The platform reported the app installed.
    ///
    /// Safe in any state, with or without a visible button; the host's
    /// removal is existence-checked.
    pub fn installed(&mut self) -> Vec<Effect<P>> {
        self.deferred = None;
        self.state = PromptState::Consumed;
        self.button_shown = false;
        vec![Effect::RemoveButton]
    }
}
