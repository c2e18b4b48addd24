//! Property-based invariants for platform classification and the install
//! controller.
//!
//! Verifies:
//! 1.  classify is total: any snapshot classifies without panicking
//! 2.  an iPhone-token user agent off the MacIntel platform is always Ios
//! 3.  MacIntel with multi-touch is always Ipados, never Macos
//! 4.  standalone environments never schedule the proactive reveal
//! 5.  event sequences: ShowButton is never emitted while a button is up
//! 6.  a stored handle implies the Armed state
//! 7.  installed() always leaves no handle and no button, in any state
//! 8.  Platform/Outcome/Guidance survive a JSON round trip
//! 9.  InstallOptions survive a JSON round trip for arbitrary field values
//! 10. prompt_settled always clears the button flag and removes the button

use homescreen_core::{
    Effect, EnvSnapshot, Guidance, InstallController, InstallOptions, Outcome, Platform,
    PromptState,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_user_agent() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".to_string()),
        Just("Mozilla/5.0 (iPad; CPU OS 12_5 like Mac OS X)".to_string()),
        Just("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string()),
        Just("Mozilla/5.0 (X11; Linux x86_64) Chrome/126.0".to_string()),
        Just("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/126.0".to_string()),
        "[ -~]{0,64}",
    ]
}

fn arb_platform_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MacIntel".to_string()),
        Just("iPhone".to_string()),
        Just("iPad".to_string()),
        Just("Win32".to_string()),
        Just("Linux x86_64".to_string()),
        "[a-zA-Z0-9 ]{0,16}",
    ]
}

fn arb_env() -> impl Strategy<Value = EnvSnapshot> {
    (
        arb_user_agent(),
        arb_platform_string(),
        0u32..6,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(user_agent, platform, max_touch_points, display_mode_standalone, navigator_standalone)| {
                EnvSnapshot {
                    user_agent,
                    platform,
                    max_touch_points,
                    display_mode_standalone,
                    navigator_standalone,
                }
            },
        )
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Startup,
    Reveal,
    CanInstall,
    Click { accept: bool },
    Installed,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Startup),
        Just(Op::Reveal),
        Just(Op::CanInstall),
        any::<bool>().prop_map(|accept| Op::Click { accept }),
        Just(Op::Installed),
    ]
}

/// Apply effects to a one-button DOM model, returning any prompted handle.
fn apply_to_dom(
    effects: &[Effect<u32>],
    platform: Platform,
    visible: &mut u8,
) -> Result<Option<u32>, TestCaseError> {
    let mut prompted = None;
    for effect in effects {
        match effect {
            Effect::ShowButton => {
                prop_assert_eq!(*visible, 0, "ShowButton while a button is already up");
                *visible = 1;
            }
            Effect::RemoveButton => *visible = 0,
            Effect::RunPrompt(handle) => prompted = Some(*handle),
            Effect::ShowGuidance(_) => {
                prop_assert!(platform.is_apple(), "guidance on a prompting platform");
            }
            Effect::ScheduleReveal { .. } => {}
        }
    }
    Ok(prompted)
}

proptest! {
    // Invariants 1–3: classification.
    #[test]
    fn classification_is_total_and_respects_the_heuristics(env in arb_env()) {
        let platform = Platform::classify(&env);
        if env.user_agent.contains("iPhone") && env.platform != "MacIntel" {
            prop_assert_eq!(platform, Platform::Ios);
        }
        if env.platform == "MacIntel" && env.max_touch_points > 1 {
            prop_assert_eq!(platform, Platform::Ipados);
        }
    }

    // Invariant 4.
    #[test]
    fn standalone_never_schedules(mut env in arb_env(), via_flag in any::<bool>()) {
        if via_flag {
            env.navigator_standalone = true;
        } else {
            env.display_mode_standalone = true;
        }
        let mut controller = InstallController::<u32>::new(&env, 500);
        prop_assert!(controller.startup().is_empty());
    }

    // Invariants 5–7 and 10: arbitrary signal sequences.
    #[test]
    fn sequences_preserve_button_and_handle_invariants(
        env in arb_env(),
        ops in proptest::collection::vec(arb_op(), 0..24),
    ) {
        let mut controller = InstallController::<u32>::new(&env, 500);
        let platform = controller.platform();
        let mut visible = 0u8;
        let mut next_handle = 0u32;

        for op in ops {
            let effects = match op {
                Op::Startup => controller.startup(),
                Op::Reveal => controller.reveal_elapsed(),
                Op::CanInstall => {
                    next_handle += 1;
                    controller.can_install(next_handle)
                }
                Op::Click { accept } => {
                    let effects = controller.button_activated();
                    let prompted = apply_to_dom(&effects, platform, &mut visible)?;
                    if prompted.is_some() {
                        let outcome = if accept {
                            Outcome::Accepted
                        } else {
                            Outcome::Dismissed
                        };
                        let settle = controller.prompt_settled(outcome);
                        prop_assert!(settle.contains(&Effect::RemoveButton));
                        apply_to_dom(&settle, platform, &mut visible)?;
                        prop_assert!(!controller.is_button_shown());
                        prop_assert!(!controller.has_deferred());
                    }
                    continue;
                }
                Op::Installed => {
                    let effects = controller.installed();
                    apply_to_dom(&effects, platform, &mut visible)?;
                    prop_assert!(!controller.has_deferred());
                    prop_assert!(!controller.is_button_shown());
                    prop_assert_eq!(controller.state(), PromptState::Consumed);
                    continue;
                }
            };
            apply_to_dom(&effects, platform, &mut visible)?;
            prop_assert!(visible <= 1);
            if controller.has_deferred() {
                prop_assert_eq!(controller.state(), PromptState::Armed);
            }
        }
    }

    // Invariant 8.
    #[test]
    fn vocabulary_enums_round_trip_json(env in arb_env()) {
        let platform = Platform::classify(&env);
        let json = serde_json::to_string(&platform).expect("serialize");
        prop_assert_eq!(
            serde_json::from_str::<Platform>(&json).expect("deserialize"),
            platform
        );

        for outcome in [Outcome::Accepted, Outcome::Dismissed] {
            let json = serde_json::to_string(&outcome).expect("serialize");
            prop_assert_eq!(
                serde_json::from_str::<Outcome>(&json).expect("deserialize"),
                outcome
            );
            prop_assert_eq!(Outcome::parse(outcome.as_str()), Some(outcome));
        }

        if let Some(guidance) = Guidance::for_platform(platform) {
            let json = serde_json::to_string(&guidance).expect("serialize");
            prop_assert_eq!(
                serde_json::from_str::<Guidance>(&json).expect("deserialize"),
                guidance
            );
        }
    }

    // Invariant 9.
    #[test]
    fn options_round_trip_json(
        service_worker_path in "[ -~]{0,32}",
        container_id in "[a-z-]{1,16}",
        button_id in "[a-z-]{1,16}",
        button_label in "[ -~]{0,32}",
        reveal_delay_ms in 0u32..60_000,
    ) {
        let options = InstallOptions {
            service_worker_path,
            container_id,
            button_id,
            button_label,
            reveal_delay_ms,
        };
        let json = options.to_json_string().expect("serialize");
        prop_assert_eq!(InstallOptions::from_json_str(&json).expect("deserialize"), options);
    }
}
