use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::loading::{
    FINALISE_PHASE_LABEL, MODEL_LOADED_PERCENT, MODEL_PHASE_LABEL, READY_PERCENT,
    TEXTURE_PHASE_LABEL, TEXTURES_SETTLED_PERCENT,
};

/// Terminal result of one load attempt.
///
/// `Failed` is only produced by the model fetch; texture failures are
/// absorbed by the texture phase and still end in `Loaded`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadOutcome {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

/// Aggregated loading state consumed by every progress surface (RPC
/// notifications, the on-canvas overlay, the native terminal bar).
///
/// The percentage is monotonically non-decreasing: regressions are ignored,
/// and nothing moves once a failure is recorded.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    percent: u32,
    outcome: LoadOutcome,
}

impl LoadingProgress {
    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != LoadOutcome::Pending
    }

    /// Advance to `target` percent. Regressions and post-failure updates are
    /// ignored; values above 100 clamp.
    pub fn advance(&mut self, target: u32) {
        if matches!(self.outcome, LoadOutcome::Failed(_)) {
            return;
        }
        let target = target.min(READY_PERCENT);
        if target > self.percent {
            self.percent = target;
        }
    }

    /// Success path terminal: progress reaches 100 and the outcome locks.
    pub fn complete(&mut self) {
        self.advance(READY_PERCENT);
        if self.outcome == LoadOutcome::Pending {
            self.outcome = LoadOutcome::Loaded;
        }
    }

    /// Failure terminal: the outcome locks and progress is abandoned at its
    /// last value.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.outcome == LoadOutcome::Pending {
            self.outcome = LoadOutcome::Failed(reason.into());
        }
    }
}

/// Terminal failure path shared by every load boundary.
///
/// Records the failure outcome (freezing progress at its last value),
/// notifies the frontend, and hands the session to the fallback renderer.
/// Every path that sets `AppState::Fallback` on a failure goes through here
/// so no progress surface is left non-terminal.
pub fn abandon_to_fallback(
    reason: String,
    progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
    next_state: &mut NextState<AppState>,
) {
    error!("{reason}");
    progress.fail(reason.clone());
    rpc_interface.send_notification("load_failed", serde_json::json!({ "reason": reason }));
    next_state.set(AppState::Fallback);
}

/// Human-readable loading phase derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    pub percent: u32,
    pub label: &'static str,
}

/// Pure derivation from the fixed phase thresholds: `[0, 50)` model,
/// `[50, 90)` textures, `[90, 100]` finalisation.
pub fn report_phase(percent: u32) -> PhaseReport {
    let percent = percent.min(READY_PERCENT);
    let label = if percent < MODEL_LOADED_PERCENT {
        MODEL_PHASE_LABEL
    } else if percent < TEXTURES_SETTLED_PERCENT {
        TEXTURE_PHASE_LABEL
    } else {
        FINALISE_PHASE_LABEL
    };
    PhaseReport { percent, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_never_regresses() {
        let mut progress = LoadingProgress::default();
        progress.advance(50);
        progress.advance(10);
        assert_eq!(progress.percent(), 50);
        progress.advance(74);
        assert_eq!(progress.percent(), 74);
    }

    #[test]
    fn progress_clamps_to_one_hundred() {
        let mut progress = LoadingProgress::default();
        progress.advance(250);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn complete_locks_loaded_at_one_hundred() {
        let mut progress = LoadingProgress::default();
        progress.advance(90);
        progress.complete();
        assert_eq!(progress.percent(), 100);
        assert_eq!(*progress.outcome(), LoadOutcome::Loaded);
        assert!(progress.is_terminal());
    }

    #[test]
    fn failure_abandons_progress_at_last_value() {
        let mut progress = LoadingProgress::default();
        progress.advance(10);
        progress.fail("404 on scene.gltf");
        progress.advance(90);
        progress.complete();
        assert_eq!(progress.percent(), 10);
        assert_eq!(
            *progress.outcome(),
            LoadOutcome::Failed("404 on scene.gltf".to_string())
        );
    }

    #[test]
    fn texture_failures_do_not_block_completion() {
        // Two textures that both fail still settle the texture phase.
        let mut progress = LoadingProgress::default();
        progress.advance(MODEL_LOADED_PERCENT);
        progress.advance(MODEL_LOADED_PERCENT + 20);
        progress.advance(TEXTURES_SETTLED_PERCENT);
        progress.complete();
        assert_eq!(progress.percent(), 100);
        assert_eq!(*progress.outcome(), LoadOutcome::Loaded);
    }

    #[test]
    fn first_failure_reason_wins() {
        let mut progress = LoadingProgress::default();
        progress.fail("first");
        progress.fail("second");
        assert_eq!(*progress.outcome(), LoadOutcome::Failed("first".to_string()));
    }

    #[test]
    fn display_boundary_leaves_no_surface_non_terminal() {
        // A scene that instantiates with nothing renderable is discovered at
        // the 90% mark; the handover must still terminate the outcome so the
        // progress surfaces (terminal bar, RPC notifications) settle.
        let mut progress = LoadingProgress::default();
        progress.advance(TEXTURES_SETTLED_PERCENT);
        let mut rpc_interface = WebRpcInterface::default();
        let mut next_state = NextState::<AppState>::default();

        abandon_to_fallback(
            "instantiated vehicle scene has no renderable meshes".to_string(),
            &mut progress,
            &mut rpc_interface,
            &mut next_state,
        );

        assert!(progress.is_terminal());
        assert_eq!(progress.percent(), TEXTURES_SETTLED_PERCENT);
        assert!(matches!(
            *progress.outcome(),
            LoadOutcome::Failed(ref reason) if reason.contains("no renderable meshes")
        ));
        assert!(
            rpc_interface
                .pending_notifications()
                .iter()
                .any(|notification| notification.method == "load_failed")
        );
        assert!(matches!(next_state, NextState::Pending(AppState::Fallback)));
    }

    #[test]
    fn phase_labels_follow_fixed_thresholds() {
        assert_eq!(report_phase(0).label, MODEL_PHASE_LABEL);
        assert_eq!(report_phase(49).label, MODEL_PHASE_LABEL);
        assert_eq!(report_phase(50).label, TEXTURE_PHASE_LABEL);
        assert_eq!(report_phase(89).label, TEXTURE_PHASE_LABEL);
        assert_eq!(report_phase(90).label, FINALISE_PHASE_LABEL);
        assert_eq!(report_phase(100).label, FINALISE_PHASE_LABEL);
    }

    #[test]
    fn phase_report_clamps_percent() {
        let report = report_phase(140);
        assert_eq!(report.percent, 100);
        assert_eq!(report.label, FINALISE_PHASE_LABEL);
    }
}
