use bevy::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::engine::loading::progress::{LoadOutcome, LoadingProgress, report_phase};

/// Mirrors `LoadingProgress` onto a terminal bar for native runs.
#[derive(Resource)]
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl Default for TerminalProgress {
    fn default() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        Self { bar }
    }
}

pub fn update_terminal_progress(
    loading_progress: Res<LoadingProgress>,
    terminal: Res<TerminalProgress>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    let report = report_phase(loading_progress.percent());
    terminal.bar.set_position(u64::from(report.percent));
    terminal.bar.set_message(report.label);

    match loading_progress.outcome() {
        LoadOutcome::Loaded => terminal.bar.finish_with_message("Showcase ready"),
        LoadOutcome::Failed(_) => terminal.bar.abandon_with_message("Falling back to placeholder"),
        LoadOutcome::Pending => {}
    }
}
