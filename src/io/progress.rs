//! Multi-apparatus progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Progress of one apparatus: display name, finished stages, total stages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ApparatusState {
    name: String,
    stage: usize,
    stages: usize,
}

/// Coordinates progress display for a run of several apparatuses
///
/// Shows one bar per apparatus for small runs. Larger runs get an overall batch bar
/// above a rolling window of the most recent apparatuses.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    apparatus_bars: Vec<ProgressBar>,
    states: Vec<ApparatusState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Apparatuses: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            apparatus_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Initialize progress bars for `count` apparatuses
    pub fn initialize(&mut self, count: usize) {
        // Switch to batch mode for large runs to avoid terminal spam
        if count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STAGE_STYLE.clone());
            self.apparatus_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking apparatus `index`, which will pass through `stages` stages
    pub fn start(&mut self, index: usize, name: &str, stages: usize) {
        if index >= self.states.len() {
            self.states.resize(index + 1, ApparatusState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = ApparatusState {
                name: name.to_string(),
                stage: 0,
                stages,
            };
        }
        self.update_bars();
    }

    /// Mark one more stage of apparatus `index` as done
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.stage = (state.stage + 1).min(state.stages);
        }
        self.update_bars();
    }

    /// Mark apparatus `index` as completed and update batch progress
    pub fn complete(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.stage = state.stages;
        }
        self.update_bars();
    }

    /// Finished stages of apparatus `index`, if it has been started
    pub fn stage(&self, index: usize) -> Option<usize> {
        self.states
            .get(index)
            .filter(|state| !state.name.is_empty())
            .map(|state| state.stage)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All apparatuses generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Point the bars at the most recently started apparatuses
    fn update_bars(&self) {
        let active: Vec<&ApparatusState> = self
            .states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, state) in visible.iter().enumerate() {
            if let Some(bar) = self.apparatus_bars.get(bar_index) {
                bar.set_length(state.stages as u64);
                bar.set_position(state.stage as u64);
                bar.set_message(format!("{}/{}", state.stage, state.stages));
                bar.set_prefix(state.name.clone());
            }
        }

        for bar in self.apparatus_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
