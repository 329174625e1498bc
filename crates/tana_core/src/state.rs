use crate::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipPhase {
    #[default]
    Idle,
    Building,
    Copying,
}

/// Clip session state. Holds the stored options; per-request overrides are
/// merged into the effect payload and never written back here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipState {
    options: Options,
    phase: ClipPhase,
    last_outline: Option<String>,
    copies: usize,
    failures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipView {
    pub phase: ClipPhase,
    pub options: Options,
    pub last_outline: Option<String>,
    pub copies: usize,
    pub failures: usize,
}

impl ClipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ClipView {
        ClipView {
            phase: self.phase,
            options: self.options.clone(),
            last_outline: self.last_outline.clone(),
            copies: self.copies,
            failures: self.failures,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn phase(&self) -> ClipPhase {
        self.phase
    }

    pub(crate) fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub(crate) fn begin_build(&mut self) {
        self.phase = ClipPhase::Building;
    }

    pub(crate) fn begin_copy(&mut self, outline: String) {
        self.last_outline = Some(outline);
        self.phase = ClipPhase::Copying;
    }

    pub(crate) fn finish(&mut self, succeeded: bool) {
        self.phase = ClipPhase::Idle;
        if succeeded {
            self.copies += 1;
        } else {
            self.failures += 1;
        }
    }
}
