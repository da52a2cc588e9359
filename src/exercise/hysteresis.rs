//! Two-predicate hysteresis machine shared by every exercise.
//!
//! Each exercise reduces a frame to two booleans, checked in priority order:
//! `entry` moves the subject into the entry phase, `exit` moves them back out,
//! but only from the entry phase. A predicate that re-fires in the phase it
//! already produced changes nothing, so a rep can never be counted twice
//! without passing through the contrasting phase first.

use super::phase::{AnalysisResult, Cue, ExercisePhase};

/// Predicate values extracted from one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub entry: bool,
    pub exit: bool,
}

impl Signals {
    pub const fn new(entry: bool, exit: bool) -> Self {
        Self { entry, exit }
    }
}

/// A phase change and the cue emitted when it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub phase: ExercisePhase,
    pub counts_rep: bool,
    pub cue: Cue,
}

impl Step {
    pub const fn to(phase: ExercisePhase, cue: Cue) -> Self {
        Self {
            phase,
            counts_rep: false,
            cue,
        }
    }

    /// Marks this step as the one that completes a repetition.
    pub const fn counting(self) -> Self {
        Self {
            counts_rep: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hysteresis {
    pub entry: Step,
    /// Cue while `entry` holds and the subject is already in the entry phase.
    pub entry_hold: Option<Cue>,
    pub exit: Step,
    /// Cue while `exit` holds but the subject never reached the entry phase.
    pub stalled: Option<Cue>,
    /// Cue when neither predicate holds.
    pub between: Cue,
}

impl Hysteresis {
    pub fn advance(&self, phase: ExercisePhase, signals: Signals) -> AnalysisResult {
        if signals.entry {
            if phase != self.entry.phase {
                self.fire(&self.entry)
            } else {
                self.hold(phase, self.entry_hold)
            }
        } else if signals.exit {
            if phase == self.entry.phase {
                self.fire(&self.exit)
            } else {
                self.hold(phase, self.stalled)
            }
        } else {
            self.hold(phase, Some(self.between))
        }
    }

    fn fire(&self, step: &Step) -> AnalysisResult {
        AnalysisResult {
            in_frame: true,
            phase: step.phase,
            rep_delta: u32::from(step.counts_rep),
            cue: Some(step.cue),
        }
    }

    fn hold(&self, phase: ExercisePhase, cue: Option<Cue>) -> AnalysisResult {
        AnalysisResult {
            in_frame: true,
            phase,
            rep_delta: 0,
            cue,
        }
    }
}
