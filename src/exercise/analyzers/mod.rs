//! Per-exercise analyzers.
//!
//! Each analyzer is a static table entry: the joints it needs, the confidence
//! gate, a feature extractor that reduces a frame to [`Signals`], and the
//! [`Hysteresis`] machine with its cue literals. Analysis is a pure function of
//! `(frame, previous phase)`.

mod basic;
mod crossfit;
mod features;
mod olympic;

#[cfg(test)]
pub(crate) mod testing;

use log::trace;

use crate::pose::{JointFrame, JointId};

use super::catalog::ExerciseKind;
use super::hysteresis::{Hysteresis, Signals};
use super::phase::{AnalysisResult, ExercisePhase};

pub(crate) const FULL_BODY_GUIDANCE: &str = "Position your full body in frame";
pub(crate) const UPPER_BODY_GUIDANCE: &str = "Position your upper body in frame";

pub struct Analyzer {
    pub kind: ExerciseKind,
    /// Joints that must be present, at any confidence.
    pub required: &'static [JointId],
    /// Subset of `required` that must also reach `min_confidence`.
    pub gated: &'static [JointId],
    pub min_confidence: f64,
    /// Feedback shown when the visibility gate fails.
    pub guidance: &'static str,
    pub extract: fn(&JointFrame) -> Option<Signals>,
    pub machine: Hysteresis,
}

impl Analyzer {
    pub fn analyze(&self, frame: &JointFrame, phase: ExercisePhase) -> AnalysisResult {
        if !frame.all_present(self.required) || !frame.all_visible(self.gated, self.min_confidence)
        {
            return AnalysisResult::out_of_frame(phase, self.guidance);
        }

        let Some(signals) = (self.extract)(frame) else {
            return AnalysisResult::out_of_frame(phase, self.guidance);
        };

        trace!(
            "{} signals entry={} exit={} from {}",
            self.kind.id(),
            signals.entry,
            signals.exit,
            phase.as_str()
        );

        self.machine.advance(phase, signals)
    }
}

/// Dispatch table from exercise to its analyzer.
pub fn analyzer_for(kind: ExerciseKind) -> &'static Analyzer {
    match kind {
        ExerciseKind::Squats => &basic::SQUATS,
        ExerciseKind::Pushups => &basic::PUSHUPS,
        ExerciseKind::Plank => &basic::PLANK,
        ExerciseKind::Lunges => &basic::LUNGES,
        ExerciseKind::JumpingJacks => &basic::JUMPING_JACKS,
        ExerciseKind::Burpees => &crossfit::BURPEES,
        ExerciseKind::Deadlifts => &crossfit::DEADLIFTS,
        ExerciseKind::KettlebellSwings => &crossfit::KETTLEBELL_SWINGS,
        ExerciseKind::BoxJumps => &crossfit::BOX_JUMPS,
        ExerciseKind::WallBalls => &crossfit::WALL_BALLS,
        ExerciseKind::Thrusters => &crossfit::THRUSTERS,
        ExerciseKind::CleanAndJerk => &olympic::CLEAN_AND_JERK,
        ExerciseKind::Snatches => &olympic::SNATCHES,
        ExerciseKind::DoubleUnders => &crossfit::DOUBLE_UNDERS,
        ExerciseKind::PullUps => &crossfit::PULL_UPS,
    }
}

pub fn analyze(kind: ExerciseKind, frame: &JointFrame, phase: ExercisePhase) -> AnalysisResult {
    analyzer_for(kind).analyze(frame, phase)
}
