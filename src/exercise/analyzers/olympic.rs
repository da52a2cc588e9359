//! Olympic lifts.

use crate::exercise::catalog::ExerciseKind;
use crate::exercise::hysteresis::{Hysteresis, Signals, Step};
use crate::exercise::phase::{Cue, ExercisePhase::*};
use crate::pose::{JointFrame, JointId::*};

use super::features::{elbow_angle, is_overhead, knee_angle_vertical, Side};
use super::{Analyzer, FULL_BODY_GUIDANCE};

pub static CLEAN_AND_JERK: Analyzer = Analyzer {
    kind: ExerciseKind::CleanAndJerk,
    required: &[LeftHip, LeftShoulder, LeftElbow, LeftWrist],
    gated: &[LeftShoulder, LeftElbow],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: clean_and_jerk_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good rack position", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Strong jerk! Lock it out", 0.95)).counting(),
        stalled: None,
        between: Cue::new("Clean to shoulders, then jerk overhead", 0.75),
    },
};

fn clean_and_jerk_signals(frame: &JointFrame) -> Option<Signals> {
    let elbow = elbow_angle(frame, Side::Left)?;
    let overhead = is_overhead(frame, Side::Left)?;
    Some(Signals::new(
        elbow < 75.0 && !overhead,
        overhead && elbow > 170.0,
    ))
}

pub static SNATCHES: Analyzer = Analyzer {
    kind: ExerciseKind::Snatches,
    required: &[LeftHip, LeftKnee, LeftShoulder, LeftWrist],
    gated: &[LeftHip, LeftShoulder],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: snatch_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good overhead squat position", 0.9)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Powerful snatch!", 0.95)).counting(),
        stalled: Some(Cue::new("Pull and catch in overhead squat", 0.7)),
        between: Cue::new("One explosive motion to overhead", 0.75),
    },
};

fn snatch_signals(frame: &JointFrame) -> Option<Signals> {
    let knee = knee_angle_vertical(frame, Side::Left)?;
    let overhead = is_overhead(frame, Side::Left)?;
    Some(Signals::new(
        knee < 100.0 && overhead,
        knee > 160.0 && overhead,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::analyzers::testing::body;
    use crate::exercise::phase::ExercisePhase;

    fn arm(elbow: (f64, f64), wrist: (f64, f64)) -> JointFrame {
        body(&[
            (LeftHip, 0.5, 0.6),
            (LeftShoulder, 0.5, 0.3),
            (LeftElbow, elbow.0, elbow.1),
            (LeftWrist, wrist.0, wrist.1),
        ])
    }

    #[test]
    fn test_clean_and_jerk_cycle() {
        let rack = arm((0.55, 0.4), (0.5, 0.28));
        let result = CLEAN_AND_JERK.analyze(&rack, ExercisePhase::Neutral);
        assert_eq!(result.phase, Down);
        assert_eq!(result.feedback(), Some("Good rack position"));
        assert_eq!(result.accuracy(), Some(0.85));

        let lockout = arm((0.5, 0.2), (0.5, 0.05));
        let result = CLEAN_AND_JERK.analyze(&lockout, Down);
        assert_eq!(result.phase, Up);
        assert_eq!(result.rep_delta, 1);
        assert_eq!(result.feedback(), Some("Strong jerk! Lock it out"));

        // Holding the lockout says nothing new and counts nothing.
        let result = CLEAN_AND_JERK.analyze(&lockout, Up);
        assert_eq!(result.phase, Up);
        assert_eq!(result.rep_delta, 0);
        assert!(result.cue.is_none());
    }

    #[test]
    fn test_clean_and_jerk_lockout_without_rack_is_held() {
        // Straight to overhead from Neutral: no rack, no rep, nothing new to say.
        let lockout = arm((0.5, 0.2), (0.5, 0.05));
        let result = CLEAN_AND_JERK.analyze(&lockout, ExercisePhase::Neutral);
        assert!(result.in_frame);
        assert_eq!(result.phase, ExercisePhase::Neutral);
        assert_eq!(result.rep_delta, 0);
        assert!(result.cue.is_none());
    }

    #[test]
    fn test_clean_and_jerk_arms_down_is_between() {
        let hanging = arm((0.5, 0.4), (0.5, 0.5));
        let result = CLEAN_AND_JERK.analyze(&hanging, Up);
        assert_eq!(result.phase, Up);
        assert_eq!(
            result.feedback(),
            Some("Clean to shoulders, then jerk overhead")
        );
    }

    fn snatch(hip: (f64, f64), wrist_y: f64) -> JointFrame {
        body(&[
            (LeftHip, hip.0, hip.1),
            (LeftKnee, 0.5, 0.7),
            (LeftShoulder, 0.5, 0.35),
            (LeftWrist, 0.5, wrist_y),
        ])
    }

    #[test]
    fn test_snatch_cycle() {
        let catch = snatch((0.3, 0.7), 0.1);
        let result = SNATCHES.analyze(&catch, ExercisePhase::Neutral);
        assert_eq!(result.phase, Down);
        assert_eq!(result.accuracy(), Some(0.9));

        let stand = snatch((0.5, 0.5), 0.1);
        let result = SNATCHES.analyze(&stand, Down);
        assert_eq!(result.phase, Up);
        assert_eq!(result.rep_delta, 1);
        assert_eq!(result.feedback(), Some("Powerful snatch!"));

        let result = SNATCHES.analyze(&stand, Up);
        assert_eq!(result.feedback(), Some("Pull and catch in overhead squat"));
    }

    #[test]
    fn test_snatch_needs_bar_overhead() {
        let front_squat = snatch((0.3, 0.7), 0.3);
        let result = SNATCHES.analyze(&front_squat, Up);
        assert_eq!(result.phase, Up);
        assert_eq!(result.feedback(), Some("One explosive motion to overhead"));
    }
}
