//! Bodyweight basics: squats, push-ups, plank, lunges, jumping jacks.

use crate::exercise::catalog::ExerciseKind;
use crate::exercise::hysteresis::{Hysteresis, Signals, Step};
use crate::exercise::phase::{Cue, ExercisePhase::*};
use crate::pose::{horizontal_spread, JointFrame, JointId::*};

use super::features::{elbow_angle, knee_angle, shoulder_hip_gap, wrists_above, Side};
use super::{Analyzer, FULL_BODY_GUIDANCE, UPPER_BODY_GUIDANCE};

pub static SQUATS: Analyzer = Analyzer {
    kind: ExerciseKind::Squats,
    required: &[LeftHip, LeftKnee, LeftAnkle, RightHip, RightKnee, RightAnkle],
    gated: &[LeftHip, LeftKnee, LeftAnkle],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: squat_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good depth! Now push up", 0.9)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Great rep! Keep going", 0.95)).counting(),
        stalled: Some(Cue::new("Lower down slowly", 0.7)),
        between: Cue::new("Keep moving smoothly", 0.8),
    },
};

fn squat_signals(frame: &JointFrame) -> Option<Signals> {
    let avg_knee = (knee_angle(frame, Side::Left)? + knee_angle(frame, Side::Right)?) / 2.0;
    Some(Signals::new(avg_knee < 100.0, avg_knee > 160.0))
}

pub static PUSHUPS: Analyzer = Analyzer {
    kind: ExerciseKind::Pushups,
    required: &[LeftShoulder, LeftElbow, LeftWrist, RightShoulder, RightElbow, RightWrist],
    gated: &[LeftElbow, RightElbow],
    min_confidence: 0.5,
    guidance: UPPER_BODY_GUIDANCE,
    extract: pushup_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good depth! Push back up", 0.9)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Excellent pushup!", 0.95)).counting(),
        stalled: Some(Cue::new("Lower your chest to the ground", 0.7)),
        between: Cue::new("Maintain steady movement", 0.8),
    },
};

fn pushup_signals(frame: &JointFrame) -> Option<Signals> {
    let avg_elbow = (elbow_angle(frame, Side::Left)? + elbow_angle(frame, Side::Right)?) / 2.0;
    Some(Signals::new(avg_elbow < 90.0, avg_elbow > 160.0))
}

const PLANK_HOLD: Cue = Cue::new("Perfect plank position! Hold it", 0.95);
const PLANK_NEAR: Cue = Cue::new("Good form, keep your body straight", 0.8);

/// A plank is a hold, not a cycle: the first aligned frame counts once and the
/// machine then stays in Down, so later frames only refresh the cue.
pub static PLANK: Analyzer = Analyzer {
    kind: ExerciseKind::Plank,
    required: &[LeftShoulder, LeftHip, LeftAnkle, RightShoulder, RightHip, RightAnkle],
    gated: &[LeftShoulder, LeftHip],
    min_confidence: 0.4,
    guidance: "Position your full body in frame sideways",
    extract: plank_signals,
    machine: Hysteresis {
        entry: Step::to(Down, PLANK_HOLD).counting(),
        entry_hold: Some(PLANK_HOLD),
        exit: Step::to(Down, PLANK_NEAR),
        stalled: Some(PLANK_NEAR),
        between: Cue::new("Align your shoulders and hips", 0.6),
    },
};

fn plank_signals(frame: &JointFrame) -> Option<Signals> {
    let alignment =
        (shoulder_hip_gap(frame, Side::Left)? + shoulder_hip_gap(frame, Side::Right)?) / 2.0;
    Some(Signals::new(alignment < 0.1, alignment < 0.2))
}

pub static LUNGES: Analyzer = Analyzer {
    kind: ExerciseKind::Lunges,
    required: &[LeftHip, LeftKnee, LeftAnkle, RightHip, RightKnee, RightAnkle],
    gated: &[LeftKnee, RightKnee],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: lunge_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Great lunge depth!", 0.9)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Good rep! Switch legs", 0.95)).counting(),
        stalled: Some(Cue::new("Step forward and lower down", 0.7)),
        between: Cue::new("Keep front knee at 90 degrees", 0.75),
    },
};

fn lunge_signals(frame: &JointFrame) -> Option<Signals> {
    let left = knee_angle(frame, Side::Left)?;
    let right = knee_angle(frame, Side::Right)?;
    // The more bent knee is the front leg, whichever side leads.
    let front = left.min(right);
    let back = left.max(right);
    Some(Signals::new(
        front < 100.0 && back > 140.0,
        front > 160.0 && back > 160.0,
    ))
}

pub static JUMPING_JACKS: Analyzer = Analyzer {
    kind: ExerciseKind::JumpingJacks,
    required: &[LeftWrist, RightWrist, LeftAnkle, RightAnkle, Nose],
    gated: &[LeftWrist, RightWrist],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: jumping_jack_signals,
    machine: Hysteresis {
        entry: Step::to(Up, Cue::new("Arms up, legs apart!", 0.9)),
        entry_hold: None,
        exit: Step::to(Down, Cue::new("Great jumping jack!", 0.95)).counting(),
        stalled: Some(Cue::new("Jump and spread arms and legs", 0.7)),
        between: Cue::new("Coordinate arms and legs", 0.75),
    },
};

fn jumping_jack_signals(frame: &JointFrame) -> Option<Signals> {
    let arm_spread = horizontal_spread(frame.point(LeftWrist)?, frame.point(RightWrist)?);
    let leg_spread = horizontal_spread(frame.point(LeftAnkle)?, frame.point(RightAnkle)?);
    let arms_above_head = wrists_above(frame, Nose)?;
    Some(Signals::new(
        arm_spread > 0.5 && leg_spread > 0.3 && arms_above_head,
        arm_spread < 0.2 && leg_spread < 0.15,
    ))
}
