//! CrossFit movements. Most read the left side only, matching a side-on camera.

use crate::exercise::catalog::ExerciseKind;
use crate::exercise::hysteresis::{Hysteresis, Signals, Step};
use crate::exercise::phase::{Cue, ExercisePhase::*};
use crate::pose::{horizontal_spread, midpoint, JointFrame, JointId::*};

use super::features::{
    elbow_angle, hip_hinge_angle, knee_angle, knee_angle_vertical, shoulder_hip_gap, wrists_above,
    Side,
};
use super::{Analyzer, FULL_BODY_GUIDANCE, UPPER_BODY_GUIDANCE};

pub static BURPEES: Analyzer = Analyzer {
    kind: ExerciseKind::Burpees,
    required: &[LeftHip, LeftKnee, LeftShoulder, LeftWrist, Nose],
    gated: &[LeftHip, LeftShoulder],
    min_confidence: 0.4,
    guidance: FULL_BODY_GUIDANCE,
    extract: burpee_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good plank position!", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Excellent burpee!", 0.95)).counting(),
        stalled: Some(Cue::new("Drop down to plank", 0.7)),
        between: Cue::new("Transition smoothly", 0.75),
    },
};

fn burpee_signals(frame: &JointFrame) -> Option<Signals> {
    let body_alignment = shoulder_hip_gap(frame, Side::Left)?;
    let wrist = frame.point(LeftWrist)?;
    let hands_near_ground = wrist.y > 0.7;
    let standing = frame.point(LeftHip)?.y < 0.5;
    Some(Signals::new(
        hands_near_ground && body_alignment < 0.2,
        standing && wrist.is_above(frame.point(Nose)?),
    ))
}

pub static DEADLIFTS: Analyzer = Analyzer {
    kind: ExerciseKind::Deadlifts,
    required: &[LeftHip, LeftKnee, LeftShoulder, RightHip, RightKnee],
    gated: &[LeftHip, LeftKnee],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: deadlift_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good hip hinge! Keep back straight", 0.9)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Strong lift! Maintain form", 0.95)).counting(),
        stalled: Some(Cue::new("Hinge at hips, slight knee bend", 0.7)),
        between: Cue::new("Keep back straight, drive through hips", 0.8),
    },
};

fn deadlift_signals(frame: &JointFrame) -> Option<Signals> {
    let hinge = hip_hinge_angle(frame, Side::Left)?;
    let knee = knee_angle_vertical(frame, Side::Left)?;
    Some(Signals::new(hinge < 90.0 && knee > 140.0, hinge > 150.0))
}

pub static KETTLEBELL_SWINGS: Analyzer = Analyzer {
    kind: ExerciseKind::KettlebellSwings,
    required: &[LeftHip, LeftShoulder, LeftWrist, RightWrist],
    gated: &[LeftHip, LeftShoulder],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: kettlebell_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good backswing position", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Powerful hip drive!", 0.95)).counting(),
        stalled: Some(Cue::new("Swing between legs", 0.7)),
        between: Cue::new("Use hip drive, not arms", 0.75),
    },
};

fn kettlebell_signals(frame: &JointFrame) -> Option<Signals> {
    let arm_height = midpoint(frame.point(LeftWrist)?, frame.point(RightWrist)?).y;
    let shoulder_height = frame.point(LeftShoulder)?.y;
    let hip_height = frame.point(LeftHip)?.y;
    Some(Signals::new(
        arm_height > hip_height && arm_height > shoulder_height * 0.8,
        arm_height < shoulder_height,
    ))
}

pub static BOX_JUMPS: Analyzer = Analyzer {
    kind: ExerciseKind::BoxJumps,
    required: &[LeftHip, LeftKnee, LeftAnkle],
    gated: &[LeftHip, LeftKnee],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: box_jump_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good squat prep!", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Great jump! Land softly", 0.95)).counting(),
        stalled: None,
        between: Cue::new("Prep, explode up, land soft", 0.75),
    },
};

fn box_jump_signals(frame: &JointFrame) -> Option<Signals> {
    let knee = knee_angle(frame, Side::Left)?;
    let hip_height = frame.point(LeftHip)?.y;
    Some(Signals::new(knee < 110.0 && hip_height > 0.5, hip_height < 0.3))
}

pub static WALL_BALLS: Analyzer = Analyzer {
    kind: ExerciseKind::WallBalls,
    required: &[LeftHip, LeftKnee, LeftWrist, RightWrist, Nose],
    gated: &[LeftKnee],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: wall_ball_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good squat depth!", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Nice throw! Catch and repeat", 0.95)).counting(),
        stalled: Some(Cue::new("Squat with ball at chest", 0.7)),
        between: Cue::new("Squat deep, throw high", 0.75),
    },
};

fn wall_ball_signals(frame: &JointFrame) -> Option<Signals> {
    let knee = knee_angle_vertical(frame, Side::Left)?;
    let arms_up = wrists_above(frame, Nose)?;
    Some(Signals::new(knee < 100.0 && !arms_up, knee > 160.0 && arms_up))
}

pub static THRUSTERS: Analyzer = Analyzer {
    kind: ExerciseKind::Thrusters,
    required: &[LeftHip, LeftKnee, LeftShoulder, LeftElbow, LeftWrist],
    gated: &[LeftKnee, LeftElbow],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: thruster_signals,
    machine: Hysteresis {
        entry: Step::to(Down, Cue::new("Good front squat position", 0.85)),
        entry_hold: None,
        exit: Step::to(Up, Cue::new("Explosive thruster!", 0.95)).counting(),
        stalled: Some(Cue::new("Squat down with bar racked", 0.7)),
        between: Cue::new("One fluid motion from squat to press", 0.8),
    },
};

fn thruster_signals(frame: &JointFrame) -> Option<Signals> {
    let knee = knee_angle_vertical(frame, Side::Left)?;
    let arm_extension = frame.point(LeftWrist)?.is_above(frame.point(LeftShoulder)?);
    Some(Signals::new(
        knee < 100.0 && !arm_extension,
        knee > 160.0 && arm_extension,
    ))
}

/// Counts on take-off: the rep is the jump itself, landing only re-arms it.
pub static DOUBLE_UNDERS: Analyzer = Analyzer {
    kind: ExerciseKind::DoubleUnders,
    required: &[LeftAnkle, RightAnkle, LeftWrist, RightWrist, LeftElbow],
    gated: &[LeftAnkle],
    min_confidence: 0.5,
    guidance: FULL_BODY_GUIDANCE,
    extract: double_under_signals,
    machine: Hysteresis {
        entry: Step::to(Up, Cue::new("Good jump! Fast wrist rotation", 0.9)).counting(),
        entry_hold: None,
        exit: Step::to(Down, Cue::new("Keep wrists low and fast", 0.85)),
        stalled: None,
        between: Cue::new("Jump higher, rotate wrists faster", 0.7),
    },
};

fn double_under_signals(frame: &JointFrame) -> Option<Signals> {
    let left_ankle = frame.point(LeftAnkle)?;
    let right_ankle = frame.point(RightAnkle)?;
    let feet_together = horizontal_spread(left_ankle, right_ankle) < 0.15;
    let jump_height = midpoint(left_ankle, right_ankle).y;
    let wrists_low = frame.point(LeftWrist)?.y > frame.point(LeftElbow)?.y;
    Some(Signals::new(
        jump_height < 0.7 && feet_together && wrists_low,
        jump_height > 0.8,
    ))
}

/// Counts at the top: chin over the bar is the rep, the dead hang re-arms it.
pub static PULL_UPS: Analyzer = Analyzer {
    kind: ExerciseKind::PullUps,
    required: &[LeftShoulder, LeftElbow, LeftWrist, Nose],
    gated: &[LeftElbow, LeftShoulder],
    min_confidence: 0.5,
    guidance: UPPER_BODY_GUIDANCE,
    extract: pull_up_signals,
    machine: Hysteresis {
        entry: Step::to(Up, Cue::new("Chin over bar! Great pull-up", 0.95)).counting(),
        entry_hold: None,
        exit: Step::to(Down, Cue::new("Full extension, pull again", 0.85)),
        stalled: Some(Cue::new("Pull up to get chin over bar", 0.7)),
        between: Cue::new("Pull through elbows, chin to bar", 0.75),
    },
};

fn pull_up_signals(frame: &JointFrame) -> Option<Signals> {
    let elbow = elbow_angle(frame, Side::Left)?;
    let chin_above_bar = frame.point(Nose)?.is_above(frame.point(LeftWrist)?);
    Some(Signals::new(elbow < 60.0 && chin_above_bar, elbow > 160.0))
}
