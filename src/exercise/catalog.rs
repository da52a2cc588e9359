//! Static exercise reference data for menus and overlays.
//!
//! Target-angle ranges here are display metadata only. The analyzers carry
//! their own thresholds and never read this table.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    ValueEnum,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum ExerciseKind {
    Squats,
    Pushups,
    Plank,
    Lunges,
    JumpingJacks,
    Burpees,
    Deadlifts,
    KettlebellSwings,
    BoxJumps,
    WallBalls,
    Thrusters,
    CleanAndJerk,
    Snatches,
    DoubleUnders,
    PullUps,
}

impl Default for ExerciseKind {
    fn default() -> Self {
        ExerciseKind::Squats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseCategory {
    Basic,
    CrossFit,
    OlympicLifts,
}

impl ExerciseCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseCategory::Basic => "Basic",
            ExerciseCategory::CrossFit => "CrossFit",
            ExerciseCategory::OlympicLifts => "Olympic Lifts",
        }
    }
}

/// Inclusive range of degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, degrees: f64) -> bool {
        degrees >= self.min && degrees <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetAngle {
    pub name: &'static str,
    pub range: AngleRange,
}

const fn target(name: &'static str, min: f64, max: f64) -> TargetAngle {
    TargetAngle {
        name,
        range: AngleRange::new(min, max),
    }
}

const SQUATS_ANGLES: &[TargetAngle] = &[
    target("knee_down", 70.0, 100.0),
    target("knee_up", 160.0, 180.0),
    target("hip_down", 60.0, 90.0),
    target("hip_up", 160.0, 180.0),
];

const PUSHUPS_ANGLES: &[TargetAngle] = &[
    target("elbow_down", 60.0, 90.0),
    target("elbow_up", 160.0, 180.0),
    target("shoulder_alignment", 70.0, 110.0),
];

const PLANK_ANGLES: &[TargetAngle] = &[
    target("body_alignment", 160.0, 180.0),
    target("elbow", 85.0, 95.0),
];

const LUNGES_ANGLES: &[TargetAngle] = &[
    target("front_knee", 85.0, 95.0),
    target("back_knee", 85.0, 95.0),
    target("hip", 160.0, 180.0),
];

const JUMPING_JACKS_ANGLES: &[TargetAngle] = &[
    target("arm_spread", 150.0, 180.0),
    target("leg_spread", 40.0, 60.0),
];

const BURPEES_ANGLES: &[TargetAngle] = &[
    target("body_alignment", 160.0, 180.0),
    target("hip_stand", 160.0, 180.0),
];

const DEADLIFTS_ANGLES: &[TargetAngle] = &[
    target("hip_hinge_down", 45.0, 90.0),
    target("hip_hinge_up", 150.0, 180.0),
    target("knee", 140.0, 180.0),
];

const KETTLEBELL_SWINGS_ANGLES: &[TargetAngle] = &[
    target("hip_hinge", 60.0, 100.0),
    target("hip_lockout", 160.0, 180.0),
    target("arm_swing", 80.0, 110.0),
];

const BOX_JUMPS_ANGLES: &[TargetAngle] = &[
    target("knee_prep", 90.0, 110.0),
    target("knee_landing", 100.0, 140.0),
];

const WALL_BALLS_ANGLES: &[TargetAngle] = &[
    target("knee_down", 70.0, 100.0),
    target("knee_up", 160.0, 180.0),
    target("elbow_release", 150.0, 180.0),
];

const THRUSTERS_ANGLES: &[TargetAngle] = &[
    target("knee_down", 70.0, 100.0),
    target("knee_up", 160.0, 180.0),
    target("elbow_press", 160.0, 180.0),
];

const CLEAN_AND_JERK_ANGLES: &[TargetAngle] = &[
    target("elbow_rack", 45.0, 75.0),
    target("elbow_lockout", 170.0, 180.0),
];

const SNATCHES_ANGLES: &[TargetAngle] = &[
    target("knee_down", 70.0, 100.0),
    target("knee_up", 160.0, 180.0),
    target("elbow_lockout", 165.0, 180.0),
];

const DOUBLE_UNDERS_ANGLES: &[TargetAngle] = &[
    target("knee", 150.0, 180.0),
    target("elbow", 70.0, 100.0),
];

const PULL_UPS_ANGLES: &[TargetAngle] = &[
    target("elbow_top", 30.0, 60.0),
    target("elbow_hang", 160.0, 180.0),
];

impl ExerciseKind {
    /// Stable identifier, identical to the serde representation.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Squats => "Squats",
            ExerciseKind::Pushups => "Push-ups",
            ExerciseKind::Plank => "Plank",
            ExerciseKind::Lunges => "Lunges",
            ExerciseKind::JumpingJacks => "Jumping Jacks",
            ExerciseKind::Burpees => "Burpees",
            ExerciseKind::Deadlifts => "Deadlifts",
            ExerciseKind::KettlebellSwings => "Kettlebell Swings",
            ExerciseKind::BoxJumps => "Box Jumps",
            ExerciseKind::WallBalls => "Wall Balls",
            ExerciseKind::Thrusters => "Thrusters",
            ExerciseKind::CleanAndJerk => "Clean & Jerk",
            ExerciseKind::Snatches => "Snatches",
            ExerciseKind::DoubleUnders => "Double Unders",
            ExerciseKind::PullUps => "Pull-ups",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExerciseKind::Squats => {
                "Lower your hips from a standing position and then stand back up"
            }
            ExerciseKind::Pushups => {
                "Lower your body to the ground and push back up using your arms"
            }
            ExerciseKind::Plank => {
                "Hold your body in a straight line, supporting yourself on forearms and toes"
            }
            ExerciseKind::Lunges => {
                "Step forward and lower your hips until both knees are bent at 90 degrees"
            }
            ExerciseKind::JumpingJacks => {
                "Jump while spreading your legs and raising your arms overhead"
            }
            ExerciseKind::Burpees => {
                "Drop into a plank, return to your feet, and jump with your hands overhead"
            }
            ExerciseKind::Deadlifts => {
                "Hinge at the hips with a flat back and stand up to lift the bar from the floor"
            }
            ExerciseKind::KettlebellSwings => {
                "Swing the kettlebell between your legs and drive it to shoulder height with your hips"
            }
            ExerciseKind::BoxJumps => {
                "Dip into a quarter squat, jump onto the box, and land softly"
            }
            ExerciseKind::WallBalls => {
                "Squat holding the ball at your chest, then stand and throw it to the target"
            }
            ExerciseKind::Thrusters => {
                "Front squat with the bar racked and press it overhead as you stand"
            }
            ExerciseKind::CleanAndJerk => {
                "Pull the bar to your shoulders, then drive it overhead to a locked-out finish"
            }
            ExerciseKind::Snatches => {
                "Pull the bar from the floor to overhead in one motion and stand from the squat"
            }
            ExerciseKind::DoubleUnders => {
                "Jump with feet together while the rope passes under you twice"
            }
            ExerciseKind::PullUps => {
                "Hang from the bar and pull until your chin clears it"
            }
        }
    }

    pub fn category(&self) -> ExerciseCategory {
        match self {
            ExerciseKind::Squats
            | ExerciseKind::Pushups
            | ExerciseKind::Plank
            | ExerciseKind::Lunges
            | ExerciseKind::JumpingJacks => ExerciseCategory::Basic,
            ExerciseKind::CleanAndJerk | ExerciseKind::Snatches => ExerciseCategory::OlympicLifts,
            ExerciseKind::Burpees
            | ExerciseKind::Deadlifts
            | ExerciseKind::KettlebellSwings
            | ExerciseKind::BoxJumps
            | ExerciseKind::WallBalls
            | ExerciseKind::Thrusters
            | ExerciseKind::DoubleUnders
            | ExerciseKind::PullUps => ExerciseCategory::CrossFit,
        }
    }

    pub fn target_angles(&self) -> &'static [TargetAngle] {
        match self {
            ExerciseKind::Squats => SQUATS_ANGLES,
            ExerciseKind::Pushups => PUSHUPS_ANGLES,
            ExerciseKind::Plank => PLANK_ANGLES,
            ExerciseKind::Lunges => LUNGES_ANGLES,
            ExerciseKind::JumpingJacks => JUMPING_JACKS_ANGLES,
            ExerciseKind::Burpees => BURPEES_ANGLES,
            ExerciseKind::Deadlifts => DEADLIFTS_ANGLES,
            ExerciseKind::KettlebellSwings => KETTLEBELL_SWINGS_ANGLES,
            ExerciseKind::BoxJumps => BOX_JUMPS_ANGLES,
            ExerciseKind::WallBalls => WALL_BALLS_ANGLES,
            ExerciseKind::Thrusters => THRUSTERS_ANGLES,
            ExerciseKind::CleanAndJerk => CLEAN_AND_JERK_ANGLES,
            ExerciseKind::Snatches => SNATCHES_ANGLES,
            ExerciseKind::DoubleUnders => DOUBLE_UNDERS_ANGLES,
            ExerciseKind::PullUps => PULL_UPS_ANGLES,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub kind: ExerciseKind,
    pub display_name: &'static str,
    pub description: &'static str,
    pub target_angles: &'static [TargetAngle],
}

impl From<ExerciseKind> for CatalogEntry {
    fn from(kind: ExerciseKind) -> Self {
        Self {
            kind,
            display_name: kind.display_name(),
            description: kind.description(),
            target_angles: kind.target_angles(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSection {
    pub category: ExerciseCategory,
    pub title: &'static str,
    pub exercises: Vec<CatalogEntry>,
}

/// The menu: every exercise grouped by display category, in declaration order.
pub fn catalog() -> Vec<CatalogSection> {
    ExerciseCategory::iter()
        .map(|category| CatalogSection {
            category,
            title: category.display_name(),
            exercises: ExerciseKind::iter()
                .filter(|kind| kind.category() == category)
                .map(CatalogEntry::from)
                .collect(),
        })
        .collect()
}
