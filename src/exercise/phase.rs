use serde::{Deserialize, Serialize};

/// Which half of a repeating movement the subject occupies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ExercisePhase {
    /// Initial state after a session start; never re-entered by an analyzer.
    Neutral,
    Down,
    Up,
}

impl Default for ExercisePhase {
    fn default() -> Self {
        ExercisePhase::Neutral
    }
}

impl ExercisePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExercisePhase::Neutral => "neutral",
            ExercisePhase::Down => "down",
            ExercisePhase::Up => "up",
        }
    }
}

/// A feedback message paired with the accuracy score shown alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cue {
    pub feedback: &'static str,
    pub accuracy: f64,
}

impl Cue {
    pub const fn new(feedback: &'static str, accuracy: f64) -> Self {
        Self { feedback, accuracy }
    }
}

/// Outcome of analyzing one frame.
///
/// `cue` is `None` when the frame re-confirms the phase the subject is already
/// in: whatever was last shown stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub in_frame: bool,
    pub phase: ExercisePhase,
    pub rep_delta: u32,
    pub cue: Option<Cue>,
}

impl AnalysisResult {
    /// Required joints missing or below the confidence gate.
    pub fn out_of_frame(phase: ExercisePhase, guidance: &'static str) -> Self {
        Self {
            in_frame: false,
            phase,
            rep_delta: 0,
            cue: Some(Cue::new(guidance, 0.0)),
        }
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.cue.map(|cue| cue.feedback)
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.cue.map(|cue| cue.accuracy)
    }

    pub fn counted_rep(&self) -> bool {
        self.rep_delta > 0
    }
}
