use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exercise::{AnalysisResult, ExerciseKind, ExercisePhase};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub selected_exercise: ExerciseKind,
    pub current_phase: ExercisePhase,
    pub rep_count: u32,
    pub last_feedback: Option<String>,
    pub last_accuracy: f64,
    pub in_frame: bool,
    /// Per-session tallies behind the summary.
    #[serde(skip)]
    pub frames_seen: u64,
    #[serde(skip)]
    pub frames_in_frame: u64,
    #[serde(skip)]
    accuracy_total: f64,
    #[serde(skip)]
    accuracy_samples: u64,
}

impl SessionState {
    pub fn new(session_id: String, exercise: ExerciseKind, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            started_at,
            selected_exercise: exercise,
            current_phase: ExercisePhase::Neutral,
            rep_count: 0,
            last_feedback: None,
            last_accuracy: 0.0,
            in_frame: false,
            frames_seen: 0,
            frames_in_frame: 0,
            accuracy_total: 0.0,
            accuracy_samples: 0,
        }
    }

    /// Fresh counters and feedback under a new id; the selected exercise carries over.
    pub fn begin_session(&mut self, session_id: String, started_at: DateTime<Utc>) {
        *self = Self::new(session_id, self.selected_exercise, started_at);
    }

    pub fn apply(&mut self, result: &AnalysisResult) {
        self.frames_seen += 1;
        self.in_frame = result.in_frame;
        self.current_phase = result.phase;
        self.rep_count = self.rep_count.saturating_add(result.rep_delta);

        if let Some(cue) = result.cue {
            self.last_feedback = Some(cue.feedback.to_string());
            self.last_accuracy = cue.accuracy;
            if result.in_frame {
                self.accuracy_total += cue.accuracy;
                self.accuracy_samples += 1;
            }
        }

        if result.in_frame {
            self.frames_in_frame += 1;
        }
    }

    /// Average accuracy of cues shown while in frame, `None` before the first one.
    pub fn mean_accuracy(&self) -> Option<f64> {
        if self.accuracy_samples == 0 {
            None
        } else {
            Some(self.accuracy_total / self.accuracy_samples as f64)
        }
    }
}
