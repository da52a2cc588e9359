use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::exercise::{analyze, AnalysisResult, ExerciseKind, ExercisePhase};
use crate::pose::JointFrame;

use super::SessionState;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// What observers see after every frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub in_frame: bool,
    pub accuracy: f64,
    pub feedback: Option<String>,
    pub rep_count: u32,
    pub selected_exercise: ExerciseKind,
    pub phase: ExercisePhase,
    pub session_id: String,
    pub started_at: DateTime<Utc>,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            in_frame: state.in_frame,
            accuracy: state.last_accuracy,
            feedback: state.last_feedback.clone(),
            rep_count: state.rep_count,
            selected_exercise: state.selected_exercise,
            phase: state.current_phase,
            session_id: state.session_id.clone(),
            started_at: state.started_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub exercise: ExerciseKind,
    pub rep_count: u32,
    pub frames_seen: u64,
    pub frames_in_frame: u64,
    pub mean_accuracy: Option<f64>,
}

/// Owns the tracking state for one subject and publishes a snapshot after
/// every change. Share it as `Arc<tokio::sync::Mutex<SessionController>>`.
pub struct SessionController {
    state: SessionState,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionController {
    pub fn new(exercise: ExerciseKind) -> Self {
        let state = SessionState::new(Uuid::new_v4().to_string(), exercise, Utc::now());
        let (snapshots, _) = watch::channel(SessionSnapshot::from(&state));
        Self { state, snapshots }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&self.state)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    /// Zeroes reps and phase under a fresh session id.
    pub fn start_session(&mut self) -> SessionSnapshot {
        self.state
            .begin_session(Uuid::new_v4().to_string(), Utc::now());
        log_info!(
            "session {} started ({})",
            self.state.session_id,
            self.state.selected_exercise.id()
        );
        self.publish()
    }

    /// Changes the analyzer used for subsequent frames. Phase and rep count
    /// are left as they are; call [`start_session`](Self::start_session) to zero them.
    pub fn select_exercise(&mut self, exercise: ExerciseKind) -> SessionSnapshot {
        let previous = self.state.selected_exercise;
        if previous == exercise {
            return self.snapshot();
        }

        self.state.selected_exercise = exercise;
        if self.state.rep_count > 0 || self.state.current_phase != ExercisePhase::Neutral {
            log_warn!(
                "exercise changed {} -> {} mid-session; keeping {} reps and phase {}",
                previous.id(),
                exercise.id(),
                self.state.rep_count,
                self.state.current_phase.as_str()
            );
        } else {
            log_info!("exercise changed {} -> {}", previous.id(), exercise.id());
        }
        self.publish()
    }

    pub fn dispatch(&mut self, frame: &JointFrame) -> AnalysisResult {
        let result = analyze(
            self.state.selected_exercise,
            frame,
            self.state.current_phase,
        );
        self.state.apply(&result);

        if result.counted_rep() {
            log_debug!(
                "{} rep {} counted in session {}",
                self.state.selected_exercise.id(),
                self.state.rep_count,
                self.state.session_id
            );
        }

        self.publish();
        result
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.state.session_id.clone(),
            exercise: self.state.selected_exercise,
            rep_count: self.state.rep_count,
            frames_seen: self.state.frames_seen,
            frames_in_frame: self.state.frames_in_frame,
            mean_accuracy: self.state.mean_accuracy(),
        }
    }

    fn publish(&self) -> SessionSnapshot {
        let snapshot = self.snapshot();
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(ExerciseKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::analyzers::testing::{arms, body, full_body, legs, with_confidence};
    use crate::pose::JointId;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn squat(degrees: f64) -> JointFrame {
        legs(full_body(), degrees, degrees)
    }

    fn jack(wrist_spread: f64, ankle_spread: f64, wrist_y: f64) -> JointFrame {
        body(&[
            (JointId::Nose, 0.5, 0.2),
            (JointId::LeftWrist, 0.5 - wrist_spread / 2.0, wrist_y),
            (JointId::RightWrist, 0.5 + wrist_spread / 2.0, wrist_y),
            (JointId::LeftAnkle, 0.5 - ankle_spread / 2.0, 0.9),
            (JointId::RightAnkle, 0.5 + ankle_spread / 2.0, 0.9),
        ])
    }

    #[test]
    fn test_squat_rep_updates_snapshot() {
        let mut controller = SessionController::new(ExerciseKind::Squats);

        let result = controller.dispatch(&squat(80.0));
        assert_eq!(result.phase, ExercisePhase::Down);
        let snapshot = controller.snapshot();
        assert!(snapshot.in_frame);
        assert_eq!(snapshot.accuracy, 0.9);
        assert_eq!(snapshot.phase, ExercisePhase::Down);
        assert_eq!(snapshot.rep_count, 0);

        let result = controller.dispatch(&squat(170.0));
        assert!(result.counted_rep());
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.rep_count, 1);
        assert_eq!(snapshot.accuracy, 0.95);
        assert_eq!(snapshot.feedback.as_deref(), Some("Great rep! Keep going"));

        // Standing again is not another rep.
        controller.dispatch(&squat(170.0));
        assert_eq!(controller.snapshot().rep_count, 1);
    }

    #[test]
    fn test_jumping_jack_counts_on_close() {
        let mut controller = SessionController::new(ExerciseKind::JumpingJacks);

        controller.dispatch(&jack(0.6, 0.4, 0.1));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, ExercisePhase::Up);
        assert_eq!(snapshot.accuracy, 0.9);
        assert_eq!(snapshot.rep_count, 0);

        controller.dispatch(&jack(0.1, 0.1, 0.5));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, ExercisePhase::Down);
        assert_eq!(snapshot.accuracy, 0.95);
        assert_eq!(snapshot.rep_count, 1);
    }

    #[test]
    fn test_exercise_switch_keeps_phase_and_reps() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        for _ in 0..3 {
            controller.dispatch(&squat(80.0));
            controller.dispatch(&squat(170.0));
        }
        controller.dispatch(&squat(80.0));
        assert_eq!(controller.snapshot().rep_count, 3);
        assert_eq!(controller.snapshot().phase, ExercisePhase::Down);

        let snapshot = controller.select_exercise(ExerciseKind::Pushups);
        assert_eq!(snapshot.selected_exercise, ExerciseKind::Pushups);
        assert_eq!(snapshot.rep_count, 3);
        assert_eq!(snapshot.phase, ExercisePhase::Down);

        // The carried Down phase lets the first push-up lockout count.
        let result = controller.dispatch(&arms(full_body(), 170.0, 170.0));
        assert!(result.counted_rep());
        assert_eq!(controller.snapshot().rep_count, 4);
    }

    #[test]
    fn test_start_session_resets_counters_only() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        controller.dispatch(&squat(80.0));
        controller.dispatch(&squat(170.0));
        controller.select_exercise(ExerciseKind::Lunges);
        let first_id = controller.snapshot().session_id;

        let snapshot = controller.start_session();

        assert_ne!(snapshot.session_id, first_id);
        assert_eq!(snapshot.rep_count, 0);
        assert_eq!(snapshot.phase, ExercisePhase::Neutral);
        assert_eq!(snapshot.selected_exercise, ExerciseKind::Lunges);
        assert!(snapshot.feedback.is_none());
        assert!(!snapshot.in_frame);
        assert_eq!(controller.summary().frames_seen, 0);
    }

    #[test]
    fn test_out_of_frame_leaves_phase_and_reps() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        controller.dispatch(&squat(80.0));

        let hidden = with_confidence(squat(170.0), JointId::LeftKnee, 0.1);
        let result = controller.dispatch(&hidden);

        assert!(!result.in_frame);
        let snapshot = controller.snapshot();
        assert!(!snapshot.in_frame);
        assert_eq!(snapshot.accuracy, 0.0);
        assert_eq!(
            snapshot.feedback.as_deref(),
            Some("Position your full body in frame")
        );
        assert_eq!(snapshot.phase, ExercisePhase::Down);
        assert_eq!(snapshot.rep_count, 0);
    }

    #[test]
    fn test_held_frame_keeps_last_feedback() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        controller.dispatch(&squat(80.0));
        controller.dispatch(&squat(120.0));
        let between = controller.snapshot();
        assert_eq!(between.feedback.as_deref(), Some("Keep moving smoothly"));

        // Deep again while already Down: nothing new to say.
        controller.dispatch(&squat(80.0));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.feedback.as_deref(), Some("Keep moving smoothly"));
        assert_eq!(snapshot.accuracy, 0.8);
        assert!(snapshot.in_frame);
    }

    #[test]
    fn test_rep_count_never_decreases_under_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut controller = SessionController::new(ExerciseKind::Squats);
        let mut last = 0;

        for _ in 0..500 {
            let degrees = rng.gen_range(40.0..180.0);
            let mut frame = squat(degrees);
            if rng.gen_bool(0.2) {
                frame = with_confidence(frame, JointId::LeftKnee, rng.gen_range(0.0..1.0));
            }
            let result = controller.dispatch(&frame);
            let count = controller.snapshot().rep_count;
            assert!(count >= last);
            assert!(count - last <= 1);
            assert_eq!(count - last, result.rep_delta);
            last = count;
        }
    }

    #[test]
    fn test_subscribers_see_each_dispatch() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        let mut rx = controller.subscribe();
        assert!(!rx.has_changed().unwrap());

        controller.dispatch(&squat(80.0));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().phase, ExercisePhase::Down);

        controller.dispatch(&squat(170.0));
        assert_eq!(rx.borrow_and_update().rep_count, 1);
    }

    #[test]
    fn test_summary_tracks_frames_and_accuracy() {
        let mut controller = SessionController::new(ExerciseKind::Squats);
        controller.dispatch(&squat(80.0));
        controller.dispatch(&squat(170.0));
        controller.dispatch(&body(&[]));

        let summary = controller.summary();
        assert_eq!(summary.rep_count, 1);
        assert_eq!(summary.frames_seen, 3);
        assert_eq!(summary.frames_in_frame, 2);
        let mean = summary.mean_accuracy.unwrap();
        assert!((mean - 0.925).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let controller = SessionController::new(ExerciseKind::PullUps);
        let json = serde_json::to_value(controller.snapshot()).unwrap();
        assert_eq!(json["selectedExercise"], "pullUps");
        assert_eq!(json["repCount"], 0);
        assert_eq!(json["inFrame"], false);
        assert_eq!(json["phase"], "neutral");
        assert!(json.get("sessionId").is_some());
        assert!(json.get("startedAt").is_some());
    }
}
