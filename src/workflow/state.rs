// WorkflowState - the artifacts a session accumulates as steps advance.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five stops of the production line. Strictly linear; the only way
/// back is an explicit reset. A tagged enum rather than a bare step index,
/// so "active and completed at once" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    TopicEntry,
    ScriptReady,
    ImagesReady,
    AudioReady,
    VideoReady,
}

impl WorkflowStep {
    /// Numeric position in [0, 4], for clients that count steps.
    pub fn index(self) -> u8 {
        match self {
            WorkflowStep::TopicEntry => 0,
            WorkflowStep::ScriptReady => 1,
            WorkflowStep::ImagesReady => 2,
            WorkflowStep::AudioReady => 3,
            WorkflowStep::VideoReady => 4,
        }
    }
}

/// One session's workflow state. Mutated only by the orchestrator; the step
/// advances only when the artifact for that step has been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    pub topic: String,
    pub script: String,
    pub scenes: Vec<String>,
    pub images: Vec<String>,
    pub audio: String,
    pub video: String,
    pub step: WorkflowStep,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkflowState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            topic: String::new(),
            script: String::new(),
            scenes: Vec::new(),
            images: Vec::new(),
            audio: String::new(),
            video: String::new(),
            step: WorkflowStep::TopicEntry,
            created_at: now,
            updated_at: now,
        }
    }

    /// Back to a blank TopicEntry state. Keeps the session's creation time.
    pub fn reset(&mut self) {
        self.topic.clear();
        self.script.clear();
        self.scenes.clear();
        self.images.clear();
        self.audio.clear();
        self.video.clear();
        self.step = WorkflowStep::TopicEntry;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_index_in_order() {
        let steps = [
            WorkflowStep::TopicEntry,
            WorkflowStep::ScriptReady,
            WorkflowStep::ImagesReady,
            WorkflowStep::AudioReady,
            WorkflowStep::VideoReady,
        ];
        for (expected, step) in steps.into_iter().enumerate() {
            assert_eq!(step.index() as usize, expected);
        }
    }

    #[test]
    fn reset_clears_every_artifact() {
        let mut state = WorkflowState::new();
        state.topic = "Space".to_string();
        state.script = "[HOOK]\nHi".to_string();
        state.scenes = vec!["Hi".to_string()];
        state.images = vec!["data:image/jpeg;base64,AAAA".to_string()];
        state.audio = "data:audio/wav;base64,BBBB".to_string();
        state.step = WorkflowStep::VideoReady;

        state.reset();

        assert_eq!(state.topic, "");
        assert_eq!(state.script, "");
        assert!(state.scenes.is_empty());
        assert!(state.images.is_empty());
        assert_eq!(state.audio, "");
        assert_eq!(state.video, "");
        assert_eq!(state.step, WorkflowStep::TopicEntry);
    }
}
