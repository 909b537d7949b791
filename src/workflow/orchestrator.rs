// Workflow orchestrator - drives one transition at a time per session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::gateway::audio::AudioOutcome;
use crate::gateway::video::VideoHandoff;
use crate::gateway::InferenceGateway;
use crate::scenes::extract_scenes;

use super::state::{WorkflowState, WorkflowStep};

/// A single user's workflow. The busy flag is the only coordination a
/// session needs: a transition claims it before invoking an adapter and a
/// guard releases it on completion, success or failure, so the state lock
/// is never held across a provider call.
pub struct WorkflowSession {
    gateway: Arc<InferenceGateway>,
    state: Mutex<WorkflowState>,
    busy: AtomicBool,
}

/// Releases the busy flag when the transition ends, including when the
/// request future is dropped mid-call.
struct TransitionGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl WorkflowSession {
    pub fn new(gateway: Arc<InferenceGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(WorkflowState::new()),
            busy: AtomicBool::new(false),
        }
    }

    pub async fn state(&self) -> WorkflowState {
        self.state.lock().await.clone()
    }

    /// Claim the busy flag and snapshot the state, or reject the transition
    /// with the state untouched.
    async fn begin(
        &self,
        expected: WorkflowStep,
        requirement: &'static str,
    ) -> Result<(WorkflowState, TransitionGuard<'_>), ApiError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ApiError::Busy);
        }
        let guard = TransitionGuard { busy: &self.busy };

        let state = self.state.lock().await;
        if state.step != expected {
            return Err(ApiError::OutOfOrder(requirement));
        }
        Ok((state.clone(), guard))
    }

    async fn apply(&self, update: impl FnOnce(&mut WorkflowState)) -> WorkflowState {
        let mut state = self.state.lock().await;
        update(&mut state);
        state.touch();
        state.clone()
    }

    /// TopicEntry -> ScriptReady.
    pub async fn generate_script(&self, topic: &str) -> Result<WorkflowState, ApiError> {
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return Err(ApiError::InvalidInput("Topic is required"));
        }

        let (_, _guard) = self
            .begin(WorkflowStep::TopicEntry, "script already generated; reset to start over")
            .await?;

        let outcome = self.gateway.generate_script(&topic).await?;
        let script = outcome.into_payload();
        Ok(self
            .apply(move |state| {
                state.topic = topic;
                state.script = script;
                state.step = WorkflowStep::ScriptReady;
            })
            .await)
    }

    /// ScriptReady -> ImagesReady. Returns whether scenes were dropped.
    pub async fn generate_images(&self) -> Result<(WorkflowState, bool), ApiError> {
        let (snapshot, _guard) = self
            .begin(WorkflowStep::ScriptReady, "generate a script before images")
            .await?;

        let scenes = extract_scenes(&snapshot.script);
        let generated = self.gateway.generate_images(&scenes).await?;
        let truncated = generated.truncated;
        let urls = generated.urls();
        let state = self
            .apply(move |state| {
                state.scenes = scenes;
                state.images = urls;
                state.step = WorkflowStep::ImagesReady;
            })
            .await;
        Ok((state, truncated))
    }

    /// ImagesReady -> AudioReady. The outcome tells the caller whether to
    /// speak the text locally.
    pub async fn generate_audio(&self) -> Result<(WorkflowState, AudioOutcome), ApiError> {
        let (snapshot, _guard) = self
            .begin(WorkflowStep::ImagesReady, "generate images before narration")
            .await?;

        let outcome = self.gateway.generate_audio(&snapshot.script).await?;
        let audio = match &outcome {
            AudioOutcome::Synthesized { audio } => audio.clone(),
            AudioOutcome::ClientTts { .. } => String::new(),
        };
        let state = self
            .apply(move |state| {
                state.audio = audio;
                state.step = WorkflowStep::AudioReady;
            })
            .await;
        Ok((state, outcome))
    }

    /// AudioReady -> VideoReady.
    pub async fn generate_video(&self) -> Result<(WorkflowState, VideoHandoff), ApiError> {
        let (snapshot, _guard) = self
            .begin(WorkflowStep::AudioReady, "generate narration before the video handoff")
            .await?;

        let handoff = self.gateway.compose_video(snapshot.images, snapshot.audio)?;
        let video = handoff.video.clone();
        let state = self
            .apply(move |state| {
                state.video = video;
                state.step = WorkflowStep::VideoReady;
            })
            .await;
        Ok((state, handoff))
    }

    /// Back to TopicEntry with all artifacts cleared. A reset is a
    /// transition like any other: rejected while one is in flight.
    pub async fn reset(&self) -> Result<WorkflowState, ApiError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ApiError::Busy);
        }
        let _guard = TransitionGuard { busy: &self.busy };

        let mut state = self.state.lock().await;
        state.reset();
        Ok(state.clone())
    }
}
