//! Session state and update actions for the story client
//!
//! The session owns the transient view state: the story collection (a
//! cache of what the backend last returned, newest first), the most
//! recent generation result, and the generation error banner. All
//! mutations go through explicit actions rather than ambient globals.
//!
//! The generation flow is a small state machine:
//! `Idle -> Submitting -> Idle` (with a result or an error banner).
//! Concurrent submissions are prevented only by the `Submitting` guard;
//! there is no request queue, cancellation, or de-duplication. A refresh
//! and a generation may overlap, in which case the last write to the
//! collection wins.

use crate::api::StoryBackend;
use crate::error::FabulaError;
use crate::story::{filter_stories, Story};

/// Generation flow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No generation request in flight
    #[default]
    Idle,
    /// A generation request is outstanding
    Submitting,
}

/// In-memory view state for a story session
///
/// The client holds no authoritative state: `stories` is replaced
/// wholesale by listing snapshots, and successful generations are
/// prepended so the collection stays newest-first.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Cached story collection, newest first
    pub stories: Vec<Story>,
    /// The most recently generated story, if any
    pub latest: Option<Story>,
    /// Error banner from the last failed generation, if any
    pub error: Option<String>,
    /// Current generation flow phase
    pub phase: Phase,
}

impl SessionState {
    /// Create an empty session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a generation request is outstanding
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Replace the collection with a fresh backend snapshot
    pub fn replace_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
    }

    /// Enter the submitting phase
    ///
    /// Returns false (and leaves the state untouched) when a submission
    /// is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Record a successful generation
    ///
    /// The story becomes the current result and the newest element of
    /// the collection; any previous error banner is cleared.
    pub fn complete_submit(&mut self, story: Story) {
        self.stories.insert(0, story.clone());
        self.latest = Some(story);
        self.error = None;
        self.phase = Phase::Idle;
    }

    /// Record a failed generation
    ///
    /// The collection is left untouched; `message` becomes the banner.
    pub fn fail_submit(&mut self, message: String) {
        self.error = Some(message);
        self.phase = Phase::Idle;
    }

    /// Stories whose prompt or text contains `query`, case-insensitive
    ///
    /// An empty query yields the full collection in order.
    pub fn filtered(&self, query: &str) -> Vec<&Story> {
        filter_stories(&self.stories, query)
    }
}

/// Outcome of a generate action, for presentation layers
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// Prompt was empty after trimming; nothing was submitted
    EmptyPrompt,
    /// A request was already in flight; this trigger was ignored
    Busy,
    /// The backend returned a new story
    Generated(Story),
    /// The backend rejected the request; the string is the banner text
    Failed(String),
}

/// Driver combining a backend with session state
///
/// Presentation layers (the interactive session, one-shot commands) sit
/// on top of this and only decide how to render the state.
pub struct StorySession<B: StoryBackend> {
    backend: B,
    /// The session view state, mutated only through the actions below
    pub state: SessionState,
}

impl<B: StoryBackend> StorySession<B> {
    /// Create a session over the given backend with empty state
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SessionState::new(),
        }
    }

    /// Submit a topic prompt for generation
    ///
    /// The prompt is trimmed first; an empty prompt performs no network
    /// call. When a request is already outstanding the trigger is a
    /// no-op. On success the new story becomes the current result and
    /// the first element of the collection; on failure the response body
    /// text becomes the error banner and the collection is unchanged.
    pub async fn generate(&mut self, prompt: &str) -> GenerateOutcome {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            tracing::debug!("Ignoring empty prompt");
            return GenerateOutcome::EmptyPrompt;
        }
        if !self.state.begin_submit() {
            tracing::debug!("Generation already in flight, ignoring prompt {:?}", trimmed);
            return GenerateOutcome::Busy;
        }

        match self.backend.generate_story(trimmed).await {
            Ok(story) => {
                self.state.complete_submit(story.clone());
                GenerateOutcome::Generated(story)
            }
            Err(e) => {
                let message = banner_message(&e);
                self.state.fail_submit(message.clone());
                GenerateOutcome::Failed(message)
            }
        }
    }

    /// Refresh the collection from the backend
    ///
    /// On success the collection is replaced with the snapshot and true
    /// is returned. On failure the prior snapshot is kept and the
    /// failure is only logged; no user-facing error is produced for
    /// this path.
    pub async fn refresh(&mut self) -> bool {
        match self.backend.list_stories().await {
            Ok(stories) => {
                tracing::debug!("Replacing story collection with {} entries", stories.len());
                self.state.replace_stories(stories);
                true
            }
            Err(e) => {
                tracing::warn!("Story listing failed, keeping previous snapshot: {}", e);
                false
            }
        }
    }
}

/// User-facing banner text for a generation failure
fn banner_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FabulaError>() {
        Some(fe) => fe.banner_text(),
        None => err.to_string(),
    }
}
