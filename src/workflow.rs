use crate::services::{ImageService, StoryService};
use anyhow::{bail, Result};
use log::{info, warn};

/// The single message shown to the user for any failure; causes are logged,
/// never surfaced.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    AwaitingStory,
    AwaitingImage,
    Succeeded,
    Failed,
}

/// Result of the most recent generation attempt. `story` and `error` can
/// both be set: a story-only success followed by an illustration failure is
/// a valid, displayable partial result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub story: String,
    pub image: String,
    pub error: String,
    pub loading: bool,
}

/// Drives the two sequential remote calls for one attempt: story first,
/// then illustration. Only one attempt may be in flight at a time.
#[derive(Debug, Default)]
pub struct GenerationWorkflow {
    phase: Phase,
    output: Output,
}

impl GenerationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn is_loading(&self) -> bool {
        self.output.loading
    }

    fn begin(&mut self) -> Result<()> {
        if self.output.loading {
            bail!("a generation attempt is already in flight");
        }
        self.output.error.clear();
        self.output.story.clear();
        self.output.loading = true;
        self.phase = Phase::Submitting;
        Ok(())
    }

    fn story_requested(&mut self) {
        self.phase = Phase::AwaitingStory;
    }

    fn story_succeeded(&mut self, text: String) {
        self.output.story = text;
        self.phase = Phase::AwaitingImage;
    }

    fn story_failed(&mut self) {
        self.output.error = GENERIC_ERROR.to_string();
        self.output.loading = false;
        self.phase = Phase::Failed;
    }

    fn image_succeeded(&mut self, reference: String) {
        self.output.image = reference;
        self.output.loading = false;
        self.phase = Phase::Succeeded;
    }

    fn image_failed(&mut self) {
        // The story fetched in this attempt is retained alongside the error.
        self.output.error = GENERIC_ERROR.to_string();
        self.output.loading = false;
        self.phase = Phase::Failed;
    }

    /// Runs one attempt against the composed `prompt`. The prompt is
    /// captured once and used for both calls; the image request is never
    /// issued before the story response is observed. Service failures are
    /// published to [`Output`], not returned; `Err` here means the caller
    /// tried to start a second attempt while one was in flight.
    pub async fn run(
        &mut self,
        story_service: &dyn StoryService,
        image_service: &dyn ImageService,
        prompt: &str,
    ) -> Result<()> {
        self.begin()?;
        let snapshot = prompt.to_string();

        self.story_requested();
        match story_service.generate_story(&snapshot).await {
            Ok(text) => {
                info!("story generated ({} chars)", text.len());
                self.story_succeeded(text);
            }
            Err(e) => {
                warn!("story generation failed: {:#}", e);
                self.story_failed();
                return Ok(());
            }
        }

        let image_prompt = format!("Illustration of: {}", snapshot);
        match image_service.generate_image(&image_prompt).await {
            Ok(reference) => {
                info!("illustration generated");
                self.image_succeeded(reference);
            }
            Err(e) => {
                warn!("image generation failed: {:#}", e);
                self.image_failed();
            }
        }

        Ok(())
    }
}
