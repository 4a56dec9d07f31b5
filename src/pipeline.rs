use log::{debug, error};

use crate::client::{GeminiClient, TextModel};
use crate::config::GeminiConfig;
use crate::decode::decode;
use crate::error::GenerateError;
use crate::model::Recipe;
use crate::prompt::build_prompt;
use crate::request::{validate, FieldErrors, FormInput, RecipeRequest};

/// Lifecycle of one submission.
///
/// Starts `Idle`, moves to `Loading` when a validated submission begins, and
/// terminates in `Loaded` or `Failed`. `Failed` is idle-equivalent: the form
/// is shown again and a new submission may begin.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PipelineState {
    #[default]
    Idle,
    Loading,
    Loaded(Recipe),
    Failed,
}

impl PipelineState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PipelineState::Loading)
    }

    /// The decoded recipe, when one has been loaded.
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            PipelineState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }
}

/// Orchestrates one submission: validate, template, invoke, decode.
///
/// Sole owner and sole writer of [`PipelineState`]; observers read it
/// through [`state`](Self::state) after `submit` resolves. `&mut self` on
/// `submit` makes the one-run-at-a-time property a compile-time guarantee.
pub struct RecipePipeline {
    model: Box<dyn TextModel>,
    state: PipelineState,
}

impl RecipePipeline {
    pub fn new(model: Box<dyn TextModel>) -> Self {
        RecipePipeline {
            model,
            state: PipelineState::Idle,
        }
    }

    /// Build a pipeline backed by a [`GeminiClient`] for the given
    /// configuration.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(Box::new(GeminiClient::new(config)))
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Run one submission to completion.
    ///
    /// Validation failures are returned for inline display and leave the
    /// state untouched; they are not pipeline failures. Past validation the
    /// state moves to `Loading`, the three stages run strictly in sequence,
    /// and the run terminates in `Loaded` or `Failed`. Client and decode
    /// errors are logged for diagnostics and collapsed into `Failed`; no
    /// structured detail reaches the state.
    pub async fn submit(&mut self, input: &FormInput) -> Result<(), FieldErrors> {
        let request = validate(input)?;

        self.state = PipelineState::Loading;
        match self.run(&request).await {
            Ok(recipe) => self.state = PipelineState::Loaded(recipe),
            Err(err) => {
                error!("recipe generation for \"{}\" failed: {err}", request.name());
                self.state = PipelineState::Failed;
            }
        }

        Ok(())
    }

    async fn run(&self, request: &RecipeRequest) -> Result<Recipe, GenerateError> {
        let prompt = build_prompt(request);
        debug!(
            "prompting {} with {} bytes",
            self.model.model_name(),
            prompt.len()
        );

        let raw = self.model.generate(&prompt).await?;
        let recipe = decode(&raw)?;

        Ok(recipe)
    }
}
