//! Structured recipe generation with Google Gemini.
//!
//! The crate takes a dish name plus optional constraints, templates a
//! schema-constrained prompt, issues a single `generateContent` call and
//! decodes the JSON reply into a typed [`Recipe`]. The whole cycle is
//! driven through [`RecipePipeline::submit`], which owns the one piece of
//! process state ([`PipelineState`]); [`present`] maps a loaded recipe into
//! its read-only display form.
//!
//! ```no_run
//! use chef_gemini::{present, FormInput, GeminiConfig, RecipePipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfig::load()?;
//! let mut pipeline = RecipePipeline::from_config(&config);
//!
//! let input = FormInput::new("Brownie").with_details("sem gluten");
//! if let Err(field_errors) = pipeline.submit(&input).await {
//!     for (field, message) in field_errors.iter() {
//!         eprintln!("{field}: {message}");
//!     }
//! } else if let Some(recipe) = pipeline.state().recipe() {
//!     let view = present(recipe);
//!     println!("{}", view.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod form;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod request;

pub use client::{GeminiClient, TextModel};
pub use config::GeminiConfig;
pub use decode::decode;
pub use error::{ClientError, DecodeError, GenerateError};
pub use form::{form_fields, FieldConfig, WidgetKind};
pub use model::{Nutrition, PreparationTime, Recipe};
pub use pipeline::{PipelineState, RecipePipeline};
pub use prompt::build_prompt;
pub use render::{present, RecipeView};
pub use request::{validate, FieldErrors, FormInput, RecipeRequest};

/// Generate a recipe in one call, outside the pipeline state machine.
///
/// Loads configuration, validates the input, templates the prompt, invokes
/// Gemini and decodes the reply. Unlike [`RecipePipeline::submit`], errors
/// are returned to the caller instead of being collapsed into a state.
pub async fn generate_recipe(
    name: &str,
    details: Option<&str>,
) -> Result<Recipe, GenerateError> {
    let mut input = FormInput::new(name);
    if let Some(details) = details {
        input = input.with_details(details);
    }
    let request = validate(&input)?;

    let config = GeminiConfig::load()?;
    let client = GeminiClient::new(&config);

    let prompt = build_prompt(&request);
    let raw = client.generate(&prompt).await?;

    Ok(decode(&raw)?)
}
