//! The generate action — orchestrates one click's worth of pipeline.
//!
//! Flow: validate topic → build_prompt → one LLM call (stateless, or over
//! the visit's turn history in session mode) → return the text.
//!
//! One attempt per trigger. A failed call surfaces a single generation
//! error and leaves the session history untouched, so the next trigger
//! starts from a clean state.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::GenerationMode;
use crate::curriculum::builder::build_prompt;
use crate::curriculum::params::ParameterSet;
use crate::curriculum::prompts::SYSTEM_PROMPT;
use crate::errors::AppError;
use crate::llm_client::{TextGenerator, Turn};
use crate::session::SessionStore;

/// Result of one successful generate action. The prompt is echoed back for
/// display and debugging; `session_id` is set only in session mode.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    pub curriculum_text: String,
    pub prompt: String,
    pub session_id: Option<Uuid>,
}

pub async fn generate_curriculum(
    generator: &dyn TextGenerator,
    sessions: &SessionStore,
    mode: GenerationMode,
    params: &ParameterSet,
    session_id: Option<Uuid>,
) -> Result<GenerateOutcome, AppError> {
    if params.topic_is_blank() {
        return Err(AppError::Validation(
            "Please enter a course topic.".to_string(),
        ));
    }

    let prompt = build_prompt(params);

    let (curriculum_text, session_id) = match mode {
        GenerationMode::Stateless => {
            let turns = vec![Turn::user(prompt.clone())];
            let text = generator
                .generate(SYSTEM_PROMPT, &turns)
                .await
                .map_err(|e| AppError::Generation(e.to_string()))?;
            (text, None)
        }
        GenerationMode::Session => {
            let (id, mut turns) = sessions.history(session_id).await;
            turns.push(Turn::user(prompt.clone()));
            let text = generator
                .generate(SYSTEM_PROMPT, &turns)
                .await
                .map_err(|e| AppError::Generation(e.to_string()))?;
            // Commit the exchange only now that the call succeeded
            sessions
                .commit_exchange(id, prompt.clone(), text.clone())
                .await;
            (text, Some(id))
        }
    };

    info!(
        "Generated curriculum for topic '{}' ({} chars)",
        params.topic.trim(),
        curriculum_text.len()
    );

    Ok(GenerateOutcome {
        curriculum_text,
        prompt,
        session_id,
    })
}
