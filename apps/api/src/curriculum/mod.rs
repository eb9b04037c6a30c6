// Curriculum generation pipeline.
// Implements: parameter model, prompt building, the generate action.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod params;
pub mod prompts;
