// Resume scoring: validity check and hiring-manager analysis.
// All LLM calls go through the `TextGenerator` trait in llm_client.

pub mod analyzer;
pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod scorecard;
pub mod validator;
