// Analysis pipeline: prompt build → LLM call → response recovery.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod recovery;

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

use prompts::build_analysis_prompt;
use recovery::AnalysisResult;

/// Runs one analysis: builds the ATS prompt from the extracted resume text
/// and the job description, sends it to the model, and recovers the typed
/// result from the completion. Nothing here is retried.
pub async fn analyze_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_analysis_prompt(resume_text, job_description);

    let response = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("analysis call failed: {e}")))?;

    let text = response.text().ok_or_else(|| {
        warn!("LLM returned no usable completion for analysis run");
        AppError::Llm("model returned no usable completion".to_string())
    })?;

    Ok(recovery::recover_analysis(&text)?)
}
