// Prompt constants for the analysis pipeline.

/// ATS analysis prompt template.
/// Replace `{resume_text}` and `{job_description}` before sending.
/// Both are embedded verbatim — no escaping. Recovery downstream has to cope
/// with whatever braces or quotes the embedded text drags into the output.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Act as a highly skilled ATS expert. Evaluate the resume against the provided job description.
Suggest areas of improvement and assign a percentage match. Identify missing keywords and provide actionable recommendations. Make sure to answer it in english.
Format the response as:
{
    "JD_Match": "Percentage",
    "MissingKeywords": [],
    "Profile_Summary": "",
    "Enhancements_to_be_done": []
}
Resume: {resume_text}
Job Description: {job_description}"#;

/// Builds the single instruction string sent to the model for one run.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_analysis_prompt(
            "Experienced Python developer",
            "Looking for a Java developer",
        );
        assert!(prompt.contains("Resume: Experienced Python developer"));
        assert!(prompt.contains("Job Description: Looking for a Java developer"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_names_all_four_fields() {
        let prompt = build_analysis_prompt("r", "jd");
        for field in [
            "JD_Match",
            "MissingKeywords",
            "Profile_Summary",
            "Enhancements_to_be_done",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_prompt_keeps_braces_and_quotes_from_inputs() {
        // Inputs may themselves contain JSON-looking text; it goes through as-is.
        let prompt = build_analysis_prompt(r#"{"skills": ["rust"]}"#, r#"needs: "go""#);
        assert!(prompt.contains(r#"{"skills": ["rust"]}"#));
        assert!(prompt.contains(r#"needs: "go""#));
    }
}
