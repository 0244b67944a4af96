// Prompt templates for the scoring module.
// Placeholders are replaced verbatim; there is no escaping of the resume text.

/// Validity check prompt. Replace `{resume_text}` before sending.
pub const VALIDATION_PROMPT_TEMPLATE: &str = "You are an expert in evaluating resumes. \
Determine if the following text is a valid resume, do not worry about the layout or formatting \
or structuring, just check if the given text is a resume or not \
Respond strictly in JSON format with two keys: \"valid\" (a boolean) and \"comments\" (a brief explanation). \
Here is the resume text: {resume_text}";

/// Hiring-manager analysis prompt. Replace `{role}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"
You are an expert resume analyzer. Act like a realistic hiring manager.
Analyze the following resume text for a candidate applying for the role "{role}". You can be as critical as needed.
Return a JSON response with the following keys:
- "overall_cv_score": numeric score between 0 and 100.
- "uniqueness_score": numeric score between 0 and 100.
- "projects_score": numeric score between 0 and 100.
- "work_experience_score": numeric score between 0 and 100.
- "skills_score": numeric score between 0 and 100.
- "education_score": numeric score between 0 and 100.
- "best_suited_role": the best suited elaborate niche role for the candidate.
- "overall_summary": a detailed, crisp, to-the-point, actionable summary of the resume.
- "suggestions": a list of actionable, implementable, realistic suggestions for improvement.
Respond strictly in JSON format.
Resume text: {resume_text}
Ideal role: {role}
"#;

pub fn build_validation_prompt(resume_text: &str) -> String {
    VALIDATION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn build_analysis_prompt(resume_text: &str, role: &str) -> String {
    // Role first: a resume that happens to contain "{role}" must stay untouched.
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{resume_text}", resume_text)
}
