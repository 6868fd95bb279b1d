// Candidate LLM prompt templates.
// All prompts for the candidates module are defined here.

/// Fixed extraction prompt for resume uploads. The model is told to return
/// only the JSON object; `extract::json` still tolerates fenced or
/// prose-wrapped completions.
pub const RESUME_EXTRACT_PROMPT: &str = r#"Strictly return a valid JSON object matching this format. Do not include any explanation, markdown, or text outside of the JSON:
{
  "name": "", "phone_number": "", "email": "", "summary": "", "location": "",
  "skills": [], "education": [], "experience": [], "projects": [],
  "certifications": [], "languages": [],
  "profiles": {"linkedin": "", "github": "", "portfolio": "", "twitter": "", "other": ""}
}"#;

/// Instruction for summarizing a single candidate record.
pub const CANDIDATE_SUMMARY_PROMPT: &str =
    "Write a 3-sentence professional summary based on this candidate's profile.";

/// Builds the natural-language filter instruction for `POST /showall`.
pub fn filter_prompt(query: &str) -> String {
    format!(
        "Filter the candidates for: {query}. Show suitable candidates with name and candidate_number."
    )
}

/// Builds the ranking instruction for `POST /compare`.
pub fn compare_prompt(job_description: &str) -> String {
    format!(
        "Compare these candidates against the job description and rank them accordingly: {job_description}"
    )
}
