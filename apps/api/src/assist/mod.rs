//! Content-Assist client — the single point of entry for all generative-text
//! calls in the service.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! Every operation is one request/response round trip: no retry, no
//! streaming. Results never touch the store here; they flow back to the
//! caller, which funnels accepted changes through `CvStore::update`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use crate::models::cv::{
    new_entry_id, CvPatch, Education, Language, LanguageProficiency, PersonalDetails, Skill,
    SkillLevel, WorkExperience,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model for the schema-constrained full-document call.
const GENERATE_MODEL: &str = "gemini-2.5-flash";
/// Model for the short free-text operations.
const TEXT_MODEL: &str = "gemini-2.0-flash-latest";
const REQUEST_TIMEOUT_SECS: u64 = 30;

const MAX_SUGGESTED_ACHIEVEMENTS: usize = 4;
const MAX_SUGGESTED_SKILLS: usize = 10;

#[derive(Debug, Error)]
pub enum AssistError {
    /// API credential absent — detected before any network call.
    #[error("AI features are not available")]
    Unavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Assist API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Assist service returned empty content")]
    EmptyContent,

    /// The generated document fragment failed schema validation.
    /// The whole operation fails; no partial fragment is accepted.
    #[error("Generated CV failed validation: {0}")]
    Schema(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Gemini generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    fn text(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_k: None,
            top_p: None,
            max_output_tokens,
            response_mime_type: None,
            response_schema: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generated document fragment
// ────────────────────────────────────────────────────────────────────────────

/// Structured fragment returned by full-document generation. Carries content
/// only — entry ids are assigned when the fragment becomes a patch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvFragment {
    pub personal_details: FragmentPersonalDetails,
    pub work_experience: Vec<FragmentWorkExperience>,
    pub education: Vec<FragmentEducation>,
    pub skills: Vec<FragmentSkill>,
    pub languages: Vec<FragmentLanguage>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentPersonalDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentWorkExperience {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentEducation {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSkill {
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentLanguage {
    pub name: String,
    #[serde(default)]
    pub proficiency: String,
}

impl CvFragment {
    /// Converts the fragment into a store patch: fresh entry ids, loose
    /// level/proficiency strings mapped onto the closed enums.
    pub fn into_patch(self) -> CvPatch {
        let personal_details = PersonalDetails {
            full_name: self.personal_details.full_name,
            email: self.personal_details.email,
            phone: self.personal_details.phone,
            location: self.personal_details.location,
            linked_in: self.personal_details.linkedin.filter(|s| !s.is_empty()),
            portfolio: self.personal_details.website.filter(|s| !s.is_empty()),
            summary: self.personal_details.summary,
            ..Default::default()
        };

        let work_experience = self
            .work_experience
            .into_iter()
            .map(|w| WorkExperience {
                id: new_entry_id(),
                job_title: w.job_title,
                company: w.company,
                location: w.location,
                start_date: w.start_date,
                end_date: w.end_date,
                current: w.current,
                description: w.description,
                achievements: w.achievements,
            })
            .collect();

        let education = self
            .education
            .into_iter()
            .map(|e| Education {
                id: new_entry_id(),
                degree: e.degree,
                institution: e.institution,
                location: e.location,
                start_date: e.start_date,
                end_date: e.end_date,
                current: false,
                grade: e.grade.filter(|s| !s.is_empty()),
                achievements: e.achievements,
            })
            .collect();

        let skills = self
            .skills
            .into_iter()
            .map(|s| Skill {
                id: new_entry_id(),
                level: SkillLevel::from_loose(&s.level),
                name: s.name,
                category: s.category.filter(|c| !c.is_empty()),
            })
            .collect();

        let languages = self
            .languages
            .into_iter()
            .map(|l| Language {
                id: new_entry_id(),
                proficiency: LanguageProficiency::from_loose(&l.proficiency),
                name: l.name,
            })
            .collect();

        CvPatch {
            personal_details: Some(personal_details),
            work_experience: Some(work_experience),
            education: Some(education),
            skills: Some(skills),
            languages: Some(languages),
            ..CvPatch::default()
        }
    }
}

/// Response schema sent with the full-document call so the model is
/// constrained to the fragment shape.
fn cv_fragment_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "personalDetails": {
                "type": "object",
                "properties": {
                    "fullName": { "type": "string" },
                    "email": { "type": "string" },
                    "phone": { "type": "string" },
                    "location": { "type": "string" },
                    "linkedin": { "type": "string" },
                    "website": { "type": "string" },
                    "summary": { "type": "string" }
                },
                "required": ["fullName", "email", "phone", "location", "summary"]
            },
            "workExperience": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "jobTitle": { "type": "string" },
                        "company": { "type": "string" },
                        "location": { "type": "string" },
                        "startDate": { "type": "string" },
                        "endDate": { "type": "string" },
                        "current": { "type": "boolean" },
                        "description": { "type": "string" },
                        "achievements": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["jobTitle", "company", "location", "startDate",
                                 "endDate", "current", "description", "achievements"]
                }
            },
            "education": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "degree": { "type": "string" },
                        "institution": { "type": "string" },
                        "location": { "type": "string" },
                        "startDate": { "type": "string" },
                        "endDate": { "type": "string" },
                        "grade": { "type": "string" },
                        "achievements": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["degree", "institution", "location", "startDate", "endDate"]
                }
            },
            "skills": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "level": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["name", "level", "category"]
                }
            },
            "languages": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "proficiency": { "type": "string" }
                    },
                    "required": ["name", "proficiency"]
                }
            }
        },
        "required": ["personalDetails", "workExperience", "education", "skills", "languages"]
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single content-assist client used by all handlers.
/// Constructed with an optional API key: when absent, every operation fails
/// fast with `AssistError::Unavailable` before any network I/O, and the
/// service runs with AI features degraded.
#[derive(Clone)]
pub struct AssistClient {
    client: Client,
    api_key: Option<String>,
}

impl AssistClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a full document fragment from a free-text description.
    /// Schema validation is all-or-nothing: a response that does not parse
    /// into `CvFragment` fails the whole operation.
    pub async fn generate_cv(&self, description: &str) -> Result<CvFragment, AssistError> {
        let prompt =
            prompts::GENERATE_CV_PROMPT_TEMPLATE.replace("{description}", description.trim());
        let config = GenerationConfig {
            temperature: 0.7,
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: 4096,
            response_mime_type: Some("application/json"),
            response_schema: Some(cv_fragment_response_schema()),
        };
        let text = self.call(GENERATE_MODEL, &prompt, config).await?;
        serde_json::from_str::<CvFragment>(&text)
            .map_err(|e| AssistError::Schema(format!("generated CV did not match schema: {e}")))
    }

    /// Enhance a single work-experience description. Plain string, 1-2
    /// sentences.
    pub async fn enhance_description(
        &self,
        job_title: &str,
        company: &str,
        description: &str,
    ) -> Result<String, AssistError> {
        let prompt = prompts::ENHANCE_DESCRIPTION_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{company}", company)
            .replace("{description}", or_placeholder(description));
        let text = self
            .call(TEXT_MODEL, &prompt, GenerationConfig::text(0.7, 100))
            .await?;
        Ok(text.trim().to_string())
    }

    /// Generate a professional summary from existing entries. Plain string,
    /// 2-3 sentences.
    pub async fn generate_summary(
        &self,
        work_experience: &[WorkExperience],
        education: &[Education],
        skills: &[Skill],
    ) -> Result<String, AssistError> {
        let experience_lines = work_experience
            .iter()
            .map(|w| {
                let end = if w.current { "Present" } else { w.end_date.as_str() };
                format!("- {} at {} ({} - {})", w.job_title, w.company, w.start_date, end)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let education_lines = education
            .iter()
            .map(|e| format!("- {} from {}", e.degree, e.institution))
            .collect::<Vec<_>>()
            .join("\n");
        let skill_names = skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = prompts::GENERATE_SUMMARY_PROMPT_TEMPLATE
            .replace("{experience_lines}", &experience_lines)
            .replace("{education_lines}", &education_lines)
            .replace("{skill_names}", &skill_names);
        let text = self
            .call(TEXT_MODEL, &prompt, GenerationConfig::text(0.7, 150))
            .await?;
        Ok(text.trim().to_string())
    }

    /// Suggest 3-4 achievement bullets for a role, stripped of bullet markup.
    pub async fn suggest_achievements(
        &self,
        job_title: &str,
        company: &str,
        description: &str,
    ) -> Result<Vec<String>, AssistError> {
        let prompt = prompts::SUGGEST_ACHIEVEMENTS_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{company}", company)
            .replace("{description}", or_placeholder(description));
        let text = self
            .call(GENERATE_MODEL, &prompt, GenerationConfig::text(0.8, 200))
            .await?;
        Ok(parse_list(&text, MAX_SUGGESTED_ACHIEVEMENTS))
    }

    /// Suggest up to 10 skill names for a role/industry, stripped of bullet
    /// and numbering markup.
    pub async fn suggest_skills(
        &self,
        job_title: &str,
        industry: &str,
    ) -> Result<Vec<String>, AssistError> {
        let prompt = prompts::SUGGEST_SKILLS_PROMPT_TEMPLATE
            .replace("{job_title}", if job_title.is_empty() { "Professional" } else { job_title })
            .replace("{industry}", if industry.is_empty() { "General" } else { industry });
        let text = self
            .call(TEXT_MODEL, &prompt, GenerationConfig::text(0.7, 150))
            .await?;
        Ok(parse_list(&text, MAX_SUGGESTED_SKILLS))
    }

    /// One generateContent round trip. No retry: a non-success status or an
    /// unparseable body is surfaced to the caller as a typed failure.
    async fn call(
        &self,
        model: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String, AssistError> {
        let api_key = self.api_key.as_deref().ok_or(AssistError::Unavailable)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: config,
        };

        let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={api_key}");
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Assist API returned {status}: {message}");
            return Err(AssistError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text().ok_or(AssistError::EmptyContent)?;
        debug!("Assist call to {model} returned {} chars", text.len());
        Ok(text.to_string())
    }
}

fn or_placeholder(description: &str) -> &str {
    if description.trim().is_empty() {
        "No description provided"
    } else {
        description
    }
}

/// Splits model output into lines, strips leading bullet/numbering markup,
/// drops empties, caps the count.
fn parse_list(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(strip_list_markup)
        .filter(|line| !line.is_empty())
        .take(max)
        .collect()
}

/// Strips leading `- `, `• `, `* ` and `1.` / `2)` style numbering.
fn strip_list_markup(line: &str) -> String {
    let mut s = line.trim();
    s = s.trim_start_matches(['-', '•', '*']).trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &s[digits..];
        if let Some(r) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            s = r.trim_start();
        }
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_list_markup_bullets() {
        assert_eq!(strip_list_markup("- Increased sales by 25%"), "Increased sales by 25%");
        assert_eq!(strip_list_markup("• Led a team of 5"), "Led a team of 5");
        assert_eq!(strip_list_markup("* Shipped 10 projects"), "Shipped 10 projects");
        assert_eq!(strip_list_markup("Plain line"), "Plain line");
    }

    #[test]
    fn test_strip_list_markup_numbering() {
        assert_eq!(strip_list_markup("1. Financial Reporting"), "Financial Reporting");
        assert_eq!(strip_list_markup("10) Stakeholder Management"), "Stakeholder Management");
        // A year is content, not numbering.
        assert_eq!(strip_list_markup("2020 vision planning"), "2020 vision planning");
    }

    #[test]
    fn test_parse_list_caps_and_filters() {
        let text = "- One\n\n- Two\n   \n- Three\n- Four\n- Five";
        assert_eq!(parse_list(text, 3), vec!["One", "Two", "Three"]);
        let skills: Vec<String> = parse_list(
            "1. A\n2. B\n3. C\n4. D\n5. E\n6. F\n7. G\n8. H\n9. I\n10. J\n11. K",
            MAX_SUGGESTED_SKILLS,
        );
        assert_eq!(skills.len(), 10);
        assert!(skills.iter().all(|s| !s.is_empty()));
        assert!(skills.iter().all(|s| !s.starts_with(['-', '•', '*'])));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "hello" } ] } }
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), Some("hello"));

        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(empty.text().is_none());
    }

    #[test]
    fn test_fragment_rejects_missing_required_fields() {
        // No personalDetails: whole fragment must fail, no partial acceptance.
        let bad = r#"{"workExperience":[],"education":[],"skills":[],"languages":[]}"#;
        assert!(serde_json::from_str::<CvFragment>(bad).is_err());
    }

    #[test]
    fn test_fragment_into_patch_assigns_ids_and_maps_levels() {
        let fragment: CvFragment = serde_json::from_str(
            r#"{
                "personalDetails": {
                    "fullName": "Lerato Dlamini",
                    "email": "lerato@example.co.za",
                    "phone": "+27 82 000 0000",
                    "location": "Johannesburg",
                    "summary": "Finance professional."
                },
                "workExperience": [{
                    "jobTitle": "Accountant",
                    "company": "Ledger & Co",
                    "location": "Johannesburg",
                    "startDate": "2019-03",
                    "endDate": "",
                    "current": true,
                    "description": "Managed accounts.",
                    "achievements": ["Cut close time by 30%"]
                }],
                "education": [{
                    "degree": "BCom Accounting",
                    "institution": "Wits",
                    "location": "Johannesburg",
                    "startDate": "2015-01",
                    "endDate": "2018-12"
                }],
                "skills": [{"name": "IFRS", "level": "expert", "category": "Finance"}],
                "languages": [{"name": "isiZulu", "proficiency": "native"}]
            }"#,
        )
        .unwrap();

        let patch = fragment.into_patch();
        let work = patch.work_experience.unwrap();
        assert_eq!(work.len(), 1);
        assert!(!work[0].id.is_empty());
        let skills = patch.skills.unwrap();
        assert_eq!(skills[0].level, SkillLevel::Expert);
        let languages = patch.languages.unwrap();
        assert_eq!(languages[0].proficiency, LanguageProficiency::Native);
        let details = patch.personal_details.unwrap();
        assert_eq!(details.full_name, "Lerato Dlamini");
    }

    #[test]
    fn test_unavailable_without_api_key() {
        let client = AssistClient::new(None);
        assert!(!client.is_available());
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt
            .block_on(client.suggest_skills("Accountant", "Finance"))
            .unwrap_err();
        assert!(matches!(err, AssistError::Unavailable));
    }

    #[test]
    fn test_generation_config_wire_names() {
        let config = GenerationConfig {
            temperature: 0.7,
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: 4096,
            response_mime_type: Some("application/json"),
            response_schema: Some(serde_json::json!({"type": "object"})),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("maxOutputTokens").is_some());
        assert!(json.get("responseMimeType").is_some());
        assert!(json.get("topK").is_some());
    }
}
