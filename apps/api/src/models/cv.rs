//! The CV document model — the aggregate every other module reads or rewrites.
//!
//! Pure data. Wire names are camelCase so API bodies and the JSON files the
//! storage layer writes stay interchangeable with older exports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returns a fresh identifier for a list entry (work, education, skill, ...).
/// Entry ids are unique within a document, stable across edits, never reused.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns a fresh document identifier.
pub fn new_document_id() -> String {
    format!("cv-{}", Uuid::new_v4())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// "YYYY-MM" as entered; renderers format it for display.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    /// Display order. May contain empty placeholders pending user input.
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Maps loosely formatted text (assist output, old exports) onto the
    /// closed set. Unrecognized values land on Intermediate.
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "basic" | "novice" => SkillLevel::Beginner,
            "advanced" | "proficient" => SkillLevel::Advanced,
            "expert" | "master" => SkillLevel::Expert,
            _ => SkillLevel::Intermediate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageProficiency {
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl LanguageProficiency {
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "basic" | "beginner" | "elementary" => LanguageProficiency::Basic,
            "fluent" | "advanced" | "professional" => LanguageProficiency::Fluent,
            "native" | "mother tongue" | "first language" => LanguageProficiency::Native,
            _ => LanguageProficiency::Conversational,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageProficiency::Basic => "Basic",
            LanguageProficiency::Conversational => "Conversational",
            LanguageProficiency::Fluent => "Fluent",
            LanguageProficiency::Native => "Native",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// The closed set of visual templates. Unknown wire values fall back to
/// Modern at the deserialization boundary, which doubles as the render-time
/// default for documents written by older builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Executive,
    Simple,
    Corporate,
    Elegant,
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "classic" => TemplateId::Classic,
            "creative" => TemplateId::Creative,
            "executive" => TemplateId::Executive,
            "simple" => TemplateId::Simple,
            "corporate" => TemplateId::Corporate,
            "elegant" => TemplateId::Elegant,
            _ => TemplateId::Modern,
        }
    }
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Executive,
        TemplateId::Simple,
        TemplateId::Corporate,
        TemplateId::Elegant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::Simple => "simple",
            TemplateId::Corporate => "corporate",
            TemplateId::Elegant => "elegant",
        }
    }
}

/// Aggregate root: one complete CV draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub id: String,
    #[serde(default)]
    pub personal_details: PersonalDetails,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub template: TemplateId,
    pub last_modified: DateTime<Utc>,
}

impl CvDocument {
    /// A blank document: fresh id, empty lists, default template.
    pub fn empty() -> Self {
        CvDocument {
            id: new_document_id(),
            personal_details: PersonalDetails::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            references: Vec::new(),
            template: TemplateId::default(),
            last_modified: Utc::now(),
        }
    }

    /// Shallow merge: every provided patch field wholly replaces the
    /// corresponding field. List fields are replaced, never spliced —
    /// callers editing one entry read-modify-write the full list.
    /// `last_modified` is NOT touched here; the store stamps it.
    pub fn merged(mut self, patch: CvPatch) -> Self {
        if let Some(v) = patch.personal_details {
            self.personal_details = v;
        }
        if let Some(v) = patch.work_experience {
            self.work_experience = v;
        }
        if let Some(v) = patch.education {
            self.education = v;
        }
        if let Some(v) = patch.skills {
            self.skills = v;
        }
        if let Some(v) = patch.languages {
            self.languages = v;
        }
        if let Some(v) = patch.references {
            self.references = v;
        }
        if let Some(v) = patch.template {
            self.template = v;
        }
        self
    }
}

/// Partial document for `CvStore::update`. Any subset of top-level fields;
/// absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PersonalDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_blank() {
        let doc = CvDocument::empty();
        assert!(doc.id.starts_with("cv-"));
        assert_eq!(doc.personal_details, PersonalDetails::default());
        assert!(doc.work_experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.languages.is_empty());
        assert!(doc.references.is_empty());
        assert_eq!(doc.template, TemplateId::Modern);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(new_entry_id(), new_entry_id());
        assert_ne!(CvDocument::empty().id, CvDocument::empty().id);
    }

    #[test]
    fn test_merged_replaces_only_provided_fields() {
        let doc = CvDocument::empty();
        let id = doc.id.clone();
        let merged = doc.merged(CvPatch {
            personal_details: Some(PersonalDetails {
                full_name: "Thabo Mabena".to_string(),
                ..PersonalDetails::default()
            }),
            ..CvPatch::default()
        });
        assert_eq!(merged.id, id);
        assert_eq!(merged.personal_details.full_name, "Thabo Mabena");
        assert!(merged.work_experience.is_empty());
    }

    #[test]
    fn test_merged_replaces_whole_list() {
        let doc = CvDocument::empty().merged(CvPatch {
            skills: Some(vec![
                Skill {
                    id: new_entry_id(),
                    name: "Rust".to_string(),
                    level: SkillLevel::Expert,
                    category: None,
                },
                Skill {
                    id: new_entry_id(),
                    name: "SQL".to_string(),
                    level: SkillLevel::Advanced,
                    category: Some("Data".to_string()),
                },
            ]),
            ..CvPatch::default()
        });
        let doc = doc.merged(CvPatch {
            skills: Some(vec![]),
            ..CvPatch::default()
        });
        assert!(doc.skills.is_empty(), "list fields replace wholesale");
    }

    #[test]
    fn test_template_id_unknown_falls_back_to_modern() {
        let t: TemplateId = serde_json::from_str("\"holographic\"").unwrap();
        assert_eq!(t, TemplateId::Modern);
        let t: TemplateId = serde_json::from_str("\"elegant\"").unwrap();
        assert_eq!(t, TemplateId::Elegant);
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut doc = CvDocument::empty();
        doc.personal_details.full_name = "Naledi Khumalo".to_string();
        doc.personal_details.nationality = Some("South African".to_string());
        doc.work_experience.push(WorkExperience {
            id: new_entry_id(),
            job_title: "Developer".to_string(),
            company: "Acme".to_string(),
            location: "Durban".to_string(),
            start_date: "2021-01".to_string(),
            end_date: String::new(),
            current: true,
            description: String::new(),
            achievements: vec!["Shipped v1".to_string(), String::new()],
        });
        doc.template = TemplateId::Corporate;

        let json = serde_json::to_string(&doc).unwrap();
        let back: CvDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        // wire names stay camelCase
        assert!(json.contains("\"personalDetails\""));
        assert!(json.contains("\"workExperience\""));
        assert!(json.contains("\"lastModified\""));
        assert!(json.contains("\"template\":\"corporate\""));
    }

    #[test]
    fn test_skill_level_from_loose() {
        assert_eq!(SkillLevel::from_loose("Expert"), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_loose(" beginner "), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_loose("wizard"), SkillLevel::Intermediate);
    }

    #[test]
    fn test_language_proficiency_from_loose() {
        assert_eq!(
            LanguageProficiency::from_loose("NATIVE"),
            LanguageProficiency::Native
        );
        assert_eq!(
            LanguageProficiency::from_loose("somewhat ok"),
            LanguageProficiency::Conversational
        );
    }
}
