//! Template renderers — pure, deterministic transforms from a `CvDocument`
//! to a print-ready HTML body, one module per visual style.
//!
//! Shared rules, enforced by every renderer independently:
//! - a section whose backing list is empty is omitted entirely, heading
//!   included; achievement lists drop empty placeholder strings
//! - optional personal fields render only when present
//! - dates display as short month + year; an entry with `current == true`
//!   always shows "Present", whatever end date is stored

pub mod classic;
pub mod corporate;
pub mod creative;
pub mod elegant;
pub mod executive;
pub mod modern;
pub mod shared;
pub mod simple;

use crate::models::cv::{CvDocument, TemplateId};

/// Renders `doc` with its selected template.
pub fn render(doc: &CvDocument) -> String {
    render_with(doc, doc.template)
}

/// Renders `doc` with an explicit template (preview override).
pub fn render_with(doc: &CvDocument, template: TemplateId) -> String {
    match template {
        TemplateId::Modern => modern::render(doc),
        TemplateId::Classic => classic::render(doc),
        TemplateId::Creative => creative::render(doc),
        TemplateId::Executive => executive::render(doc),
        TemplateId::Simple => simple::render(doc),
        TemplateId::Corporate => corporate::render(doc),
        TemplateId::Elegant => elegant::render(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{
        new_entry_id, CvDocument, Education, Language, LanguageProficiency, Reference, Skill,
        SkillLevel, TemplateId, WorkExperience,
    };

    fn full_doc() -> CvDocument {
        let mut doc = CvDocument::empty();
        doc.personal_details.full_name = "Thabo Mabena".to_string();
        doc.personal_details.email = "thabo@example.co.za".to_string();
        doc.personal_details.phone = "+27 82 555 0199".to_string();
        doc.personal_details.location = "Durban".to_string();
        doc.personal_details.nationality = Some("South African".to_string());
        doc.personal_details.summary = "Software developer with 5 years of experience.".to_string();
        doc.work_experience.push(WorkExperience {
            id: new_entry_id(),
            job_title: "Developer".to_string(),
            company: "Acme".to_string(),
            location: "Durban".to_string(),
            start_date: "2021-01".to_string(),
            end_date: "2020-05".to_string(),
            current: true,
            description: "Built things.".to_string(),
            achievements: vec!["Shipped v2".to_string(), String::new()],
        });
        doc.education.push(Education {
            id: new_entry_id(),
            degree: "BSc Computer Science".to_string(),
            institution: "UKZN".to_string(),
            location: "Durban".to_string(),
            start_date: "2014-02".to_string(),
            end_date: "2017-11".to_string(),
            current: false,
            grade: Some("Cum laude".to_string()),
            achievements: vec![],
        });
        doc.skills.push(Skill {
            id: new_entry_id(),
            name: "Rust".to_string(),
            level: SkillLevel::Advanced,
            category: None,
        });
        doc.languages.push(Language {
            id: new_entry_id(),
            name: "isiZulu".to_string(),
            proficiency: LanguageProficiency::Native,
        });
        doc.references.push(Reference {
            id: new_entry_id(),
            name: "Nomsa Cele".to_string(),
            position: "CTO".to_string(),
            company: "Acme".to_string(),
            email: "nomsa@example.co.za".to_string(),
            phone: "+27 83 555 0100".to_string(),
        });
        doc
    }

    #[test]
    fn test_empty_document_renders_no_section_headings() {
        let doc = CvDocument::empty();
        for template in TemplateId::ALL {
            let html = render_with(&doc, template).to_lowercase();
            for word in ["experience", "education", "skill", "language", "reference", "summary"] {
                assert!(
                    !html.contains(word),
                    "{template:?} rendered a '{word}' heading for an empty document"
                );
            }
        }
    }

    #[test]
    fn test_current_entry_always_shows_present() {
        // end_date carries a real value; current must still win.
        let doc = full_doc();
        for template in TemplateId::ALL {
            let html = render_with(&doc, template);
            assert!(html.contains("Present"), "{template:?} missing Present");
            assert!(
                !html.contains("May 2020"),
                "{template:?} rendered the stored end date of a current entry"
            );
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let doc = full_doc();
        for template in TemplateId::ALL {
            assert_eq!(
                render_with(&doc, template),
                render_with(&doc, template),
                "{template:?} is not deterministic"
            );
        }
    }

    #[test]
    fn test_all_templates_render_core_content() {
        let doc = full_doc();
        for template in TemplateId::ALL {
            let html = render_with(&doc, template);
            assert!(html.contains("Thabo Mabena"), "{template:?} missing name");
            assert!(html.contains("Acme"), "{template:?} missing company");
            assert!(html.contains("UKZN"), "{template:?} missing institution");
            assert!(html.contains("Rust"), "{template:?} missing skill");
            assert!(html.contains("isiZulu"), "{template:?} missing language");
            assert!(html.contains("Nomsa Cele"), "{template:?} missing reference");
            assert!(html.contains("Shipped v2"), "{template:?} missing achievement");
        }
    }

    #[test]
    fn test_empty_achievement_placeholders_are_dropped() {
        let doc = full_doc();
        for template in TemplateId::ALL {
            let html = render_with(&doc, template);
            assert!(!html.contains("<li></li>"), "{template:?} rendered an empty bullet");
        }
    }

    #[test]
    fn test_html_is_escaped() {
        let mut doc = full_doc();
        doc.personal_details.full_name = "Thabo <script>alert(1)</script>".to_string();
        for template in TemplateId::ALL {
            let html = render_with(&doc, template);
            assert!(!html.contains("<script>"), "{template:?} did not escape input");
        }
    }

    #[test]
    fn test_render_uses_selected_template() {
        let mut doc = full_doc();
        doc.template = TemplateId::Elegant;
        assert_eq!(render(&doc), elegant::render(&doc));
    }
}
