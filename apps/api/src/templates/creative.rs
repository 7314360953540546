//! Creative template — purple sidebar with contact, skills and languages;
//! main column for the narrative sections.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

const SIDEBAR: &str = "#5B3E96";

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str(
        "<div style=\"font-family:'Segoe UI',Verdana,sans-serif;color:#222;\
         display:flex;min-height:100%;\">",
    );

    // Sidebar
    html.push_str(&format!(
        "<div style=\"background:{SIDEBAR};color:#fff;width:32%;padding:28px 20px;\">"
    ));
    html.push_str(&format!(
        "<h1 style=\"font-size:24px;margin:0 0 16px;line-height:1.2;\">{}</h1>",
        escape(&d.full_name)
    ));
    let mut contact: Vec<String> = Vec::new();
    for value in [&d.email, &d.phone, &d.location] {
        if !value.is_empty() {
            contact.push(escape(value));
        }
    }
    if let Some(id_number) = &d.id_number {
        contact.push(format!("ID: {}", escape(id_number)));
    }
    for value in [&d.nationality, &d.marital_status, &d.linked_in, &d.portfolio] {
        if let Some(v) = value {
            contact.push(escape(v));
        }
    }
    if !contact.is_empty() {
        html.push_str("<div style=\"font-size:12px;line-height:1.8;\">");
        for line in contact {
            html.push_str(&format!("<p style=\"margin:0;\">{line}</p>"));
        }
        html.push_str("</div>");
    }

    if !doc.skills.is_empty() {
        html.push_str(&sidebar_heading("Skills"));
        for skill in &doc.skills {
            // Proficiency as a filled bar, one notch per level.
            let notches = match skill.level {
                crate::models::cv::SkillLevel::Beginner => 1,
                crate::models::cv::SkillLevel::Intermediate => 2,
                crate::models::cv::SkillLevel::Advanced => 3,
                crate::models::cv::SkillLevel::Expert => 4,
            };
            let width = notches * 25;
            html.push_str(&format!(
                "<p style=\"margin:6px 0 2px;font-size:12px;\">{}</p>\
                 <div style=\"background:rgba(255,255,255,0.25);height:5px;border-radius:3px;\">\
                 <div style=\"background:#fff;width:{width}%;height:5px;border-radius:3px;\"></div></div>",
                escape(&skill.name)
            ));
        }
    }

    if !doc.languages.is_empty() {
        html.push_str(&sidebar_heading("Languages"));
        for language in &doc.languages {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:12px;\">{} &mdash; {}</p>",
                escape(&language.name),
                language.proficiency.as_str()
            ));
        }
    }
    html.push_str("</div>");

    // Main column
    html.push_str("<div style=\"width:68%;padding:28px 24px;\">");

    if !d.summary.is_empty() {
        html.push_str(&main_heading("About Me"));
        html.push_str(&format!(
            "<p style=\"font-size:13px;line-height:1.6;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&main_heading("Work Experience"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:14px;border-left:3px solid {SIDEBAR};padding-left:12px;\">\
                 <h3 style=\"margin:0;font-size:15px;\">{}</h3>\
                 <p style=\"margin:2px 0;font-size:13px;color:#444;\">{} &middot; {}</p>\
                 <p style=\"margin:2px 0;font-size:12px;color:#777;\">{}</p>",
                escape(&work.job_title),
                escape(&work.company),
                escape(&work.location),
                date_range(&work.start_date, &work.end_date, work.current)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:4px 0;font-size:13px;line-height:1.5;\">{}</p>",
                    escape(&work.description)
                ));
            }
            let bullets = filled(&work.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:4px 0;padding-left:18px;font-size:13px;\">");
                for bullet in bullets {
                    html.push_str(&format!("<li>{}</li>", escape(bullet)));
                }
                html.push_str("</ul>");
            }
            html.push_str("</div>");
        }
    }

    if !doc.education.is_empty() {
        html.push_str(&main_heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:10px;\">\
                 <h3 style=\"margin:0;font-size:14px;\">{}</h3>\
                 <p style=\"margin:2px 0;font-size:13px;color:#444;\">{}, {}</p>\
                 <p style=\"margin:2px 0;font-size:12px;color:#777;\">{}{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.location),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" &middot; {}", escape(g)))
                    .unwrap_or_default()
            ));
        }
    }

    if !doc.references.is_empty() {
        html.push_str(&main_heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:13px;\"><strong>{}</strong>, {} at {}<br>\
                 <span style=\"color:#666;\">{} &middot; {}</span></p>",
                escape(&reference.name),
                escape(&reference.position),
                escape(&reference.company),
                escape(&reference.email),
                escape(&reference.phone)
            ));
        }
    }

    html.push_str("</div></div>");
    html
}

fn sidebar_heading(text: &str) -> String {
    format!(
        "<h2 style=\"font-size:14px;text-transform:uppercase;letter-spacing:1px;\
         border-bottom:1px solid rgba(255,255,255,0.4);padding-bottom:4px;\
         margin:20px 0 8px;\">{text}</h2>"
    )
}

fn main_heading(text: &str) -> String {
    format!(
        "<h2 style=\"color:{SIDEBAR};font-size:16px;text-transform:uppercase;\
         letter-spacing:1px;margin:18px 0 10px;\">{text}</h2>"
    )
}
