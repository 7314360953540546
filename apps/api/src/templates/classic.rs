//! Classic template — serif type, centered header, understated rules.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:Georgia,'Times New Roman',serif;color:#222;padding:36px;\">");

    html.push_str(&format!(
        "<div style=\"text-align:center;border-bottom:1px solid #999;padding-bottom:14px;\">\
         <h1 style=\"font-size:26px;margin:0;letter-spacing:2px;\">{}</h1>",
        escape(&d.full_name)
    ));
    let contact = contact_line(doc);
    if !contact.is_empty() {
        html.push_str(&format!(
            "<p style=\"font-size:13px;color:#555;margin:6px 0 0;\">{contact}</p>"
        ));
    }
    html.push_str("</div>");

    if !d.summary.is_empty() {
        html.push_str(&heading("Professional Summary"));
        html.push_str(&format!(
            "<p style=\"font-style:italic;line-height:1.6;text-align:center;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Work Experience"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:14px;\">\
                 <p style=\"margin:0;\"><strong>{}</strong>, {} &mdash; <em>{}</em></p>\
                 <p style=\"margin:2px 0;font-size:13px;color:#555;\">{}</p>",
                escape(&work.job_title),
                escape(&work.company),
                escape(&work.location),
                date_range(&work.start_date, &work.end_date, work.current)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:4px 0;font-size:14px;line-height:1.6;\">{}</p>",
                    escape(&work.description)
                ));
            }
            let bullets = filled(&work.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:4px 0;padding-left:24px;font-size:14px;\">");
                for bullet in bullets {
                    html.push_str(&format!("<li>{}</li>", escape(bullet)));
                }
                html.push_str("</ul>");
            }
            html.push_str("</div>");
        }
    }

    if !doc.education.is_empty() {
        html.push_str(&heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:10px;\">\
                 <p style=\"margin:0;\"><strong>{}</strong>, {}</p>\
                 <p style=\"margin:2px 0;font-size:13px;color:#555;\">{}{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" &middot; {}", escape(g)))
                    .unwrap_or_default()
            ));
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Skills"));
        let names: Vec<String> = doc
            .skills
            .iter()
            .map(|s| format!("{} ({})", escape(&s.name), s.level.as_str()))
            .collect();
        html.push_str(&format!(
            "<p style=\"text-align:center;font-size:14px;\">{}</p>",
            names.join(" &bull; ")
        ));
    }

    if !doc.languages.is_empty() {
        html.push_str(&heading("Languages"));
        let names: Vec<String> = doc
            .languages
            .iter()
            .map(|l| format!("{} &mdash; {}", escape(&l.name), l.proficiency.as_str()))
            .collect();
        html.push_str(&format!(
            "<p style=\"text-align:center;font-size:14px;\">{}</p>",
            names.join(" &bull; ")
        ));
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:14px;text-align:center;\">\
                 <strong>{}</strong>, {} at {} &mdash; {} &middot; {}</p>",
                escape(&reference.name),
                escape(&reference.position),
                escape(&reference.company),
                escape(&reference.email),
                escape(&reference.phone)
            ));
        }
    }

    html.push_str("</div>");
    html
}

fn heading(text: &str) -> String {
    format!(
        "<h2 style=\"text-align:center;font-size:15px;letter-spacing:3px;\
         text-transform:uppercase;border-bottom:1px solid #ccc;\
         padding-bottom:4px;margin:22px 0 10px;\">{text}</h2>"
    )
}

fn contact_line(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut parts: Vec<String> = Vec::new();
    for value in [&d.email, &d.phone, &d.location] {
        if !value.is_empty() {
            parts.push(escape(value));
        }
    }
    for value in [&d.nationality, &d.marital_status, &d.linked_in, &d.portfolio] {
        if let Some(v) = value {
            parts.push(escape(v));
        }
    }
    if let Some(id_number) = &d.id_number {
        parts.push(format!("ID {}", escape(id_number)));
    }
    parts.join(" | ")
}
