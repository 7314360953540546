//! Executive template — charcoal header band, wide margins, restrained type.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:'Palatino Linotype',Georgia,serif;color:#2b2b2b;\">");

    // Header band
    html.push_str(&format!(
        "<div style=\"background:#2f3640;color:#fff;padding:30px 40px;\">\
         <h1 style=\"margin:0;font-size:30px;letter-spacing:1px;\">{}</h1>",
        escape(&d.full_name)
    ));
    let mut contact: Vec<String> = Vec::new();
    for value in [&d.email, &d.phone, &d.location] {
        if !value.is_empty() {
            contact.push(escape(value));
        }
    }
    for value in [&d.linked_in, &d.portfolio] {
        if let Some(v) = value {
            contact.push(escape(v));
        }
    }
    if !contact.is_empty() {
        html.push_str(&format!(
            "<p style=\"margin:8px 0 0;font-size:13px;color:#dcdde1;\">{}</p>",
            contact.join("&ensp;|&ensp;")
        ));
    }
    let mut personal: Vec<String> = Vec::new();
    if let Some(id_number) = &d.id_number {
        personal.push(format!("ID: {}", escape(id_number)));
    }
    if let Some(nationality) = &d.nationality {
        personal.push(escape(nationality));
    }
    if let Some(marital_status) = &d.marital_status {
        personal.push(escape(marital_status));
    }
    if !personal.is_empty() {
        html.push_str(&format!(
            "<p style=\"margin:4px 0 0;font-size:12px;color:#b2bec3;\">{}</p>",
            personal.join("&ensp;|&ensp;")
        ));
    }
    html.push_str("</div><div style=\"padding:26px 40px;\">");

    if !d.summary.is_empty() {
        html.push_str(&heading("Executive Summary"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;line-height:1.7;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Professional Experience"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;\">\
                 <div style=\"display:flex;justify-content:space-between;align-items:baseline;\">\
                 <h3 style=\"margin:0;font-size:16px;\">{} &mdash; {}</h3>\
                 <span style=\"font-size:13px;color:#666;\">{}</span></div>\
                 <p style=\"margin:2px 0;font-size:13px;color:#666;\">{}</p>",
                escape(&work.job_title),
                escape(&work.company),
                date_range(&work.start_date, &work.end_date, work.current),
                escape(&work.location)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:6px 0;font-size:14px;line-height:1.6;\">{}</p>",
                    escape(&work.description)
                ));
            }
            let bullets = filled(&work.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:6px 0;padding-left:22px;font-size:14px;line-height:1.6;\">");
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
                "<div style=\"display:flex;justify-content:space-between;margin-bottom:8px;\">\
                 <div><strong style=\"font-size:14px;\">{}</strong>\
                 <p style=\"margin:2px 0;font-size:13px;color:#555;\">{}, {}{}</p></div>\
                 <span style=\"font-size:13px;color:#666;\">{}</span></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.location),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" &middot; {}", escape(g)))
                    .unwrap_or_default(),
                date_range(&edu.start_date, &edu.end_date, edu.current)
            ));
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Core Competencies"));
        html.push_str("<table style=\"width:100%;font-size:14px;border-collapse:collapse;\">");
        for row in doc.skills.chunks(2) {
            html.push_str("<tr>");
            for skill in row {
                html.push_str(&format!(
                    "<td style=\"padding:3px 0;width:50%;\">&bull; {} <span style=\"color:#888;\">({})</span></td>",
                    escape(&skill.name),
                    skill.level.as_str()
                ));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
    }

    if !doc.languages.is_empty() {
        html.push_str(&heading("Languages"));
        let parts: Vec<String> = doc
            .languages
            .iter()
            .map(|l| format!("{} ({})", escape(&l.name), l.proficiency.as_str()))
            .collect();
        html.push_str(&format!(
            "<p style=\"font-size:14px;\">{}</p>",
            parts.join(", ")
        ));
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:14px;\"><strong>{}</strong>, {} at {} \
                 &mdash; {} &middot; {}</p>",
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

fn heading(text: &str) -> String {
    format!(
        "<h2 style=\"font-size:15px;text-transform:uppercase;letter-spacing:2px;\
         color:#2f3640;border-bottom:2px solid #2f3640;padding-bottom:4px;\
         margin:20px 0 12px;\">{text}</h2>"
    )
}
