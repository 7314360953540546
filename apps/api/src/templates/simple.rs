//! Simple template — plain single-column layout, no color, maximum
//! ATS-friendliness.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:Arial,sans-serif;color:#000;padding:30px;font-size:13px;\">");

    html.push_str(&format!(
        "<h1 style=\"font-size:22px;margin:0;\">{}</h1>",
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
        html.push_str(&format!(
            "<p style=\"margin:4px 0 0;\">{}</p>",
            contact.join(" | ")
        ));
    }

    if !d.summary.is_empty() {
        html.push_str(&heading("Summary"));
        html.push_str(&format!(
            "<p style=\"margin:0;line-height:1.5;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Work Experience"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<p style=\"margin:8px 0 0;\"><strong>{}</strong>, {}, {} ({})</p>",
                escape(&work.job_title),
                escape(&work.company),
                escape(&work.location),
                date_range(&work.start_date, &work.end_date, work.current)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:2px 0;line-height:1.5;\">{}</p>",
                    escape(&work.description)
                ));
            }
            let bullets = filled(&work.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:2px 0;padding-left:20px;\">");
                for bullet in bullets {
                    html.push_str(&format!("<li>{}</li>", escape(bullet)));
                }
                html.push_str("</ul>");
            }
        }
    }

    if !doc.education.is_empty() {
        html.push_str(&heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<p style=\"margin:6px 0 0;\"><strong>{}</strong>, {}, {} ({}){}</p>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.location),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" - {}", escape(g)))
                    .unwrap_or_default()
            ));
            let bullets = filled(&edu.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:2px 0;padding-left:20px;\">");
                for bullet in bullets {
                    html.push_str(&format!("<li>{}</li>", escape(bullet)));
                }
                html.push_str("</ul>");
            }
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Skills"));
        let names: Vec<String> = doc
            .skills
            .iter()
            .map(|s| format!("{} ({})", escape(&s.name), s.level.as_str()))
            .collect();
        html.push_str(&format!("<p style=\"margin:0;\">{}</p>", names.join(", ")));
    }

    if !doc.languages.is_empty() {
        html.push_str(&heading("Languages"));
        let names: Vec<String> = doc
            .languages
            .iter()
            .map(|l| format!("{} ({})", escape(&l.name), l.proficiency.as_str()))
            .collect();
        html.push_str(&format!("<p style=\"margin:0;\">{}</p>", names.join(", ")));
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;\">{}, {} at {} - {} - {}</p>",
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
        "<h2 style=\"font-size:15px;margin:16px 0 6px;border-bottom:1px solid #000;\
         padding-bottom:2px;\">{text}</h2>"
    )
}
