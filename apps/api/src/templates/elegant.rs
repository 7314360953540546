//! Elegant template — light serif type, gold hairlines, generous spacing.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

const GOLD: &str = "#B08D57";

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:'Garamond','Times New Roman',serif;color:#333;padding:40px;\">");

    html.push_str(&format!(
        "<div style=\"text-align:center;margin-bottom:10px;\">\
         <h1 style=\"font-size:32px;font-weight:normal;letter-spacing:4px;margin:0;\">{}</h1>\
         <div style=\"width:80px;height:1px;background:{GOLD};margin:12px auto;\"></div>",
        escape(&d.full_name)
    ));
    let mut contact: Vec<String> = Vec::new();
    for value in [&d.email, &d.phone, &d.location] {
        if !value.is_empty() {
            contact.push(escape(value));
        }
    }
    for value in [&d.nationality, &d.marital_status, &d.linked_in, &d.portfolio] {
        if let Some(v) = value {
            contact.push(escape(v));
        }
    }
    if let Some(id_number) = &d.id_number {
        contact.push(format!("ID {}", escape(id_number)));
    }
    if !contact.is_empty() {
        html.push_str(&format!(
            "<p style=\"font-size:12px;letter-spacing:1px;color:#777;margin:0;\">{}</p>",
            contact.join(" &nbsp;&bull;&nbsp; ")
        ));
    }
    html.push_str("</div>");

    if !d.summary.is_empty() {
        html.push_str(&heading("Profile"));
        html.push_str(&format!(
            "<p style=\"font-size:14px;line-height:1.8;text-align:center;\
             font-style:italic;max-width:85%;margin:0 auto;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Experience"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:16px;\">\
                 <p style=\"margin:0;font-size:15px;letter-spacing:1px;\">{}</p>\
                 <p style=\"margin:2px 0;font-size:13px;color:{GOLD};\">{} &mdash; {}</p>\
                 <p style=\"margin:2px 0;font-size:12px;color:#888;\">{}</p>",
                escape(&work.job_title),
                escape(&work.company),
                escape(&work.location),
                date_range(&work.start_date, &work.end_date, work.current)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:4px 0;font-size:13px;line-height:1.7;\">{}</p>",
                    escape(&work.description)
                ));
            }
            let bullets = filled(&work.achievements);
            if !bullets.is_empty() {
                html.push_str("<ul style=\"margin:4px 0;padding-left:20px;font-size:13px;line-height:1.7;\">");
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
                "<div style=\"margin-bottom:10px;text-align:center;\">\
                 <p style=\"margin:0;font-size:14px;letter-spacing:1px;\">{}</p>\
                 <p style=\"margin:2px 0;font-size:13px;color:#666;\">{}, {} &mdash; {}{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.location),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" ({})", escape(g)))
                    .unwrap_or_default()
            ));
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Skills"));
        let names: Vec<String> = doc
            .skills
            .iter()
            .map(|s| escape(&s.name))
            .collect();
        html.push_str(&format!(
            "<p style=\"text-align:center;font-size:13px;letter-spacing:1px;\">{}</p>",
            names.join(" &nbsp;&bull;&nbsp; ")
        ));
    }

    if !doc.languages.is_empty() {
        html.push_str(&heading("Languages"));
        let parts: Vec<String> = doc
            .languages
            .iter()
            .map(|l| format!("{} ({})", escape(&l.name), l.proficiency.as_str()))
            .collect();
        html.push_str(&format!(
            "<p style=\"text-align:center;font-size:13px;\">{}</p>",
            parts.join(" &nbsp;&bull;&nbsp; ")
        ));
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:13px;text-align:center;\">{} &mdash; {}, {} \
                 <span style=\"color:#888;\">({} &middot; {})</span></p>",
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
        "<h2 style=\"text-align:center;font-size:14px;font-weight:normal;\
         text-transform:uppercase;letter-spacing:5px;color:{GOLD};\
         margin:26px 0 12px;\">{text}</h2>"
    )
}
