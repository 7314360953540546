//! Modern template — coral accent, bold left-aligned header, uppercase
//! section headings. The default style.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

const ACCENT: &str = "#E86B5F";

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:Helvetica,Arial,sans-serif;color:#1a1a1a;padding:32px;\">");

    // Header
    html.push_str(&format!(
        "<div style=\"border-bottom:4px solid {ACCENT};padding-bottom:16px;margin-bottom:20px;\">\
         <h1 style=\"font-size:28px;margin:0 0 8px;\">{}</h1>",
        escape(&d.full_name)
    ));
    let mut contact: Vec<String> = Vec::new();
    if !d.email.is_empty() {
        contact.push(escape(&d.email));
    }
    if !d.phone.is_empty() {
        contact.push(escape(&d.phone));
    }
    if !d.location.is_empty() {
        contact.push(escape(&d.location));
    }
    if let Some(id_number) = &d.id_number {
        contact.push(format!("ID: {}", escape(id_number)));
    }
    if let Some(nationality) = &d.nationality {
        contact.push(escape(nationality));
    }
    if let Some(marital_status) = &d.marital_status {
        contact.push(escape(marital_status));
    }
    if let Some(linked_in) = &d.linked_in {
        contact.push(escape(linked_in));
    }
    if let Some(portfolio) = &d.portfolio {
        contact.push(escape(portfolio));
    }
    if !contact.is_empty() {
        html.push_str(&format!(
            "<div style=\"font-size:13px;color:#444;\">{}</div>",
            contact.join(" &middot; ")
        ));
    }
    html.push_str("</div>");

    if !d.summary.is_empty() {
        html.push_str(&format!(
            "{}<p style=\"text-align:justify;line-height:1.5;\">{}</p>",
            heading("Professional Summary"),
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Work Experience"));
        for work in &doc.work_experience {
            html.push_str("<div style=\"margin-bottom:14px;\">");
            html.push_str(&format!(
                "<div style=\"display:flex;justify-content:space-between;\">\
                 <div><h3 style=\"margin:0;font-size:16px;\">{}</h3>\
                 <p style=\"margin:2px 0;font-weight:600;color:#333;\">{}</p></div>\
                 <div style=\"text-align:right;font-size:13px;color:#555;\">\
                 <p style=\"margin:0;\">{}</p><p style=\"margin:0;\">{}</p></div></div>",
                escape(&work.job_title),
                escape(&work.company),
                date_range(&work.start_date, &work.end_date, work.current),
                escape(&work.location)
            ));
            if !work.description.is_empty() {
                html.push_str(&format!(
                    "<p style=\"margin:6px 0;font-size:13px;line-height:1.5;\">{}</p>",
                    escape(&work.description)
                ));
            }
            push_bullets(&mut html, &work.achievements);
            html.push_str("</div>");
        }
    }

    if !doc.education.is_empty() {
        html.push_str(&heading("Education"));
        for edu in &doc.education {
            html.push_str(&format!(
                "<div style=\"margin-bottom:12px;\">\
                 <div style=\"display:flex;justify-content:space-between;\">\
                 <div><h3 style=\"margin:0;font-size:15px;\">{}</h3>\
                 <p style=\"margin:2px 0;color:#333;\">{}</p></div>\
                 <div style=\"text-align:right;font-size:13px;color:#555;\">\
                 <p style=\"margin:0;\">{}</p><p style=\"margin:0;\">{}</p></div></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                escape(&edu.location)
            ));
            if let Some(grade) = &edu.grade {
                html.push_str(&format!(
                    "<p style=\"margin:2px 0;font-size:13px;color:#555;\">Grade: {}</p>",
                    escape(grade)
                ));
            }
            push_bullets(&mut html, &edu.achievements);
            html.push_str("</div>");
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Skills"));
        html.push_str("<div style=\"display:flex;flex-wrap:wrap;gap:6px;\">");
        for skill in &doc.skills {
            html.push_str(&format!(
                "<span style=\"background:#fbe9e7;color:{ACCENT};border-radius:4px;\
                 padding:3px 10px;font-size:13px;\">{} &ndash; {}</span>",
                escape(&skill.name),
                skill.level.as_str()
            ));
        }
        html.push_str("</div>");
    }

    if !doc.languages.is_empty() {
        html.push_str(&heading("Languages"));
        html.push_str("<ul style=\"margin:0;padding-left:20px;font-size:13px;\">");
        for language in &doc.languages {
            html.push_str(&format!(
                "<li>{} ({})</li>",
                escape(&language.name),
                language.proficiency.as_str()
            ));
        }
        html.push_str("</ul>");
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<div style=\"margin-bottom:8px;font-size:13px;\">\
                 <strong>{}</strong> &mdash; {}, {}<br>{} &middot; {}</div>",
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
        "<h2 style=\"color:{ACCENT};font-size:17px;text-transform:uppercase;\
         letter-spacing:1px;margin:18px 0 10px;\">{text}</h2>"
    )
}

fn push_bullets(html: &mut String, achievements: &[String]) {
    let bullets = filled(achievements);
    if bullets.is_empty() {
        return;
    }
    html.push_str("<ul style=\"margin:4px 0;padding-left:20px;font-size:13px;line-height:1.5;\">");
    for bullet in bullets {
        html.push_str(&format!("<li>{}</li>", escape(bullet)));
    }
    html.push_str("</ul>");
}
