//! Corporate template — navy accents, rule-heavy, two-column detail rows.

use crate::models::cv::CvDocument;
use crate::templates::shared::{date_range, escape, filled};

const NAVY: &str = "#1B3A5C";

pub fn render(doc: &CvDocument) -> String {
    let d = &doc.personal_details;
    let mut html = String::new();

    html.push_str("<div style=\"font-family:Calibri,Arial,sans-serif;color:#222;padding:34px;\">");

    html.push_str(&format!(
        "<div style=\"border-bottom:3px double {NAVY};padding-bottom:12px;margin-bottom:16px;\">\
         <h1 style=\"margin:0;font-size:27px;color:{NAVY};\">{}</h1>",
        escape(&d.full_name)
    ));
    let mut rows: Vec<(String, String)> = Vec::new();
    if !d.email.is_empty() {
        rows.push(("Email".to_string(), escape(&d.email)));
    }
    if !d.phone.is_empty() {
        rows.push(("Phone".to_string(), escape(&d.phone)));
    }
    if !d.location.is_empty() {
        rows.push(("Location".to_string(), escape(&d.location)));
    }
    if let Some(id_number) = &d.id_number {
        rows.push(("ID Number".to_string(), escape(id_number)));
    }
    if let Some(nationality) = &d.nationality {
        rows.push(("Nationality".to_string(), escape(nationality)));
    }
    if let Some(marital_status) = &d.marital_status {
        rows.push(("Marital Status".to_string(), escape(marital_status)));
    }
    if let Some(linked_in) = &d.linked_in {
        rows.push(("LinkedIn".to_string(), escape(linked_in)));
    }
    if let Some(portfolio) = &d.portfolio {
        rows.push(("Portfolio".to_string(), escape(portfolio)));
    }
    if !rows.is_empty() {
        html.push_str("<table style=\"font-size:12px;margin-top:8px;border-collapse:collapse;\">");
        for pair in rows.chunks(2) {
            html.push_str("<tr>");
            for (label, value) in pair {
                html.push_str(&format!(
                    "<td style=\"padding:1px 24px 1px 0;color:#666;\">{label}:</td>\
                     <td style=\"padding:1px 36px 1px 0;\">{value}</td>"
                ));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
    }
    html.push_str("</div>");

    if !d.summary.is_empty() {
        html.push_str(&heading("Profile Summary"));
        html.push_str(&format!(
            "<p style=\"font-size:13px;line-height:1.6;\">{}</p>",
            escape(&d.summary)
        ));
    }

    if !doc.work_experience.is_empty() {
        html.push_str(&heading("Employment History"));
        for work in &doc.work_experience {
            html.push_str(&format!(
                "<div style=\"margin-bottom:14px;\">\
                 <p style=\"margin:0;font-size:15px;font-weight:bold;color:{NAVY};\">{}</p>\
                 <p style=\"margin:2px 0;font-size:13px;\">{} &mdash; {} &mdash; {}</p>",
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
                html.push_str("<ul style=\"margin:4px 0;padding-left:22px;font-size:13px;\">");
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
                 <p style=\"margin:0;font-size:14px;font-weight:bold;\">{}</p>\
                 <p style=\"margin:2px 0;font-size:13px;\">{} &mdash; {} &mdash; {}{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.location),
                date_range(&edu.start_date, &edu.end_date, edu.current),
                edu.grade
                    .as_ref()
                    .map(|g| format!(" &mdash; {}", escape(g)))
                    .unwrap_or_default()
            ));
        }
    }

    if !doc.skills.is_empty() {
        html.push_str(&heading("Key Skills"));
        html.push_str("<table style=\"width:100%;font-size:13px;border-collapse:collapse;\">");
        for skill in &doc.skills {
            html.push_str(&format!(
                "<tr><td style=\"padding:2px 0;width:40%;\">{}</td>\
                 <td style=\"padding:2px 0;color:#666;\">{}{}</td></tr>",
                escape(&skill.name),
                skill.level.as_str(),
                skill
                    .category
                    .as_ref()
                    .map(|c| format!(" &middot; {}", escape(c)))
                    .unwrap_or_default()
            ));
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
            "<p style=\"font-size:13px;\">{}</p>",
            parts.join("; ")
        ));
    }

    if !doc.references.is_empty() {
        html.push_str(&heading("References"));
        for reference in &doc.references {
            html.push_str(&format!(
                "<p style=\"margin:4px 0;font-size:13px;\"><strong>{}</strong> &mdash; {}, {} \
                 ({} &middot; {})</p>",
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
        "<h2 style=\"background:{NAVY};color:#fff;font-size:14px;\
         text-transform:uppercase;letter-spacing:1px;padding:5px 10px;\
         margin:18px 0 10px;\">{text}</h2>"
    )
}
