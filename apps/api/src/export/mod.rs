//! Export adapter — wraps the rendered view into downloadable artifacts.
//!
//! Two formats, both operating on whatever the active template renders:
//! a standalone print-ready HTML page (the browser's print-to-PDF path) and
//! a Word-compatible HTML document carrying the MS Office namespace header,
//! which Word opens natively as `.doc`.

use crate::models::cv::CvDocument;
use crate::templates;

/// Print CSS shared by both artifacts: A4 page, no margins of its own (the
/// templates carry their padding), page-break hygiene for sections.
const PRINT_CSS: &str = "@page { size: A4; margin: 12mm; }\n\
    body { margin: 0; -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n\
    h2, h3 { page-break-after: avoid; }\n\
    li, tr { page-break-inside: avoid; }";

/// A complete HTML page for the current document, ready for the host's
/// print dialog or a print-to-PDF pipeline.
pub fn print_document(doc: &CvDocument) -> String {
    let body = templates::render(doc);
    let title = page_title(doc);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PRINT_CSS}\n</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    )
}

/// Word-compatible bytes: HTML with the Office XML namespaces and a
/// WordDocument settings block, the same trick html-docx converters use.
pub fn word_document(doc: &CvDocument) -> Vec<u8> {
    let body = templates::render(doc);
    let title = page_title(doc);
    let html = format!(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View>\
         <w:Zoom>100</w:Zoom></w:WordDocument></xml><![endif]-->\n\
         <style>\n{PRINT_CSS}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    );
    html.into_bytes()
}

/// Suggested download filename for an artifact.
pub fn file_name(doc: &CvDocument, extension: &str) -> String {
    let name = doc.personal_details.full_name.trim();
    if name.is_empty() {
        return format!("cv.{extension}");
    }
    let slug: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{}-cv.{extension}", slug.trim_matches('-'))
}

fn page_title(doc: &CvDocument) -> String {
    let name = doc.personal_details.full_name.trim();
    if name.is_empty() {
        "CV".to_string()
    } else {
        format!("{name} - CV", name = templates::shared::escape(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_named(name: &str) -> CvDocument {
        let mut doc = CvDocument::empty();
        doc.personal_details.full_name = name.to_string();
        doc
    }

    #[test]
    fn test_print_document_is_a_complete_page() {
        let html = print_document(&doc_named("Thabo Mabena"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Thabo Mabena - CV</title>"));
        assert!(html.contains("@page { size: A4"));
        assert!(html.contains("Thabo Mabena"));
    }

    #[test]
    fn test_word_document_carries_office_namespaces() {
        let bytes = word_document(&doc_named("Thabo Mabena"));
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("urn:schemas-microsoft-com:office:word"));
        assert!(html.contains("<w:WordDocument>"));
        assert!(html.contains("Thabo Mabena"));
    }

    #[test]
    fn test_file_name_slug() {
        assert_eq!(file_name(&doc_named("Thabo Mabena"), "doc"), "thabo-mabena-cv.doc");
        assert_eq!(file_name(&doc_named(""), "html"), "cv.html");
    }

    #[test]
    fn test_export_is_idempotent() {
        let doc = doc_named("Same");
        assert_eq!(print_document(&doc), print_document(&doc));
        assert_eq!(word_document(&doc), word_document(&doc));
    }
}
