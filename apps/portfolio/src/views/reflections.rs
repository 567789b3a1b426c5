use std::fmt::Write;

use crate::views::html::{asset_url, escape};

pub const TITLE: &str = "I've always loved numbers. But never quite like this.";
pub const SIGNATURE_NAME: &str = "Ralph Vincent Ta-asan";

const ESSAY: &str = include_str!("reflections.txt");

/// Fixed essay followed by a right-aligned signature.
/// `signature_file` is the signature image's filename when it exists on disk.
pub fn render_reflections(signature_file: Option<&str>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<h1><em>{}</em></h1>\n<div class=\"essay\">{}</div>\n",
        escape(TITLE),
        paragraphs_to_breaks(ESSAY.trim())
    );

    out.push_str("<div class=\"signature\">");
    if let Some(file) = signature_file {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"Signature\">",
            escape(&asset_url(file))
        );
    }
    let _ = writeln!(out, "<em>{}</em></div>", escape(SIGNATURE_NAME));
    out
}

/// Escapes the text and turns each blank-line paragraph break into `<br><br>`.
fn paragraphs_to_breaks(text: &str) -> String {
    escape(text).replace("\n\n", "<br><br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_breaks() {
        assert_eq!(
            paragraphs_to_breaks("First <one>.\n\nSecond.\n\nThird."),
            "First &lt;one&gt;.<br><br>Second.<br><br>Third."
        );
    }

    #[test]
    fn test_essay_rendered_with_breaks() {
        let html = render_reflections(None);
        assert!(html.contains("<h1><em>I&#39;ve always loved numbers."));
        assert!(html.contains("Statistics has an answer.<br><br>"));
        assert!(!html.contains("\n\n"));
    }

    #[test]
    fn test_signature_image_when_present() {
        let html = render_reflections(Some("signature.png"));
        assert!(html.contains("<img src=\"/assets/signature.png\" alt=\"Signature\">"));
        assert!(html.contains("<em>Ralph Vincent Ta-asan</em></div>"));
    }

    #[test]
    fn test_text_only_signature_when_absent() {
        let html = render_reflections(None);
        assert!(!html.contains("alt=\"Signature\""));
        assert!(html.contains("<div class=\"signature\"><em>Ralph Vincent Ta-asan</em></div>"));
    }
}
