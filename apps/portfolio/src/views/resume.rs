use std::fmt::Write;
use std::path::PathBuf;

use crate::resume::RasterPage;
use crate::views::html::{data_uri, escape};
use crate::views::shell::hidden_fields;
use crate::views::ui_state::{ResumeViewer, Section, UiState, WIDTH_MAX, WIDTH_MIN, WIDTH_STEP};

pub const TITLE: &str = "Electronic Résumé";

/// The résumé file as found on disk.
pub enum ResumeDoc {
    Missing(PathBuf),
    Present(Vec<u8>),
}

/// Outcome of the clean-viewer rasterization for this request.
pub enum CleanPages {
    /// No rasterizer backend on this host.
    Unavailable,
    /// The standard viewer was selected, so nothing was rendered.
    NotRequested,
    Rendered(Vec<RasterPage>),
    /// Backend ran but failed; the message is shown inline.
    Failed(String),
}

pub fn render_resume(doc: &ResumeDoc, clean: &CleanPages, state: &UiState) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<h1>{}</h1>\n<p class=\"caption\">View inline, print directly, or download the PDF version.</p>\n",
        escape(TITLE)
    );

    let pdf = match doc {
        ResumeDoc::Missing(path) => {
            let _ = write!(
                out,
                "<div class=\"alert error\">Résumé file not found at: <code>{}</code></div>\n\
                 <div class=\"alert info\">Place your PDF in the <code>assets/</code> folder with that exact filename.</div>\n",
                escape(&path.display().to_string())
            );
            return out;
        }
        ResumeDoc::Present(pdf) => pdf,
    };

    out.push_str(
        "<a class=\"button wide\" href=\"/resume/download\" download>Download Résumé (PDF)</a>\n",
    );
    out.push_str(&viewer_selector(state, !matches!(clean, CleanPages::Unavailable)));

    if state.viewer == ResumeViewer::Clean {
        match clean {
            CleanPages::Rendered(pages) => {
                out.push_str(&width_slider(state));
                for page in pages {
                    let _ = writeln!(
                        out,
                        "<div class=\"page\"><img src=\"{}\" width=\"{}\" alt=\"Résumé page {}\"></div>",
                        data_uri("image/png", &page.png),
                        state.resume_width,
                        page.number
                    );
                }
                return out;
            }
            CleanPages::Unavailable => {
                out.push_str(
                    "<div class=\"alert info\">For the clean viewer, install poppler \
                     (<code>pdftoppm</code>) on the server, e.g. <code>apt install poppler-utils</code>.</div>\n",
                );
            }
            CleanPages::Failed(msg) => {
                let _ = writeln!(
                    out,
                    "<div class=\"alert error\">Could not render the résumé pages: {}</div>",
                    escape(msg)
                );
            }
            CleanPages::NotRequested => {}
        }
    }

    let _ = writeln!(
        out,
        "<iframe class=\"pdf\" src=\"{}#toolbar=0&amp;navpanes=0&amp;scrollbar=0&amp;zoom=page-width\" title=\"Résumé\"></iframe>",
        data_uri("application/pdf", pdf)
    );
    out
}

/// Clean / Standard toggle. Clean is rendered disabled without a rasterizer.
fn viewer_selector(state: &UiState, clean_available: bool) -> String {
    let mut out = String::from("<nav class=\"radio\" aria-label=\"Viewer\">");
    for (viewer, label) in [
        (ResumeViewer::Clean, "Clean"),
        (ResumeViewer::Standard, "Standard"),
    ] {
        let selected = if state.viewer == viewer { " selected" } else { "" };
        if viewer == ResumeViewer::Clean && !clean_available {
            let _ = write!(
                out,
                "<span class=\"option disabled{selected}\" aria-disabled=\"true\">{label}</span>"
            );
            continue;
        }
        let target = UiState {
            viewer,
            ..state.clone()
        };
        let _ = write!(
            out,
            "<a class=\"option{selected}\" href=\"{}\">{label}</a>",
            escape(&target.href(Section::Resume))
        );
    }
    out.push_str("</nav>\n");
    out
}

fn width_slider(state: &UiState) -> String {
    format!(
        "<form class=\"slider\" method=\"get\" action=\"/\">\
         {hidden}\
         <label for=\"width\">Résumé width <output>{w}</output>px</label>\
         <input type=\"range\" id=\"width\" name=\"width\" min=\"{WIDTH_MIN}\" max=\"{WIDTH_MAX}\" \
         step=\"{WIDTH_STEP}\" value=\"{w}\" title=\"Adjust how wide the rendered pages appear.\" \
         onchange=\"this.form.submit()\">\
         <noscript><button type=\"submit\">Apply</button></noscript>\
         </form>\n",
        hidden = hidden_fields(state, Section::Resume, &["width"]),
        w = state.resume_width,
    )
}
