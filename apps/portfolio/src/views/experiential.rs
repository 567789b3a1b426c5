use std::fmt::Write;

use crate::content::ContentStore;
use crate::models::Experience;
use crate::views::html::{asset_url, columns, escape, markdown};
use crate::views::ui_state::{ExperienceLayout, Section, UiState};

pub const TITLE: &str = "Experiential Learning";

const CAPTION: &str = "Volunteer work, student organization involvement, apprenticeships, \
field trips, special projects and employment. Upload and describe photos, job descriptions \
and completed projects.";

pub fn render_experiential(
    experiences: &[Experience],
    state: &UiState,
    store: &ContentStore,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<h1>{}</h1>\n<p class=\"caption\">{}</p>\n",
        escape(TITLE),
        escape(CAPTION)
    );

    if experiences.is_empty() {
        out.push_str(
            "<div class=\"alert info\">Add items to <code>experiences.json</code> and images to \
             <code>assets/</code> to populate this page.</div>\n",
        );
        return out;
    }

    out.push_str(&layout_selector(state));
    match state.layout {
        ExperienceLayout::Feature => {
            for exp in experiences {
                out.push_str(&render_feature(exp, store));
            }
        }
        ExperienceLayout::Cards => {
            out.push_str("<div class=\"grid two\">\n");
            for col in columns(experiences, 2) {
                out.push_str("<div class=\"col\">\n");
                for exp in col {
                    out.push_str(&render_card(exp, store));
                }
                out.push_str("</div>\n");
            }
            out.push_str("</div>\n");
        }
    }
    out
}

fn layout_selector(state: &UiState) -> String {
    let mut out = String::from("<nav class=\"radio\" aria-label=\"Layout\">");
    for (layout, label) in [
        (ExperienceLayout::Feature, "Feature"),
        (ExperienceLayout::Cards, "Cards"),
    ] {
        let selected = if state.layout == layout { " selected" } else { "" };
        let target = UiState {
            layout,
            ..state.clone()
        };
        let _ = write!(
            out,
            "<a class=\"option{selected}\" href=\"{}\">{label}</a>",
            escape(&target.href(Section::Experiential))
        );
    }
    out.push_str("</nav>\n");
    out
}

/// Images are optional here; a missing file is simply skipped.
fn image(exp: &Experience, store: &ContentStore) -> String {
    if store.asset_exists(&exp.image) {
        format!(
            "<img class=\"full\" src=\"{}\" alt=\"{}\">\n",
            escape(&asset_url(&exp.image)),
            escape(&exp.title)
        )
    } else {
        String::new()
    }
}

fn render_feature(exp: &Experience, store: &ContentStore) -> String {
    let mut out = String::from("<article class=\"feature\">\n");
    out.push_str(&image(exp, store));
    let _ = writeln!(out, "<h2>{}</h2>", escape(&exp.title));

    let meta = exp.meta_line();
    if !meta.is_empty() {
        let _ = writeln!(out, "<p class=\"caption\">{}</p>", escape(&meta));
    }
    if !exp.lede.is_empty() {
        let _ = writeln!(out, "<p class=\"lede\"><em>{}</em></p>", escape(&exp.lede));
    }
    if !exp.facts.is_empty() {
        out.push_str("<details open>\n<summary>Quick facts</summary>\n<ul>\n");
        for fact in &exp.facts {
            let _ = writeln!(out, "<li>{}</li>", escape(fact));
        }
        out.push_str("</ul>\n</details>\n");
    }
    if !exp.body.is_empty() {
        let _ = writeln!(out, "<div class=\"body\">{}</div>", markdown(&exp.body));
    }
    out.push_str("<hr>\n</article>\n");
    out
}

fn render_card(exp: &Experience, store: &ContentStore) -> String {
    let mut out = String::from("<article class=\"card stacked\">\n");
    out.push_str(&image(exp, store));
    let _ = writeln!(out, "<h3>{}</h3>", escape(&exp.title));
    if !exp.date.is_empty() {
        let _ = writeln!(out, "<p class=\"caption\">{}</p>", escape(&exp.date));
    }
    if !exp.lede.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", escape(&exp.lede));
    }
    if !exp.body.is_empty() {
        let _ = writeln!(
            out,
            "<details>\n<summary>Read more</summary>\n<div class=\"body\">{}</div>\n</details>",
            markdown(&exp.body)
        );
    }
    out.push_str("</article>\n");
    out
}
