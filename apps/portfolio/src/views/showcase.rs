use std::fmt::Write;

use crate::content::{filter_projects, ContentStore};
use crate::models::Project;
use crate::views::html::{asset_url, columns, escape};
use crate::views::ui_state::UiState;

pub const TITLE: &str = "Portfolio Showcase: Projects I'm Proud Of";

const INTRO: &str = "Hi, I'm Ralph Vincent Ta-asan — a data storyteller, strategist, and an \
explorer. Here's a curated selection of the projects I've poured my heart and \
skills into, spanning data science, business intelligence, creative tech, and strategic research. \
Use the filters on the left to explore how I think, build, and tell stories through data.";

/// Filtered project grid with a running count.
pub fn render_showcase(projects: &[Project], state: &UiState, store: &ContentStore) -> String {
    let filtered = filter_projects(projects, &state.filter);

    let mut out = String::new();
    let _ = write!(
        out,
        "<h1>{}</h1>\n<p>{}</p>\n<p class=\"count\">Showing <strong>{}</strong> of <strong>{}</strong> projects.</p>\n",
        escape(TITLE),
        escape(INTRO),
        filtered.len(),
        projects.len()
    );

    if state.wide {
        out.push_str("<div class=\"grid two\">\n");
        for col in columns(filtered, 2) {
            out.push_str("<div class=\"col\">\n");
            for p in col {
                out.push_str(&render_card(p, store));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    } else {
        out.push_str("<div class=\"list\">\n");
        for p in filtered {
            out.push_str(&render_card(p, store));
        }
        out.push_str("</div>\n");
    }

    out
}

/// Image column (1/3) beside text column (2/3).
fn render_card(p: &Project, store: &ContentStore) -> String {
    let mut out = String::from("<article class=\"card\">\n<div class=\"card-img\">");

    if store.asset_exists(&p.image) {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\">",
            escape(&asset_url(&p.image)),
            escape(&p.title)
        );
    } else {
        let _ = write!(
            out,
            "<p class=\"missing\">🖼️ <em>Missing image:</em> <code>{}</code></p>\
             <p class=\"caption\">Place it under <code>assets/</code> with this exact filename.</p>",
            escape(&p.image)
        );
    }

    let _ = write!(
        out,
        "</div>\n<div class=\"card-text\">\n<h3>{}</h3>\n",
        escape(&p.title)
    );
    if !p.tags.is_empty() {
        let _ = writeln!(out, "<p class=\"caption\">{}</p>", escape(&p.tags.join(", ")));
    }
    let _ = writeln!(out, "<p>{}</p>", escape(&p.blurb));

    let links = p.card_links();
    if !links.is_empty() {
        out.push_str("<div class=\"links\">");
        for link in links {
            let _ = write!(
                out,
                "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(&link.url),
                escape(&link.label)
            );
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</article>\n");
    out
}
