//! Page shell: document head, sidebar controls, tab bar and the load-error banner.

use std::fmt::Write;
use std::path::Path;

use crate::views::html::escape;
use crate::views::showcase;
use crate::views::ui_state::{Section, UiState};

const STYLE: &str = include_str!("style.css");

/// Everything the shell needs besides the active section's body.
pub struct ShellContext<'a> {
    pub state: &'a UiState,
    /// Options for the tag multi-select.
    pub all_tags: &'a [String],
    /// Set when `projects.json` was absent at load time.
    pub projects_missing: Option<&'a Path>,
}

pub fn render_page(ctx: &ShellContext<'_>, section_html: &str) -> String {
    let mut out = String::with_capacity(section_html.len() + STYLE.len() + 4096);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>📁</text></svg>\">\n\
         <style>{STYLE}</style>\n</head>\n<body>\n",
        escape(showcase::TITLE)
    );

    out.push_str(&sidebar(ctx));
    out.push_str("<main>\n");
    if let Some(path) = ctx.projects_missing {
        let _ = writeln!(
            out,
            "<div class=\"alert error\">Missing <code>{}</code>. Create it in the content \
             directory. Also add your PNGs under <code>assets/</code>.</div>",
            escape(&path.display().to_string())
        );
    }
    out.push_str(&tab_bar(ctx.state));
    let _ = write!(
        out,
        "<section id=\"{}\">\n{section_html}</section>\n</main>\n</body>\n</html>\n",
        ctx.state.section.slug()
    );
    out
}

fn tab_bar(state: &UiState) -> String {
    let mut out = String::from("<nav class=\"tabs\">");
    for section in Section::ALL {
        let active = if section == state.section {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            out,
            "<a href=\"{}\"{active}>{}</a>",
            escape(&state.href(section)),
            section.label()
        );
    }
    out.push_str("</nav>\n");
    out
}

fn sidebar(ctx: &ShellContext<'_>) -> String {
    let state = ctx.state;
    let mut out = String::from(
        "<aside>\n<h2>Explore Projects</h2>\n<form method=\"get\" action=\"/\">\n",
    );
    out.push_str(&hidden_fields(state, state.section, &["q", "tag", "wide"]));

    let checked = if state.wide { " checked" } else { "" };
    let _ = write!(
        out,
        "\n<input type=\"hidden\" name=\"wide\" value=\"false\">\
         <label class=\"toggle\" title=\"Turn off for a single-column (mobile) list.\">\
         <input type=\"checkbox\" name=\"wide\" value=\"true\"{checked} onchange=\"this.form.submit()\"> \
         Two-column layout</label>\n\
         <label for=\"q\">Search title</label>\n\
         <input type=\"search\" id=\"q\" name=\"q\" value=\"{}\">\n\
         <label for=\"tag\">Filter by tags</label>\n\
         <select id=\"tag\" name=\"tag\" multiple size=\"{}\">\n",
        escape(&state.filter.query),
        ctx.all_tags.len().clamp(1, 8)
    );
    for tag in ctx.all_tags {
        let selected = if state.filter.tags.contains(tag) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(tag)
        );
    }
    out.push_str("</select>\n<button type=\"submit\">Apply</button>\n</form>\n</aside>\n");
    out
}

/// Hidden inputs reproducing `state` on `section`, minus the keys a form sets itself.
pub fn hidden_fields(state: &UiState, section: Section, skip: &[&str]) -> String {
    state
        .to_pairs(section)
        .into_iter()
        .filter(|(k, _)| !skip.contains(k))
        .map(|(k, v)| format!("<input type=\"hidden\" name=\"{k}\" value=\"{}\">", escape(&v)))
        .collect()
}
