//! Small HTML helpers shared by the views.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pulldown_cmark::{html, Options, Parser};

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders owner-authored Markdown (experience bodies).
pub fn markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// `data:` URI carrying `bytes` inline.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// URL under which an asset filename is served.
pub fn asset_url(name: &str) -> String {
    let encoded: Vec<_> = name
        .split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect();
    format!("/assets/{}", encoded.join("/"))
}

/// Distributes `items` over `n` columns the way a streamed grid fills them:
/// item `i` lands in column `i % n`.
pub fn columns<T>(items: impl IntoIterator<Item = T>, n: usize) -> Vec<Vec<T>> {
    let n = n.max(1);
    let mut cols: Vec<Vec<T>> = (0..n).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        cols[i % n].push(item);
    }
    cols
}
