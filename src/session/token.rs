//! Anti-forgery token extraction.

use crate::extract::selector;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static META_TOKEN: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="csrf-token"]"#));
static INPUT_TOKEN: LazyLock<Selector> = LazyLock::new(|| selector(r#"input[name="_csrf"]"#));

/// Extract the anti-forgery token from a rendered page.
///
/// The `csrf-token` meta tag is tried first, then the `_csrf` hidden form
/// field. Empty values count as absent.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let from = |sel: &Selector, attr: &str| {
        doc.select(sel)
            .find_map(|el| el.value().attr(attr).filter(|v| !v.is_empty()))
            .map(str::to_string)
    };
    from(&META_TOKEN, "content").or_else(|| from(&INPUT_TOKEN, "value"))
}
