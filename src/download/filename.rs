//! Output filename resolution.
//!
//! The server-suggested name wins: the RFC 5987 `filename*=UTF-8''…`
//! parameter first, then a plain `filename=` parameter. Without either, a
//! name is synthesized from the class sequence number, its title and the
//! response content type.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static EXTENDED_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)filename\*=UTF-8'[^']*'([^;]+)"));
static PLAIN_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"(?i)filename="?([^";]+)"?"#));
static NON_PORTABLE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"[<>:"/\\|?*\n\r\t]+"#));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\s+"));

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid filename pattern {re}: {e}"))
}

/// Maximum number of characters kept from a class title.
pub const MAX_SLUG_LEN: usize = 200;

/// Filename suggested by a `Content-Disposition` header value.
///
/// Only the final path component is kept so a hostile header cannot escape
/// the destination directory. An extended name with no usable component
/// gives way to the plain `filename=` parameter.
pub fn filename_from_disposition(disposition: &str) -> Option<String> {
    EXTENDED_FILENAME
        .captures(disposition)
        .and_then(|caps| {
            let encoded = caps[1].trim();
            let decoded = urlencoding::decode(encoded)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| encoded.to_string());
            final_component(&decoded)
        })
        .or_else(|| {
            PLAIN_FILENAME
                .captures(disposition)
                .and_then(|caps| final_component(caps[1].trim()))
        })
}

fn final_component(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()?
        .to_str()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Extension (with leading dot) inferred from a `Content-Type` value.
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    let ct = content_type.to_lowercase();
    if ct.contains("pdf") {
        ".pdf"
    } else if ct.contains("word") {
        ".docx"
    } else if ct.contains("powerpoint") || ct.contains("ppt") {
        ".pptx"
    } else if ct.contains("zip") {
        ".zip"
    } else {
        ".pdf"
    }
}

/// Replace non-portable characters and whitespace runs with `_`.
pub fn slugify(title: &str) -> String {
    let slug = NON_PORTABLE.replace_all(title.trim(), "_");
    let slug = WHITESPACE.replace_all(&slug, "_");
    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Name for a document whose response suggested none.
///
/// `index` is the 1-based position of the document within its class and is
/// only included when the class yields more than one document.
pub fn synthesize_filename(
    sequence: usize,
    index: usize,
    total: usize,
    title: &str,
    content_type: &str,
) -> String {
    let suffix = if total > 1 {
        format!("_{index}")
    } else {
        String::new()
    };
    format!(
        "{sequence:02}{suffix}_{}{}",
        slugify(title),
        extension_for_content_type(content_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_filename_is_decoded() {
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''Unit%201%20Sets.pptx").as_deref(),
            Some("Unit 1 Sets.pptx")
        );
    }

    #[test]
    fn test_extended_wins_over_plain() {
        let cd = r#"attachment; filename="fallback.pdf"; filename*=UTF-8''real.pdf"#;
        assert_eq!(filename_from_disposition(cd).as_deref(), Some("real.pdf"));
    }

    #[test]
    fn test_plain_filename_quoted_or_not() {
        assert_eq!(
            filename_from_disposition(r#"inline; filename="notes v2.docx""#).as_deref(),
            Some("notes v2.docx")
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=slides.pdf; size=10").as_deref(),
            Some("slides.pdf")
        );
        assert_eq!(filename_from_disposition("attachment"), None);
    }

    #[test]
    fn test_extended_filename_with_language_tag() {
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8'en'Notes%20v1.pdf").as_deref(),
            Some("Notes v1.pdf")
        );
    }

    #[test]
    fn test_unusable_extended_falls_back_to_plain() {
        let cd = r#"attachment; filename="real.pdf"; filename*=UTF-8''.."#;
        assert_eq!(filename_from_disposition(cd).as_deref(), Some("real.pdf"));
        assert_eq!(filename_from_disposition("attachment; filename*=UTF-8''%2E%2E"), None);
    }

    #[test]
    fn test_path_components_are_dropped() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="../../etc/passwd""#).as_deref(),
            Some("passwd")
        );
    }

    #[test]
    fn test_extension_for_content_type() {
        assert_eq!(extension_for_content_type("application/pdf"), ".pdf");
        assert_eq!(extension_for_content_type("application/msword"), ".docx");
        assert_eq!(
            extension_for_content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            ".docx"
        );
        assert_eq!(extension_for_content_type("application/vnd.ms-powerpoint"), ".pptx");
        assert_eq!(extension_for_content_type("application/zip"), ".zip");
        assert_eq!(extension_for_content_type("application/octet-stream"), ".pdf");
        assert_eq!(extension_for_content_type(""), ".pdf");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Sets: Part 1/2  "), "Sets__Part_1_2");
        assert_eq!(slugify("a   b\tc"), "a_b_c");
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify(&"x".repeat(300)).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_synthesize_filename() {
        assert_eq!(
            synthesize_filename(3, 1, 1, "Intro to Sets", "application/pdf"),
            "03_Intro_to_Sets.pdf"
        );
        assert_eq!(
            synthesize_filename(12, 2, 3, "Trees", "application/vnd.ms-powerpoint"),
            "12_2_Trees.pptx"
        );
    }
}
