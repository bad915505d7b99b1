#![deny(missing_docs)]

//! # Frontmatter Rewriting
//!
//! The docs build feeds raw Markdown into a static-site generator that
//! requires a YAML `title:` in each file's frontmatter. These helpers
//! derive the title from the first H1 (or from a CamelCase filename),
//! quote it when YAML needs that, and splice it into the file.
//!
//! All functions are pure string transforms; directory walking and file
//! writes live in the CLI.

use regex::{NoExpand, Regex};

/// Extracts the first H1 heading of a Markdown body.
pub fn extract_title(content: &str) -> Option<String> {
    let h1_re = Regex::new(r"(?m)^#\s+(.+)$").expect("Invalid regex constant");
    h1_re
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Derives a title from a CamelCase or lowercase file stem.
///
/// "gettingStarted" becomes "Getting Started", "index" becomes "Index".
pub fn title_from_stem(stem: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in stem.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            words.push(current.clone());
            current.clear();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Quotes a title when it contains characters YAML would misparse.
pub fn quote_title(title: &str) -> String {
    let special_re = Regex::new(r#"[:@`|>#&!%*?{\[\-]"#).expect("Invalid regex constant");
    let needs_quotes = special_re.is_match(title) || title.contains('"') || title.contains('\'');
    if needs_quotes {
        format!("\"{}\"", title.replace('"', "\\\""))
    } else {
        title.to_string()
    }
}

/// Rewrites a Markdown file's content so its frontmatter carries a
/// well-formed `title:`.
///
/// Handles the three cases the docs build produces:
/// - no frontmatter: a block with the derived title is prepended,
/// - frontmatter without `title:`: one is appended to the block,
/// - frontmatter whose title needs (re)quoting: the line is rewritten.
///
/// Returns `None` when the content is already well-formed.
pub fn rewrite(content: &str, file_stem: &str) -> Option<String> {
    let block_re = Regex::new(r"(?s)^---\n(.*?)\n---\n").expect("Invalid regex constant");
    let title_re = Regex::new(r"(?m)^title:\s*(.+)$").expect("Invalid regex constant");

    if !content.starts_with("---") {
        // No frontmatter at all: prepend one.
        let title = extract_title(content).unwrap_or_else(|| title_from_stem(file_stem));
        return Some(format!(
            "---\ntitle: {}\n---\n\n{}",
            quote_title(&title),
            content
        ));
    }

    // An opening delimiter without a closing one is left untouched.
    let block = block_re.captures(content)?;

    let frontmatter = block.get(1).map(|m| m.as_str()).unwrap_or_default();

    let updated_frontmatter = match title_re.captures(frontmatter) {
        Some(title_caps) => {
            // Requote the existing title if YAML needs that.
            let raw = title_caps[1].trim();
            let existing = strip_quotes(raw);
            let quoted = quote_title(existing);
            title_re
                .replace(frontmatter, NoExpand(&format!("title: {}", quoted)))
                .into_owned()
        }
        None => {
            // Title missing: derive one from the body below the block.
            let body = block_re.replace(content, "");
            let title = extract_title(&body).unwrap_or_else(|| title_from_stem(file_stem));
            format!("{}\ntitle: {}", frontmatter, quote_title(&title))
        }
    };

    let updated = block_re
        .replace(
            content,
            NoExpand(&format!("---\n{}\n---\n", updated_frontmatter)),
        )
        .into_owned();

    (updated != content).then_some(updated)
}

/// Strips one pair of surrounding quotes, if present.
fn strip_quotes(raw: &str) -> &str {
    let stripped = raw
        .strip_prefix('"')
        .or_else(|| raw.strip_prefix('\''))
        .unwrap_or(raw);
    stripped
        .strip_suffix('"')
        .or_else(|| stripped.strip_suffix('\''))
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_title_first_h1() {
        let content = "intro text\n# Getting Started\n\n# Second Heading\n";
        assert_eq!(extract_title(content).as_deref(), Some("Getting Started"));
        assert_eq!(extract_title("no headings here"), None);
    }

    #[test]
    fn test_title_from_stem_splits_camel_case() {
        assert_eq!(title_from_stem("gettingStarted"), "Getting Started");
        assert_eq!(title_from_stem("apiReference"), "Api Reference");
        assert_eq!(title_from_stem("index"), "Index");
    }

    #[test]
    fn test_quote_title_only_when_needed() {
        assert_eq!(quote_title("Getting Started"), "Getting Started");
        assert_eq!(quote_title("Setup: Quickstart"), "\"Setup: Quickstart\"");
        assert_eq!(quote_title("Multi-Factor Auth"), "\"Multi-Factor Auth\"");
        assert_eq!(
            quote_title("The \"state\" parameter"),
            "\"The \\\"state\\\" parameter\""
        );
    }

    #[test]
    fn test_rewrite_prepends_missing_frontmatter() {
        let content = "# Passwordless Login\n\nBody text.\n";
        let updated = rewrite(content, "passwordlessLogin").unwrap();
        assert_eq!(
            updated,
            "---\ntitle: Passwordless Login\n---\n\n# Passwordless Login\n\nBody text.\n"
        );
    }

    #[test]
    fn test_rewrite_falls_back_to_stem_without_h1() {
        let content = "Just prose, no heading.\n";
        let updated = rewrite(content, "tokenLifetimes").unwrap();
        assert!(updated.starts_with("---\ntitle: Token Lifetimes\n---\n\n"));
    }

    #[test]
    fn test_rewrite_appends_title_to_existing_frontmatter() {
        let content = "---\ndescription: overview\n---\n# Session Management\n";
        let updated = rewrite(content, "sessions").unwrap();
        assert_eq!(
            updated,
            "---\ndescription: overview\ntitle: Session Management\n---\n# Session Management\n"
        );
    }

    #[test]
    fn test_rewrite_requotes_title_with_special_chars() {
        let content = "---\ntitle: Setup: Quickstart\n---\nBody\n";
        let updated = rewrite(content, "setup").unwrap();
        assert_eq!(updated, "---\ntitle: \"Setup: Quickstart\"\n---\nBody\n");
    }

    #[test]
    fn test_rewrite_leaves_unclosed_frontmatter_alone() {
        let content = "---\ntitle: Broken\nBody without closing delimiter\n";
        assert_eq!(rewrite(content, "broken"), None);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let content = "---\ntitle: \"Setup: Quickstart\"\n---\nBody\n";
        assert_eq!(rewrite(content, "setup"), None);

        let plain = "---\ntitle: Getting Started\n---\nBody\n";
        assert_eq!(rewrite(plain, "gettingStarted"), None);
    }
}
