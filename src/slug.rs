//! URL slug generation for post titles.

/// Turn a title into a URL slug.
///
/// Lowercases, drops anything that is not an ASCII word character,
/// whitespace or `-`, turns whitespace runs into a single `-` and
/// collapses repeated dashes. Leading and trailing dashes are kept.
#[must_use]
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if is_js_whitespace(c) {
            in_space = true;
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if in_space {
            push_dash(&mut slug);
            in_space = false;
        }
        if c == '-' {
            push_dash(&mut slug);
        } else {
            slug.push(c);
        }
    }
    if in_space {
        push_dash(&mut slug);
    }
    slug
}

/// The `\s` class of JavaScript regular expressions. Unlike
/// `char::is_whitespace` it includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn push_dash(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes_spaces() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(generate_slug("What's new in Rust 1.90?"), "whats-new-in-rust-190");
    }

    #[test]
    fn collapses_whitespace_and_dash_runs() {
        assert_eq!(generate_slug("a   b -- c\t\td"), "a-b-c-d");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(generate_slug("snake_case title"), "snake_case-title");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(generate_slug("Café Crème"), "caf-crme");
    }

    #[test]
    fn edge_whitespace_becomes_dashes() {
        assert_eq!(generate_slug("  padded  "), "-padded-");
    }

    #[test]
    fn punctuation_between_spaces_collapses_to_one_dash() {
        assert_eq!(generate_slug("Rust & Go"), "rust-go");
    }

    #[test]
    fn whitespace_follows_javascript_class() {
        assert_eq!(generate_slug("a\u{FEFF}b"), "a-b");
        assert_eq!(generate_slug("a\u{3000}b\u{A0}c"), "a-b-c");
        assert_eq!(generate_slug("a\u{85}b"), "ab");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
    }
}
