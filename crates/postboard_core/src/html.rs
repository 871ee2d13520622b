//! Minimal HTML-to-text conversion for editor output.
//!
//! The description editor produces small, well-formed fragments such as
//! `<p>hello <strong>world</strong></p>`. This is not a general HTML parser:
//! it drops tags, turns block boundaries into spaces and decodes the handful
//! of entities the editor emits.

/// Tags whose boundaries separate words. Inline tags such as `strong` or `a`
/// are dropped without a separator.
const BLOCK_TAGS: [&str; 13] = [
    "p", "div", "br", "li", "ul", "ol", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
];

fn is_block_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();
    BLOCK_TAGS.contains(&name.to_ascii_lowercase().as_str())
}

/// Returns the visible text of an HTML fragment with whitespace collapsed.
#[must_use]
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag: Option<String> = None;

    for ch in html.chars() {
        if let Some(name) = tag.as_mut() {
            if ch == '>' {
                if is_block_tag(name) {
                    text.push(' ');
                }
                tag = None;
            } else {
                name.push(ch);
            }
        } else if ch == '<' {
            tag = Some(String::new());
        } else {
            text.push(ch);
        }
    }

    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the fragment has no visible text, e.g. `<p><br></p>`.
#[must_use]
pub fn is_blank(html: &str) -> bool {
    plain_text(html).is_empty()
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 6] = [
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&amp;", "&"),
    ];

    let mut decoded = text.to_string();
    // &amp; goes last so "&amp;lt;" stays "&lt;".
    for (entity, replacement) in ENTITIES {
        decoded = decoded.replace(entity, replacement);
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(
            plain_text("<p>Hello <strong>world</strong></p><p>again</p>"),
            "Hello world again"
        );
    }

    #[test]
    fn inline_tags_do_not_split_words() {
        assert_eq!(
            plain_text("<p>super<strong>cali</strong>fragilistic</p>"),
            "supercalifragilistic"
        );
        assert_eq!(
            plain_text(r#"see <a href="/x">the<em>docs</em></a>."#),
            "see thedocs."
        );
    }

    #[test]
    fn block_tags_separate_words() {
        assert_eq!(plain_text("one<br>two<BR/>three"), "one two three");
        assert_eq!(
            plain_text("<h1>Title</h1><ul><li>a</li><li>b</li></ul><div>end</div>"),
            "Title a b end"
        );
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(plain_text("Tom &amp; Jerry&nbsp;&lt;3"), "Tom & Jerry <3");
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn empty_editor_value_is_blank() {
        assert!(is_blank("<p><br></p>"));
        assert!(is_blank("   "));
        assert!(!is_blank("<p>x</p>"));
    }
}
