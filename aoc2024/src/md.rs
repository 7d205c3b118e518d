//! Turns a saved puzzle description page into Markdown.
//!
//! This is not an HTML parser. The page markup is regular enough that a fixed,
//! ordered list of substitutions covers it, and the order matters: code blocks
//! are rewritten before inline code, and list items only after their `<ul>`
//! wrapper is gone.

use crate::prelude::*;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)<pre><code>(.*?)</code></pre>", "```\n${1}```\n"),
        (r#"<em class="star">(.*?)</em>"#, "**${1}**"),
        (r"<em>(.*?)</em>", "_${1}_"),
        (r"<span>(.*?)</span>", "_${1}_"),
        (r"<code>(.*?)</code>", "`${1}`"),
        (r"<h2>(.*?)</h2>", "## ${1}\n\n"),
        (r"<p>(.*?)</p>", "${1}\n\n"),
        (r"(?s)<ul>(.*?)</ul>", "${1}\n"),
        (r"<li>(.*?)</li>", "- ${1}\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// `&amp;` goes last so `&amp;gt;` comes out as the literal text `&gt;`.
const ENTITIES: [(&str, &str); 3] = [("&gt;", ">"), ("&lt;", "<"), ("&amp;", "&")];

pub fn convert(html: &str) -> String {
    let mut text = html.to_string();
    for (re, replacement) in RULES.iter() {
        text = re.replace_all(&text, *replacement).into_owned();
    }
    for (entity, plain) in ENTITIES {
        text = text.replace(entity, plain);
    }
    text.trim().to_string()
}

/// Convert `input` and write the result to `output`, returning the number of
/// bytes written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let html = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read {}", input.display()))?;
    let markdown = convert(&html);
    std::fs::write(output, &markdown)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    tracing::debug!(from = %input.display(), to = %output.display(), bytes = markdown.len(), "converted page");
    Ok(markdown.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_is_fenced() {
        assert_eq!(convert("<pre><code>abc</code></pre>"), "```\nabc```");
    }

    #[test]
    fn test_multiline_code_block() {
        let html = "<pre><code>3   4\n4   3\n</code></pre>\n<p>Done.</p>";
        assert_eq!(convert(html), "```\n3   4\n4   3\n```\n\nDone.");
    }

    #[test]
    fn test_star_emphasis_before_plain_emphasis() {
        assert_eq!(
            convert(r#"<p>Collect <em class="star">stars</em> and <em>fast</em>.</p>"#),
            "Collect **stars** and _fast_."
        );
    }

    #[test]
    fn test_inline_code_and_span() {
        assert_eq!(convert("<code>mul(2,4)</code> <span>x</span>"), "`mul(2,4)` _x_");
    }

    #[test]
    fn test_heading_and_paragraphs() {
        assert_eq!(
            convert("<h2>--- Day 1: Historian Hysteria ---</h2><p>One.</p><p>Two.</p>"),
            "## --- Day 1: Historian Hysteria ---\n\nOne.\n\nTwo."
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(convert("<ul>\n<li>first</li>\n<li>second</li>\n</ul>"), "- first\n\n- second");
    }

    #[test]
    fn test_entities() {
        assert_eq!(convert("a &lt;b&gt; &amp;&amp; c"), "a <b> && c");
        assert_eq!(convert("&amp;gt;"), "&gt;");
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("problem.html");
        let output = dir.path().join("problem.md");
        std::fs::write(&input, "<p>Hi <code>x</code></p>").unwrap();

        let written = convert_file(&input, &output).unwrap();

        let markdown = std::fs::read_to_string(&output).unwrap();
        assert_eq!(markdown, "Hi `x`");
        assert_eq!(written, markdown.len());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(&dir.path().join("nope.html"), &dir.path().join("out.md")).unwrap_err();
        assert!(err.to_string().contains("nope.html"));
    }
}
