//! # Syntax Highlighting
//!
//! The highlighter is a capability injected into the detail renderer: one
//! method, code string in, HTML markup out. Two implementations ship - a
//! span-based token classifier and a plain escaping fallback - selected at
//! configuration time. Nothing downstream depends on which one is active.

/// Pure code-to-markup rendering seam.
pub trait Highlighter: Send + Sync {
    /// Render a raw code string as HTML markup. Output must be safe to
    /// embed directly inside a `<code>` element.
    fn highlight(&self, code: &str) -> String;
}

/// Escape text for embedding in HTML.
pub fn escape_html(text: &str) -> String {
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

/// Escape-only highlighter: no token classes, just safe text.
#[derive(Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str) -> String {
        escape_html(code)
    }
}

/// Token classifier emitting `<span class="sh-...">` markup for comments,
/// strings, numbers, and JavaScript keywords.
#[derive(Debug, Default)]
pub struct SpanHighlighter;

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue",
    "default", "delete", "else", "export", "extends", "false", "finally",
    "for", "function", "get", "if", "import", "in", "instanceof", "let",
    "new", "null", "of", "return", "set", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "undefined", "var", "void",
    "while", "yield",
];

#[derive(PartialEq)]
enum TokenClass {
    Comment,
    String,
    Number,
    Keyword,
}

impl TokenClass {
    fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Comment => "sh-comment",
            TokenClass::String => "sh-string",
            TokenClass::Number => "sh-number",
            TokenClass::Keyword => "sh-keyword",
        }
    }
}

impl Highlighter for SpanHighlighter {
    fn highlight(&self, code: &str) -> String {
        let mut out = String::with_capacity(code.len() * 2);
        let chars: Vec<char> = code.chars().collect();
        let mut i = 0;

        let emit = |out: &mut String, class: TokenClass, text: &str| {
            out.push_str("<span class=\"");
            out.push_str(class.css_class());
            out.push_str("\">");
            out.push_str(&escape_html(text));
            out.push_str("</span>");
        };

        while i < chars.len() {
            let c = chars[i];
            if c == '/' && chars.get(i + 1) == Some(&'/') {
                let start = i;
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                emit(&mut out, TokenClass::Comment, &text);
            } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                let start = i;
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i = (i + 2).min(chars.len());
                let text: String = chars[start..i].iter().collect();
                emit(&mut out, TokenClass::Comment, &text);
            } else if c == '"' || c == '\'' || c == '`' {
                let quote = c;
                let start = i;
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\\' {
                        i += 2;
                        continue;
                    }
                    if chars[i] == quote {
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                let end = i.min(chars.len());
                let text: String = chars[start..end].iter().collect();
                emit(&mut out, TokenClass::String, &text);
            } else if c.is_ascii_digit() {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                emit(&mut out, TokenClass::Number, &text);
            } else if c.is_alphabetic() || c == '_' || c == '$' {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '$')
                {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if KEYWORDS.contains(&word.as_str()) {
                    emit(&mut out, TokenClass::Keyword, &word);
                } else {
                    out.push_str(&escape_html(&word));
                }
            } else {
                out.push_str(&escape_html(&c.to_string()));
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_plain_highlighter_escapes_only() {
        let html = PlainHighlighter.highlight("if (a < b) { return \"x\"; }");
        assert!(!html.contains("<span"));
        assert!(html.contains("&lt;"));
        assert!(html.contains("&quot;x&quot;"));
    }

    #[test]
    fn test_keywords_are_wrapped() {
        let html = SpanHighlighter.highlight("class Foo extends Bar {}");
        assert!(html.contains("<span class=\"sh-keyword\">class</span>"));
        assert!(html.contains("<span class=\"sh-keyword\">extends</span>"));
        assert!(html.contains("Foo"));
        assert!(!html.contains("<span class=\"sh-keyword\">Foo</span>"));
    }

    #[test]
    fn test_strings_are_not_keyword_scanned() {
        let html = SpanHighlighter.highlight("log(\"class inside string\")");
        assert!(html.contains("<span class=\"sh-string\">&quot;class inside string&quot;</span>"));
        assert!(!html.contains("<span class=\"sh-keyword\">class</span>"));
    }

    #[test]
    fn test_line_comments() {
        let html = SpanHighlighter.highlight("// Abstract Products\nclass Button {}");
        assert!(html.contains("<span class=\"sh-comment\">// Abstract Products</span>"));
        assert!(html.contains("<span class=\"sh-keyword\">class</span>"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = SpanHighlighter.highlight("a < b; // <tag>");
        assert!(!html.contains("<tag>"));
        assert!(html.contains("&lt;tag&gt;"));
    }

    #[test]
    fn test_numbers() {
        let html = SpanHighlighter.highlight("const n = 42;");
        assert!(html.contains("<span class=\"sh-number\">42</span>"));
    }

    #[test]
    fn test_deterministic() {
        let code = "const x = 1; // note";
        assert_eq!(SpanHighlighter.highlight(code), SpanHighlighter.highlight(code));
    }
}
