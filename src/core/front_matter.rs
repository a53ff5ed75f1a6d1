//! Front matter boundary detection and deserialization
//!
//! A front matter block starts with a line of exactly three hyphens at the
//! very beginning of the document and ends at the next such line. Marker
//! lines may carry trailing spaces or tabs and terminate with `\n` or
//! `\r\n`. The enclosed text is handed to serde_yaml; everything after the
//! closing marker line is the body and is preserved on every outcome,
//! including failures.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

static BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n(?:((?s:.*?))\r?\n)?---[ \t]*\r?\n")
        .expect("boundary pattern is valid")
});

/// Outcome of locating and deserializing one document's front matter.
///
/// Exactly one variant applies per document. An empty-but-present block
/// (`---\n---\n`) is `Parsed` with an empty mapping; `NotFound` is
/// reserved for documents without boundary markers.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatter {
    /// A block was found and deserialized to a mapping (possibly empty).
    Parsed(Value),
    /// No boundary markers at the start of the document.
    NotFound,
    /// A block was found but deserialized to a scalar or a sequence.
    NotAMapping,
    /// The deserializer rejected the block; the message is kept verbatim.
    Invalid(String),
}

impl FrontMatter {
    /// The parsed mapping, if any.
    pub fn mapping(&self) -> Option<&Value> {
        match self {
            Self::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Human-readable failure description for the non-parsed variants.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Parsed(_) => None,
            Self::NotFound => Some("No front matter found".to_string()),
            Self::NotAMapping => {
                Some("Invalid YAML front matter - must be a mapping".to_string())
            }
            Self::Invalid(message) => Some(format!("YAML parse error: {message}")),
        }
    }
}

/// One document split into its front matter outcome and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub front_matter: FrontMatter,
    /// Everything after the closing marker line, or the whole input when
    /// no block was found.
    pub body: String,
}

/// Split raw document text into front matter and body.
///
/// Pure function of the input; never fails. Deserialization problems are
/// reported through [`FrontMatter::Invalid`] with the body still sliced
/// at the closing marker.
pub fn parse_document(content: &str) -> ParsedDocument {
    let Some(captures) = BOUNDARY.captures(content) else {
        return ParsedDocument {
            front_matter: FrontMatter::NotFound,
            body: content.to_string(),
        };
    };

    let matched = captures.get(0).expect("whole match always present");
    let body = content[matched.end()..].to_string();
    let block = captures.get(1).map(|m| m.as_str()).unwrap_or("");

    let front_matter = match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(map)) => FrontMatter::Parsed(Value::Mapping(map)),
        // An empty or comment-only block deserializes to null; normalize
        // to an empty mapping so a present block is always Parsed.
        Ok(Value::Null) => FrontMatter::Parsed(Value::Mapping(serde_yaml::Mapping::new())),
        Ok(_) => FrontMatter::NotAMapping,
        Err(err) => FrontMatter::Invalid(err.to_string()),
    };

    ParsedDocument { front_matter, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_without_markers() {
        let content = "# Just markdown\n\nNo front matter here.";
        let doc = parse_document(content);
        assert_eq!(doc.front_matter, FrontMatter::NotFound);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_marker_not_at_start() {
        let content = "\n---\ntitle: Late\n---\nbody";
        let doc = parse_document(content);
        assert_eq!(doc.front_matter, FrontMatter::NotFound);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_basic_block() {
        let content = "---\ntitle: Hello\ntags: [a, b]\n---\n# Body\n";
        let doc = parse_document(content);
        let mapping = doc.front_matter.mapping().unwrap();
        assert_eq!(mapping["title"], Value::from("Hello"));
        assert_eq!(doc.body, "# Body\n");
    }

    #[test]
    fn test_body_preserved_exactly() {
        let content = "---\na: 1\n---\nline one\n\nline two";
        let doc = parse_document(content);
        assert_eq!(doc.body, "line one\n\nline two");
    }

    #[test]
    fn test_crlf_document() {
        let content = "---\r\ntitle: Windows\r\n---\r\nbody\r\n";
        let doc = parse_document(content);
        let mapping = doc.front_matter.mapping().unwrap();
        assert_eq!(mapping["title"], Value::from("Windows"));
        assert_eq!(doc.body, "body\r\n");
    }

    #[test]
    fn test_trailing_whitespace_on_markers() {
        let content = "---  \ntitle: Spaced\n--- \nbody";
        let doc = parse_document(content);
        assert!(doc.front_matter.is_parsed());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_empty_block_is_parsed_empty_mapping() {
        let doc = parse_document("---\n---\nbody");
        assert_eq!(
            doc.front_matter,
            FrontMatter::Parsed(Value::Mapping(serde_yaml::Mapping::new()))
        );
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_comment_only_block_is_parsed_empty_mapping() {
        let doc = parse_document("---\n# nothing to see\n---\nbody");
        let mapping = doc.front_matter.mapping().unwrap();
        assert_eq!(mapping, &Value::Mapping(serde_yaml::Mapping::new()));
    }

    #[test]
    fn test_scalar_block_is_not_a_mapping() {
        let doc = parse_document("---\njust a string\n---\nbody");
        assert_eq!(doc.front_matter, FrontMatter::NotAMapping);
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_sequence_block_is_not_a_mapping() {
        let doc = parse_document("---\n- a\n- b\n---\nbody");
        assert_eq!(doc.front_matter, FrontMatter::NotAMapping);
    }

    #[test]
    fn test_invalid_yaml_keeps_body() {
        let doc = parse_document("---\ntitle: [unclosed\n---\nbody text");
        match &doc.front_matter {
            FrontMatter::Invalid(message) => assert!(!message.is_empty()),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(doc.body, "body text");
    }

    #[test]
    fn test_unterminated_block() {
        let content = "---\ntitle: Never closed\n";
        let doc = parse_document(content);
        assert_eq!(doc.front_matter, FrontMatter::NotFound);
        assert_eq!(doc.body, content);
    }

    #[test]
    fn test_closing_marker_needs_newline() {
        // A final `---` with no line terminator does not close the block.
        let content = "---\ntitle: x\n---";
        let doc = parse_document(content);
        assert_eq!(doc.front_matter, FrontMatter::NotFound);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FrontMatter::NotFound.error_message().unwrap(),
            "No front matter found"
        );
        assert_eq!(
            FrontMatter::NotAMapping.error_message().unwrap(),
            "Invalid YAML front matter - must be a mapping"
        );
        assert!(FrontMatter::Invalid("boom".into())
            .error_message()
            .unwrap()
            .starts_with("YAML parse error: "));
        assert!(FrontMatter::Parsed(Value::Mapping(Default::default()))
            .error_message()
            .is_none());
    }
}
