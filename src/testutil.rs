use crate::finding::{Finding, Reason};
use crate::parse::language::Language;
use crate::parse::parse_source;
use crate::parse::source::SourceFile;
use crate::rule::Rule;
use crate::rule::registry::RuleRegistry;
use crate::rule::walker::walk;

/// An expected finding parsed from a fixture annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedFinding {
    pub line: usize,
    pub reason: Reason,
    pub content: String,
}

struct RawAnnotation {
    reason: Reason,
    content: String,
}

/// Try to parse an annotation line.
///
/// Annotation format: optional leading whitespace, then one or more `^`
/// characters, then a space, then `<reason label>: <content>`. The carets are
/// only a visual marker under the offending text.
///
/// Lines that merely contain `^` (e.g. JavaScript XOR `x ^ y`) are rejected
/// because the `^` must be the first non-whitespace character and the label
/// must be a known reason.
fn try_parse_annotation(line: &str) -> Option<RawAnnotation> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('^') {
        return None;
    }

    let after_carets = trimmed.trim_start_matches('^');
    let rest = after_carets.strip_prefix(' ')?.trim_end();
    let (label, content) = rest.split_once(": ")?;
    let reason = Reason::from_label(label)?;

    Some(RawAnnotation {
        reason,
        content: content.to_string(),
    })
}

/// Parse fixture content into clean source bytes and expected findings.
///
/// Annotation lines are stripped from the source. Annotations must appear
/// *after* the source line they reference, and annotations for the same
/// line are listed in the order the findings are expected.
///
/// # Panics
///
/// Panics if an annotation appears before any source line.
pub fn parse_fixture(raw: &[u8]) -> (Vec<u8>, Vec<ExpectedFinding>) {
    let text = std::str::from_utf8(raw).expect("fixture must be valid UTF-8");

    let mut source_lines: Vec<&str> = Vec::new();
    let mut expected: Vec<ExpectedFinding> = Vec::new();

    for (raw_idx, element) in text.split('\n').enumerate() {
        if let Some(annotation) = try_parse_annotation(element) {
            assert!(
                !source_lines.is_empty(),
                "Annotation on raw line {} appears before any source line.\nLine: {:?}",
                raw_idx + 1,
                element,
            );
            expected.push(ExpectedFinding {
                line: source_lines.len(),
                reason: annotation.reason,
                content: annotation.content,
            });
        } else {
            source_lines.push(element);
        }
    }

    (source_lines.join("\n").into_bytes(), expected)
}

/// Run a single rule over JavaScript source bytes and return its findings in
/// traversal order.
pub fn run_rule<R: Rule + 'static>(rule: R, source_bytes: &[u8]) -> Vec<Finding> {
    run_rule_as(rule, source_bytes, Language::JavaScript)
}

/// Run a single rule over source bytes parsed as `language`.
pub fn run_rule_as<R: Rule + 'static>(
    rule: R,
    source_bytes: &[u8],
    language: Language,
) -> Vec<Finding> {
    let source = SourceFile::from_bytes("test.js", source_bytes.to_vec());
    let root = parse_source(&source, language).expect("fixture must parse");
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rule));
    walk(&root, &source, &registry)
}

/// Run a rule on an annotated JavaScript fixture and assert the findings
/// match, in order.
pub fn assert_rule_findings<R: Rule + 'static>(rule: R, fixture_bytes: &[u8]) {
    assert_rule_findings_as(rule, fixture_bytes, Language::JavaScript);
}

pub fn assert_rule_findings_as<R: Rule + 'static>(
    rule: R,
    fixture_bytes: &[u8],
    language: Language,
) {
    let (clean_source, expected) = parse_fixture(fixture_bytes);
    let findings = run_rule_as(rule, &clean_source, language);
    let actual: Vec<ExpectedFinding> = findings
        .into_iter()
        .map(|f| ExpectedFinding {
            line: f.line,
            reason: f.reason,
            content: f.content,
        })
        .collect();

    assert_eq!(
        actual,
        expected,
        "Findings differ.\nExpected:\n{}\nActual:\n{}",
        format_expected(&expected),
        format_expected(&actual),
    );
}

/// Assert a rule produces no findings on the given JavaScript source.
pub fn assert_rule_no_findings<R: Rule + 'static>(rule: R, source_bytes: &[u8]) {
    let findings = run_rule(rule, source_bytes);
    assert!(
        findings.is_empty(),
        "Expected no findings but got {}:\n{}",
        findings.len(),
        findings
            .iter()
            .map(|f| format!("  {f}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );
}

fn format_expected(expected: &[ExpectedFinding]) -> String {
    expected
        .iter()
        .map(|e| format!("  {}: {}: {}", e.line, e.reason, e.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Annotation parser unit tests ----

    #[test]
    fn parse_annotation_with_carets() {
        let ann = try_parse_annotation("     ^^^ magic number: 42").unwrap();
        assert_eq!(ann.reason, Reason::MagicNumber);
        assert_eq!(ann.content, "42");
    }

    #[test]
    fn parse_annotation_single_caret() {
        let ann = try_parse_annotation("^ debug output: debugger").unwrap();
        assert_eq!(ann.reason, Reason::DebugOutput);
        assert_eq!(ann.content, "debugger");
    }

    #[test]
    fn parse_annotation_content_may_contain_colons() {
        let ann = try_parse_annotation("^^ debug output: a: b").unwrap();
        assert_eq!(ann.content, "a: b");
    }

    // ---- False-positive rejection tests ----

    #[test]
    fn rejects_non_annotation_lines() {
        assert!(try_parse_annotation("let x = 1;").is_none());
        assert!(try_parse_annotation("// just a comment").is_none());
        assert!(try_parse_annotation("").is_none());
        assert!(try_parse_annotation("   ").is_none());
    }

    #[test]
    fn rejects_xor_operator() {
        assert!(try_parse_annotation("x ^ y").is_none());
        assert!(try_parse_annotation("const r = a ^ b;").is_none());
    }

    #[test]
    fn rejects_unknown_reason() {
        assert!(try_parse_annotation("^^^ Style/Foo: msg").is_none());
        assert!(try_parse_annotation("^^^ no colon here").is_none());
    }

    #[test]
    fn rejects_carets_without_space_after() {
        assert!(try_parse_annotation("^^^magic number: 1").is_none());
    }

    // ---- parse_fixture tests ----

    #[test]
    fn parse_fixture_strips_annotations() {
        let raw = b"x = 1;\n    ^ magic number: 1\ny = 2;\n";
        let (clean, expected) = parse_fixture(raw);
        assert_eq!(clean, b"x = 1;\ny = 2;\n");
        assert_eq!(
            expected,
            vec![ExpectedFinding {
                line: 1,
                reason: Reason::MagicNumber,
                content: "1".to_string(),
            }]
        );
    }

    #[test]
    fn parse_fixture_annotations_on_different_lines() {
        let raw = b"a\n^ magic number: 1\nb\n^ debug output: d\n";
        let (clean, expected) = parse_fixture(raw);
        assert_eq!(clean, b"a\nb\n");
        assert_eq!(expected.len(), 2);
        assert_eq!(expected[0].line, 1);
        assert_eq!(expected[1].line, 2);
    }

    #[test]
    fn parse_fixture_no_annotations() {
        let raw = b"x = 1;\ny = 2;\n";
        let (clean, expected) = parse_fixture(raw);
        assert_eq!(clean, raw.to_vec());
        assert!(expected.is_empty());
    }

    #[test]
    #[should_panic(expected = "Annotation on raw line 1 appears before any source line")]
    fn parse_fixture_annotation_before_source_panics() {
        parse_fixture(b"^^^ magic number: 1\nx = 1;\n");
    }

    // ---- run_rule helper tests ----

    #[test]
    fn run_rule_returns_findings() {
        use crate::rule::magic_number::MagicNumber;
        let findings = run_rule(MagicNumber, b"\nlet x = 5;\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].content, "5");
    }
}
