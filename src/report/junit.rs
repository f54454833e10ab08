//! JUnit XML report rendering.
//!
//! Produces the document shape CI systems expect from the tslint JUnit
//! formatter: one flat testsuite, one testcase per violation, in input
//! order. No grouping by file, no reordering.

use crate::types::violation::Violation;

const PACKAGE: &str = "org.tslint";
const SUITE_NAME: &str = "tslint.xml";

/// Render a violation list as a JUnit XML document string.
///
/// Pure function of its input: the same records in the same order always
/// produce an identical string. Lines are joined with a single newline and
/// there is no trailing newline after the closing tag.
pub fn render(violations: &[Violation]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        "<testsuites>".to_string(),
    ];

    if violations.is_empty() {
        lines.push(success_suite());
    } else {
        lines.push(suite_open(violations.len()));
        lines.extend(violations.iter().map(testcase_xml));
        lines.push("</testsuite>".to_string());
    }

    lines.push("</testsuites>".to_string());
    lines.join("\n")
}

/// Transform characters that cause trouble in attribute values.
/// Ampersands are not escaped; consumers of this format tolerate them.
fn escape(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .replace('"', "'")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generate a java-style package name for a rule. Whitespace inside the
/// rule name is deleted, not replaced.
fn qualified_name(rule_name: &str) -> String {
    if rule_name.is_empty() {
        return String::new();
    }

    let stripped: String = rule_name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{PACKAGE}.{stripped}")
}

/// Generate an error `<testcase>` element for one violation.
fn testcase_xml(violation: &Violation) -> String {
    let name = qualified_name(&violation.rule_name);
    let message = escape(&violation.message);

    format!(
        "<testcase time=\"0\" name=\"{name}\"><error message=\"{message} ({name})\"><![CDATA[{}:{}:{}]]></error></testcase>",
        violation.line, violation.character, violation.file_name
    )
}

/// Opening `<testsuite>` tag for a non-empty violation list.
fn suite_open(count: usize) -> String {
    format!(
        "<testsuite time=\"0\" tests=\"{count}\" skipped=\"0\" errors=\"{count}\" failures=\"0\" package=\"{PACKAGE}\" name=\"{SUITE_NAME}\">"
    )
}

/// Fixed suite representing a run with no violations.
fn success_suite() -> String {
    format!(
        "<testsuite time=\"0\" tests=\"1\" skipped=\"0\" errors=\"0\" failures=\"0\" package=\"{PACKAGE}\" name=\"{SUITE_NAME}\">\n<testcase time=\"0\" name=\"success\"/>\n</testsuite>"
    )
}
