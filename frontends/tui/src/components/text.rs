//! Text helpers shared by the pages.

use crate::stylesheet::StyleId;
use crate::ui_element::UIElement;

/// Placeholder for absent optional values
pub const MISSING: &str = "-";

/// Split exported multi-line text into display lines.
///
/// Exports encode carriage returns as `&#xD;`; those are dropped and the
/// text is split on line feeds. The last line never gets a trailing break.
pub fn multiline(value: &str) -> Vec<String> {
    value
        .replace("&#xD;", "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

pub fn multiline_or_dash(value: Option<&str>) -> Vec<String> {
    multiline(value.unwrap_or(MISSING))
}

pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

/// `v1.2`, or nothing for elements without a version
pub fn version_label(version: &str) -> Option<UIElement> {
    (!version.is_empty()).then(|| UIElement::styled(format!("v{version}"), StyleId::Muted))
}

/// Definition row for a single-line optional value
pub fn single(term: &str, value: Option<&str>) -> UIElement {
    UIElement::definition(term, vec![or_dash(value)])
}
