use super::field_page::{common_definitions, header};
use super::text::multiline;
use crate::stylesheet::StyleId;
use crate::ui_element::UIElement;
use xdf_api::{Element, Rule};

/// Detail page of one rule ("Regel")
pub fn rule_page(rule: &Rule) -> Vec<UIElement> {
    let mut out = header(
        &rule.name,
        &rule.version,
        vec![UIElement::badge(rule.identifier(), StyleId::BadgeId)],
    );
    out.extend(common_definitions(rule.author(), &rule.metadata));
    out.push(UIElement::styled("Script", StyleId::Term));
    out.push(UIElement::Code {
        lines: multiline(&rule.script),
    });
    out
}
