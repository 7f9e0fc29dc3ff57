//! Turns [`UIElement`] trees into styled terminal text.

use crate::stylesheet::{self, StyleId};
use crate::ui_element::UIElement;
use std::fmt::Write;

/// Column at which definition descriptions start
const TERM_WIDTH: usize = 26;
const SEPARATOR_WIDTH: usize = 72;

/// Render a page into a single string, one line per element (or more for
/// multi-line definitions and code blocks).
pub fn render(elements: &[UIElement]) -> String {
    let mut out = String::new();
    for element in elements {
        render_block(&mut out, element);
    }
    out
}

fn render_block(out: &mut String, element: &UIElement) {
    match element {
        UIElement::Definition { term, lines } => {
            let padded = format!("{term:<TERM_WIDTH$}");
            let mut lines = lines.iter();
            let first = lines.next().map(String::as_str).unwrap_or("");
            let _ = writeln!(out, "{}{}", stylesheet::apply(StyleId::Term, &padded), first);
            for line in lines {
                let _ = writeln!(out, "{:TERM_WIDTH$}{}", "", line);
            }
        }
        UIElement::Code { lines } => {
            let muted = |s: &str| stylesheet::apply(StyleId::Muted, s);
            let _ = writeln!(out, "{}", muted("┌"));
            for line in lines {
                let _ = writeln!(out, "{} {}", muted("│"), line);
            }
            let _ = writeln!(out, "{}", muted("└"));
        }
        UIElement::Separator => {
            let _ = writeln!(out, "{}", stylesheet::apply(StyleId::Muted, &"─".repeat(SEPARATOR_WIDTH)));
        }
        UIElement::Blank => out.push('\n'),
        inline => {
            render_inline(out, inline);
            out.push('\n');
        }
    }
}

fn render_inline(out: &mut String, element: &UIElement) {
    match element {
        UIElement::Text { content, style } => {
            let _ = write!(out, "{}", stylesheet::apply(*style, content));
        }
        UIElement::Badge { content, style } => {
            let _ = write!(out, "{}", stylesheet::apply(*style, &format!(" {content} ")));
        }
        UIElement::Row { children } => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render_inline(out, child);
            }
        }
        // Block elements nested in a row fall back to their plain text
        other => out.push_str(&other.plain_text()),
    }
}
