use crate::stylesheet::StyleId;

/// Intermediate representation of a rendered page.
///
/// Pages build a list of `UIElement`s from the database and state; the
/// render interpreter turns them into styled terminal lines. Each top-level
/// element occupies at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIElement {
    Text {
        content: String,
        style: StyleId,
    },
    Badge {
        content: String,
        style: StyleId,
    },
    /// Inline children separated by single spaces
    Row {
        children: Vec<UIElement>,
    },
    /// Term/description pair of a detail page; the description may span lines
    Definition {
        term: String,
        lines: Vec<String>,
    },
    /// Preformatted block, rendered inside a frame
    Code {
        lines: Vec<String>,
    },
    Separator,
    Blank,
}

impl UIElement {
    pub fn text(content: impl Into<String>) -> Self {
        UIElement::Text {
            content: content.into(),
            style: StyleId::Default,
        }
    }

    pub fn styled(content: impl Into<String>, style: StyleId) -> Self {
        UIElement::Text {
            content: content.into(),
            style,
        }
    }

    pub fn badge(content: impl Into<String>, style: StyleId) -> Self {
        UIElement::Badge {
            content: content.into(),
            style,
        }
    }

    pub fn row(children: Vec<UIElement>) -> Self {
        UIElement::Row { children }
    }

    pub fn definition(term: impl Into<String>, lines: Vec<String>) -> Self {
        UIElement::Definition {
            term: term.into(),
            lines,
        }
    }

    /// Plain text of this element without styling, used for assertions and logs
    pub fn plain_text(&self) -> String {
        match self {
            UIElement::Text { content, .. } => content.clone(),
            UIElement::Badge { content, .. } => format!("[{content}]"),
            UIElement::Row { children } => children
                .iter()
                .map(UIElement::plain_text)
                .collect::<Vec<_>>()
                .join(" "),
            UIElement::Definition { term, lines } => format!("{term}: {}", lines.join(" / ")),
            UIElement::Code { lines } => lines.join("\n"),
            UIElement::Separator | UIElement::Blank => String::new(),
        }
    }
}
