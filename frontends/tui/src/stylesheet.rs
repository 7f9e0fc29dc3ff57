use colored::{Color, ColoredString, Colorize};
use xdf_api::FieldKind;

/// Style IDs for consistent styling across the application
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StyleId {
    Default,
    Muted,
    TitleMain,
    Heading,

    // Badges
    BadgeId,
    BadgeCount,
    BadgeSelect,
    BadgeInput,
    BadgeLabel,

    // Tab bar
    TabActive,
    TabInactive,

    // Alerts
    AlertInfo,
    AlertError,

    /// Permanently disabled controls such as the edit button
    Disabled,
    Term,
}

/// Badge style of a field kind: select green, input blue, label dark
pub fn field_kind_style(kind: &FieldKind) -> StyleId {
    match kind {
        FieldKind::Select { .. } => StyleId::BadgeSelect,
        FieldKind::Input { .. } => StyleId::BadgeInput,
        FieldKind::Label { .. } => StyleId::BadgeLabel,
    }
}

/// Apply a style to a piece of text
pub fn apply(style: StyleId, text: &str) -> ColoredString {
    match style {
        StyleId::Default => text.normal(),
        StyleId::Muted => text.dimmed(),
        StyleId::TitleMain => text.bold().color(Color::TrueColor { r: 0xE9, g: 0xC9, b: 0x40 }),
        StyleId::Heading => text.bold(),
        StyleId::BadgeId => text.on_bright_black().white(),
        StyleId::BadgeCount => text.on_bright_black().white().bold(),
        StyleId::BadgeSelect => text.on_green().white().bold(),
        StyleId::BadgeInput => text.on_blue().white().bold(),
        StyleId::BadgeLabel => text.on_black().white().bold(),
        StyleId::TabActive => text.bold().underline().cyan(),
        StyleId::TabInactive => text.normal(),
        StyleId::AlertInfo => text.cyan(),
        StyleId::AlertError => text.bright_red().bold(),
        StyleId::Disabled => text.dimmed().strikethrough(),
        StyleId::Term => text.bold(),
    }
}
