use console::Style;
use once_cell::sync::Lazy;
use todoapp::session::Theme;

pub struct Palette {
    pub index: Style,
    pub active: Style,
    pub completed: Style,
    pub editing: Style,
    pub footer: Style,
    pub filter_selected: Style,
    pub hint: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    index: Style::new().color256(244),
    active: Style::new(),
    completed: Style::new().color256(246).strikethrough(),
    editing: Style::new().blue().bold(),
    footer: Style::new().color256(242),
    filter_selected: Style::new().blue().underlined(),
    hint: Style::new().color256(242).italic(),
    info: Style::new(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red().bold(),
});

pub static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    index: Style::new().color256(240),
    active: Style::new().color256(252),
    completed: Style::new().color256(239).strikethrough(),
    editing: Style::new().cyan().bold(),
    footer: Style::new().color256(245),
    filter_selected: Style::new().cyan().underlined(),
    hint: Style::new().color256(245).italic(),
    info: Style::new().color256(252),
    success: Style::new().color256(114),
    warning: Style::new().color256(221),
    error: Style::new().color256(203).bold(),
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
