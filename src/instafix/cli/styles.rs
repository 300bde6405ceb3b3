use console::Style;
use instafix::model::{CardKind, Theme};
use once_cell::sync::Lazy;

/// Styles for one terminal color mode.
pub struct Palette {
    pub query: Style,
    pub insight: Style,
    pub plan: Style,
    pub actions: Style,
    pub step_number: Style,
    pub body: Style,
    pub muted: Style,
    pub saved: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Palette {
    pub fn card_title(&self, kind: CardKind) -> &Style {
        match kind {
            CardKind::Insight => &self.insight,
            CardKind::Plan => &self.plan,
            CardKind::Actions => &self.actions,
        }
    }
}

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    query: Style::new().black().bold(),
    insight: Style::new().magenta().bold(),
    plan: Style::new().color256(172).bold(),
    actions: Style::new().blue().bold(),
    step_number: Style::new().blue(),
    body: Style::new().black(),
    muted: Style::new().color256(244),
    saved: Style::new().color256(172),
    success: Style::new().green(),
    warning: Style::new().yellow().bold(),
    error: Style::new().red().bold(),
});

static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    query: Style::new().white().bold(),
    insight: Style::new().color256(177).bold(),
    plan: Style::new().color256(214).bold(),
    actions: Style::new().color256(75).bold(),
    step_number: Style::new().color256(75),
    body: Style::new().color256(252),
    muted: Style::new().color256(245),
    saved: Style::new().color256(214),
    success: Style::new().color256(114),
    warning: Style::new().color256(221).bold(),
    error: Style::new().color256(203).bold(),
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
