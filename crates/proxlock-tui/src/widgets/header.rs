use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};

/// Sticky navigation bar at the top of the screen.
///
/// Two visual states driven by [`crate::nav::ScrollCoordinator`]: the
/// transparent state while the hero is on screen, and the compact state
/// with its own background once the page has scrolled past it. The
/// action button only appears after the hero's own button has left the
/// viewport, so the two are never visible at the same time.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let compact = app.nav.is_header_compact();

        let bg = if compact { theme.bg2 } else { theme.bg0 };
        let brand_style = Style::default()
            .fg(theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD);

        let brand = format!(" {} ", proxlock_core::content::HERO_TITLE);
        let tabs = match app.page {
            Page::Home => " [Home]  Pricing ",
            Page::Pricing => "  Home  [Pricing] ",
        };

        let button = if app.nav.is_action_button_visible() {
            format!(" {} ", proxlock_core::content::HERO_ACTION)
        } else {
            String::new()
        };

        let used = brand.chars().count() + tabs.chars().count() + button.chars().count();
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(brand, brand_style),
            Span::styled(tabs, Style::default().fg(theme.fg1).bg(bg)),
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(
                button,
                Style::default()
                    .fg(theme.button_fg)
                    .bg(theme.button_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
