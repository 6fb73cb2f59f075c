use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let page_str = match app.page {
            Page::Home => "HOME",
            Page::Pricing => "PRICING",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else if app.page == Page::Home && app.max_scroll > 0 {
            let percent = app.scroller.offset() * 100 / app.max_scroll;
            format!(" {page_str} | {percent}%")
        } else {
            format!(" {page_str}")
        };

        let help_hint = match app.page {
            Page::Home => " q:quit j/k:scroll gg/G:top/bottom p:pricing o:open ",
            Page::Pricing => " q:quit h:home r:refresh o:open ",
        };

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
