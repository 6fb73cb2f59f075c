use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use proxlock_core::content;

use crate::app::App;
use crate::nav::{ElementBounds, PageGeometry};
use crate::reveal::RevealSegment;
use crate::theme::Theme;

/// The home page rendered as a scrollable line document.
///
/// The document is rebuilt each frame for the current width; while
/// building it we record the bounds of the title, subtitle and hero
/// button, which the header controller compares against the scroll
/// offset.
pub struct HomeWidget;

impl HomeWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let (lines, geometry) = build_document(app, area.width);

        app.geometry = geometry;
        app.max_scroll = (lines.len() as i32 - area.height as i32).max(0);

        let offset = app.scroller.offset().clamp(0, app.max_scroll) as usize;
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(area.height as usize)
            .collect();

        let paragraph =
            Paragraph::new(visible).style(Style::default().fg(app.theme.fg1).bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }
}

/// Content column width: full width minus a margin, capped for
/// readability on wide terminals.
fn column_width(width: u16) -> usize {
    (width.saturating_sub(4) as usize).clamp(20, 100)
}

fn build_document(app: &App, width: u16) -> (Vec<Line<'static>>, PageGeometry) {
    let theme = &app.theme;
    let cols = column_width(width);
    let mut doc = DocumentBuilder::new(cols);

    doc.blank();

    // Hero title with an underline rule
    let title_top = doc.cursor();
    doc.push(Line::from(Span::styled(
        content::HERO_TITLE.to_string(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    doc.push(Line::from(Span::styled(
        "━".repeat(content::HERO_TITLE.chars().count()),
        Style::default().fg(theme.accent),
    )));
    let title = ElementBounds::new(title_top, doc.cursor());

    // Hero subtitle, driven by the reveal animation
    let subtitle_top = doc.cursor();
    for line in reveal_lines(app, cols) {
        doc.push(line);
    }
    let subtitle = ElementBounds::new(subtitle_top, doc.cursor());

    doc.blank();
    doc.paragraph(content::HERO_DESCRIPTION, Style::default().fg(theme.fg1));
    doc.blank();

    // Hero call-to-action button
    let cta_top = doc.cursor();
    doc.push(Line::from(Span::styled(
        format!("  {}  ", content::HERO_ACTION),
        Style::default()
            .fg(theme.button_fg)
            .bg(theme.button_bg)
            .add_modifier(Modifier::BOLD),
    )));
    let cta = ElementBounds::new(cta_top, doc.cursor());

    doc.blank();
    doc.blank();

    doc.section_title(content::HOW_IT_WORKS_TITLE, theme);
    for section in &content::HOW_IT_WORKS {
        doc.push(Line::from(Span::styled(
            section.title.to_string(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )));
        doc.paragraph(section.body, Style::default().fg(theme.fg1));
        doc.blank();
    }
    doc.blank();

    doc.section_title(content::OPEN_SOURCE_TITLE, theme);
    doc.paragraph(
        content::OPEN_SOURCE_DESCRIPTION,
        Style::default().fg(theme.fg1),
    );
    doc.blank();
    for repo in &content::OPEN_SOURCE_REPOS {
        doc.push(Line::from(vec![
            Span::styled(
                format!("  {} ", repo.title),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(repo.url.to_string(), Style::default().fg(theme.link)),
        ]));
        doc.paragraph(repo.description, Style::default().fg(theme.grey1));
        doc.blank();
    }
    doc.blank();

    doc.section_title(content::CTA_TITLE, theme);
    doc.paragraph(content::CTA_DESCRIPTION, Style::default().fg(theme.fg1));
    doc.blank();
    doc.push(Line::from(Span::styled(
        format!("  {}  ", content::HERO_ACTION),
        Style::default()
            .fg(theme.button_fg)
            .bg(theme.button_bg)
            .add_modifier(Modifier::BOLD),
    )));
    doc.blank();
    doc.blank();

    doc.paragraph(content::FOOTNOTE, Style::default().fg(theme.grey0));
    doc.blank();
    doc.push(Line::from(Span::styled(
        content::copyright_line(),
        Style::default().fg(theme.grey0),
    )));
    doc.push(Line::from(vec![
        Span::styled("GitHub ", Style::default().fg(theme.link)),
        Span::styled(content::urls::GITHUB.to_string(), Style::default().fg(theme.grey1)),
    ]));
    doc.push(Line::from(vec![
        Span::styled("Discord ", Style::default().fg(theme.link)),
        Span::styled(content::urls::DISCORD.to_string(), Style::default().fg(theme.grey1)),
    ]));
    doc.blank();

    let geometry = PageGeometry {
        title,
        subtitle,
        cta,
    };
    (doc.into_lines(), geometry)
}

/// Wrap the reveal segments into styled lines. Words are indivisible so
/// a word whose slots are mid-scramble never breaks across lines.
fn reveal_lines(app: &App, cols: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let revealed_style = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
    let scramble_style = Style::default().fg(theme.scramble);

    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut cur = 0usize;
    let mut pending_spaces = 0usize;

    for segment in app.reveal.segments() {
        match segment {
            RevealSegment::Space(n) => pending_spaces += n,
            RevealSegment::Word(word) => {
                let needed = word.len() + if cur > 0 { pending_spaces } else { 0 };
                if cur > 0 && cur + needed > cols {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                    cur = 0;
                } else if cur > 0 {
                    spans.push(Span::raw(" ".repeat(pending_spaces)));
                    cur += pending_spaces;
                }
                pending_spaces = 0;

                // Group consecutive slots of the same state into one span
                let mut run = String::new();
                let mut run_revealed = word[0].revealed;
                for slot in &word {
                    if slot.revealed != run_revealed {
                        let style = if run_revealed { revealed_style } else { scramble_style };
                        spans.push(Span::styled(std::mem::take(&mut run), style));
                        run_revealed = slot.revealed;
                    }
                    run.push(slot.ch);
                }
                let style = if run_revealed { revealed_style } else { scramble_style };
                spans.push(Span::styled(run, style));
                cur += word.len();
            }
        }
    }

    if !spans.is_empty() || lines.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Incrementally built line document with a line cursor for geometry
/// recording.
struct DocumentBuilder {
    lines: Vec<Line<'static>>,
    cols: usize,
}

impl DocumentBuilder {
    fn new(cols: usize) -> Self {
        Self {
            lines: Vec::new(),
            cols,
        }
    }

    /// Next line index in document coordinates
    fn cursor(&self) -> i32 {
        self.lines.len() as i32
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn section_title(&mut self, title: &str, theme: &Theme) {
        self.push(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        self.blank();
    }

    /// Word-wrapped plain paragraph
    fn paragraph(&mut self, text: &str, style: Style) {
        for wrapped in wrap_text(text, self.cols) {
            self.push(Line::from(Span::styled(wrapped, style)));
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}

/// Greedy word wrap by display width.
fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !current.is_empty() && current.width() + 1 + word_width > cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxlock_core::AppConfig;
    use std::sync::Arc;
    use std::time::Instant;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Theme::default(), Instant::now())
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text(content::HERO_DESCRIPTION, 40);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 40, "line too wide: {line}");
        }
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let lines = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn test_geometry_ordering() {
        let app = app();
        let (lines, geometry) = build_document(&app, 80);

        assert!(geometry.title.top < geometry.title.bottom);
        assert_eq!(geometry.title.bottom, geometry.subtitle.top);
        assert!(geometry.subtitle.bottom <= geometry.cta.top);
        assert!(geometry.cta.bottom <= lines.len() as i32);
    }

    #[test]
    fn test_reveal_words_do_not_break() {
        let app = app();
        // Narrow enough to force wrapping of the 27-char subtitle
        let lines = reveal_lines(&app, 20);
        assert!(lines.len() > 1);
        for line in &lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(text.width() <= 20);
            // Every line holds whole words only
            for word in text.split_whitespace() {
                assert!(word.chars().all(|c| c != ' '));
            }
        }
    }

    #[test]
    fn test_narrow_terminal_widens_subtitle_bounds() {
        let app = app();
        let (_, wide) = build_document(&app, 120);
        let (_, narrow) = build_document(&app, 24);
        assert!(narrow.subtitle.height() >= wide.subtitle.height());
    }
}
