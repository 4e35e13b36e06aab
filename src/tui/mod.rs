// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal presenter.
//!
//! Shows one slide at a time (ratatui + crossterm) with a footer naming the deck, the current
//! section and the slide position.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{Deck, LayoutKind};
use crate::render::{footer_parts, layout_slide, styled_segments, SgrStyle, SlideLayout};

mod presenter;
mod theme;

pub use presenter::{Command, Presenter};
pub use theme::ThemeError;

use theme::TuiTheme;

const H_PADDING: u16 = 2;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Presents `deck` until the user quits.
pub fn run(deck: Deck) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut presenter = Presenter::new(deck);
    log::info!("presenting {} slides", presenter.deck().slide_count());

    let mut terminal = TerminalSession::new()?;
    while !presenter.should_quit() {
        terminal.draw(|frame| draw(frame, &presenter, &theme))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    presenter.handle_key(key);
                }
            }
        }
    }

    log::info!("presentation ended on slide {}", presenter.cursor() + 1);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, presenter: &Presenter, theme: &TuiTheme) {
    let area = frame.size();
    frame.render_widget(Block::default().style(theme.base_style()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let (body_area, footer_area) = (rows[0], rows[1]);

    let frame_block =
        Block::default().borders(Borders::ALL).border_style(theme.frame_border_style());
    let inner = frame_block.inner(body_area);
    frame.render_widget(frame_block, body_area);

    let content = Rect {
        x: inner.x.saturating_add(H_PADDING),
        width: inner.width.saturating_sub(2 * H_PADDING),
        ..inner
    };

    match presenter.current() {
        Some(entry) => {
            match layout_slide(entry.slide, usize::from(content.width), usize::from(content.height))
            {
                Ok(layout) => {
                    frame.render_widget(Paragraph::new(slide_lines(&layout, theme)), content);
                }
                Err(err) => {
                    let message = Paragraph::new(err.to_string()).style(theme.error_style());
                    frame.render_widget(message, inner);
                }
            }
        }
        None => {
            let message = Paragraph::new("This deck has no slides.")
                .style(theme.footer_style())
                .alignment(Alignment::Center);
            frame.render_widget(message, content);
        }
    }

    let (left, right) = footer_parts(presenter.deck(), presenter.cursor());
    let footer = footer_line(&left, presenter.current().and_then(|s| s.section), theme);
    frame.render_widget(Paragraph::new(footer), footer_area);
    if !presenter.deck().is_empty() {
        let counter = Paragraph::new(Span::styled(format!("{right} "), theme.footer_style()))
            .alignment(Alignment::Right);
        frame.render_widget(counter, footer_area);
    }
}

/// Footer text with the section name (when present) highlighted.
fn footer_line(left: &str, section: Option<&str>, theme: &TuiTheme) -> Line<'static> {
    let mut spans = vec![Span::styled(" ", theme.footer_style())];
    match section.and_then(|name| left.strip_suffix(name).map(|head| (head, name))) {
        Some((head, name)) => {
            spans.push(Span::styled(head.to_owned(), theme.footer_style()));
            spans.push(Span::styled(name.to_owned(), theme.section_style()));
        }
        None => spans.push(Span::styled(left.to_owned(), theme.footer_style())),
    }
    Line::from(spans)
}

/// One ratatui line per content row, with SGR escapes turned into styles.
///
/// Escape state carries over from one line to the next, like it would on a terminal.
fn slide_lines(layout: &SlideLayout, theme: &TuiTheme) -> Vec<Line<'static>> {
    let base = match layout.kind {
        LayoutKind::Code => theme.code_style(),
        LayoutKind::Center | LayoutKind::Block => theme.text_style(),
    };

    let mut lines = vec![Line::default(); layout.height];
    let mut sgr = SgrStyle::default();
    for placed in &layout.lines {
        let Some(row) = lines.get_mut(placed.y) else {
            continue;
        };

        let (segments, end) = styled_segments(&placed.text, sgr);
        sgr = end;

        let mut spans = Vec::with_capacity(segments.len() + 1);
        spans.push(Span::styled(" ".repeat(placed.x), base));
        for segment in segments {
            spans.push(Span::styled(
                segment.text.to_owned(),
                base.patch(theme.sgr_style(segment.style)),
            ));
        }
        *row = Line::from(spans);
    }
    lines
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().and_then(|()| terminal.clear()).map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
