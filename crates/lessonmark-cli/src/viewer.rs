use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lessonmark_engine::{DiagramOutcome, Document};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::render::{RenderSettings, Rendered, render};

/// A parsed lesson plus everything needed to re-render it.
pub struct Lesson<'a> {
    pub title: String,
    pub doc: &'a Document,
    pub input: &'a str,
    pub diagrams: &'a [DiagramOutcome<Vec<String>>],
}

struct App<'a> {
    lesson: Lesson<'a>,
    settings: RenderSettings,
    rendered: Rendered,
    scroll: usize,
    toc_state: ListState,
}

impl<'a> App<'a> {
    fn new(lesson: Lesson<'a>, settings: RenderSettings) -> Self {
        let rendered = render(lesson.doc, lesson.input, &settings, lesson.diagrams);
        let mut toc_state = ListState::default();
        if rendered.toc.is_some() {
            toc_state.select(Some(0));
        }
        Self {
            lesson,
            settings,
            rendered,
            scroll: 0,
            toc_state,
        }
    }

    fn expand(&mut self) {
        if self.settings.show_all || !self.rendered.disclosure.is_collapsed() {
            return;
        }
        self.settings.show_all = true;
        self.rendered = render(
            self.lesson.doc,
            self.lesson.input,
            &self.settings,
            self.lesson.diagrams,
        );
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.rendered.lines.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    fn select_heading(&mut self, forward: bool) {
        let Some(count) = self.rendered.toc.as_ref().map(|t| t.len()) else {
            return;
        };
        let i = match (self.toc_state.selected(), forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(0), false) | (None, false) => count - 1,
            (Some(i), false) => i - 1,
            (None, true) => 0,
        };
        self.toc_state.select(Some(i));
        self.jump_to_selected();
    }

    /// Scrolls to the selected heading, expanding the lesson if the heading
    /// is in the hidden part.
    fn jump_to_selected(&mut self) {
        let Some(slug) = self
            .toc_state
            .selected()
            .and_then(|i| self.rendered.toc.as_ref()?.entries.get(i))
            .map(|e| e.slug.clone())
        else {
            return;
        };
        if self.rendered.anchor(&slug).is_none() {
            self.expand();
        }
        if let Some(line) = self.rendered.anchor(&slug) {
            self.scroll = line;
        }
    }
}

pub fn run(lesson: Lesson<'_>, settings: RenderSettings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lesson, settings);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(20),
                KeyCode::PageUp => app.scroll_by(-20),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::Char('n') | KeyCode::Tab => app.select_heading(true),
                KeyCode::Char('p') | KeyCode::BackTab => app.select_heading(false),
                KeyCode::Enter => app.jump_to_selected(),
                KeyCode::Char('m') => app.expand(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content_area = if let Some(toc) = &app.rendered.toc {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[0]);

        let items: Vec<ListItem> = toc
            .entries
            .iter()
            .map(|e| {
                let indent = "  ".repeat(usize::from(e.level.saturating_sub(2)));
                ListItem::new(Line::from(format!("{indent}{}", e.text)))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Contents"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
        f.render_stateful_widget(list, columns[0], &mut app.toc_state);
        columns[1]
    } else {
        rows[0]
    };

    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let content = Paragraph::new(app.rendered.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.lesson.title.clone()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(content, content_area);

    let mut help = vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("n/p: Next/Previous heading"),
    ];
    if app.rendered.disclosure.is_collapsed() && !app.settings.show_all {
        help.push(Span::raw(" | m: Show all"));
    }
    f.render_widget(Paragraph::new(Line::from(help)), rows[1]);
}
