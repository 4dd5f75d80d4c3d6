use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use rich_delta_engine::Group;
use std::io::{Stdout, stdout};

use crate::render::{describe_group, group_title};

struct App {
    title: String,
    groups: Vec<Group>,
    list_state: ListState,
}

impl App {
    fn new(title: String, groups: Vec<Group>) -> Self {
        let mut list_state = ListState::default();
        if !groups.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title,
            groups,
            list_state,
        }
    }

    fn next_group(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.groups.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_group(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.groups.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_content(&self) -> Vec<String> {
        self.list_state
            .selected()
            .and_then(|i| self.groups.get(i))
            .map(describe_group)
            .unwrap_or_default()
    }
}

/// Runs the interactive group inspector until the user quits.
pub fn run(title: String, groups: Vec<Group>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title, groups);
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

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_group(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_group(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| ListItem::new(Line::from(group_title(i, group))))
        .collect();

    let groups_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(app.title.as_str()))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(groups_list, chunks[0], &mut app.list_state);

    let content = app.selected_content();
    let content_text: Vec<Line> = if content.is_empty() {
        vec![Line::from("No groups")]
    } else {
        content.into_iter().map(Line::from).collect()
    };

    let details = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Blots"))
        .wrap(Wrap { trim: false });

    f.render_widget(details, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));
    f.render_widget(help, rows[1]);
}
