mod app;
mod clock;
mod config;
mod content;
mod menu;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Margin, Rect};
use ratatui::Terminal;

use crate::app::{App, Focus, InputMode, StatusLevel};

#[derive(Debug, Parser)]
#[command(
    name = "kanri",
    version,
    about = "Kanri: an administrative dashboard TUI shell"
)]
struct Args {
    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use ASCII sidebar icons instead of unicode glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_err) = config::load(args.config.as_deref());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.user = config.user;
    app.ascii_icons = args.ascii;
    if let Some(err) = config_err {
        app.set_status(format!("Config ignored: {err}"), StatusLevel::Warn);
    }

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Char('g') {
        app.clear_chord();
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Sidebar => Focus::Content,
                Focus::Content => Focus::Sidebar,
            };
        }
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::Sidebar,
        KeyCode::Char('l') | KeyCode::Right => app.focus = Focus::Content,
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Focus::Sidebar => app.cursor_down(),
            Focus::Content => app.scroll_down(1),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Focus::Sidebar => app.cursor_up(),
            Focus::Content => app.scroll_up(1),
        },
        KeyCode::Char('g') => {
            if app.consume_chord('g') {
                match app.focus {
                    Focus::Sidebar => app.cursor_top(),
                    Focus::Content => app.content_scroll = 0,
                }
            } else {
                app.set_chord('g');
            }
        }
        KeyCode::Char('G') => {
            if app.focus == Focus::Sidebar {
                app.cursor_bottom();
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.focus = Focus::Sidebar;
            app.jump_to_entry(c as usize - '0' as usize);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.focus == Focus::Sidebar {
                app.activate_cursor();
            }
        }
        KeyCode::Esc => app.focus = Focus::Sidebar,
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_search(),
        KeyCode::Enter => {
            app.set_status("Search is display-only in this shell", StatusLevel::Info);
            app.leave_search();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.input_mode == InputMode::Search {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(areas.sidebar, col, row) {
                app.focus = Focus::Sidebar;
                // Border clicks are ignored, and the list scrolls to keep
                // the cursor visible, so the offset folds into the mapping.
                let inner = areas.sidebar.inner(&Margin {
                    horizontal: 1,
                    vertical: 1,
                });
                if contains(inner, col, row) {
                    let height = inner.height as usize;
                    let line = (row - inner.y) as usize;
                    if let Some(clicked) = app.sidebar_row_at(line, height) {
                        app.sidebar_cursor = app.sidebar_scroll_offset(height) + line;
                        app.activate_row(clicked);
                    }
                }
            } else if contains(areas.content, col, row) {
                app.focus = Focus::Content;
            } else if contains(areas.header_search, col, row) {
                app.enter_search();
            }
        }
        MouseEventKind::ScrollUp => {
            if contains(areas.sidebar, col, row) {
                app.cursor_up();
            } else if contains(areas.content, col, row) {
                app.scroll_up(3);
            }
        }
        MouseEventKind::ScrollDown => {
            if contains(areas.sidebar, col, row) {
                app.cursor_down();
            } else if contains(areas.content, col, row) {
                app.scroll_down(3);
            }
        }
        _ => {}
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn terminal_rect() -> Option<Rect> {
    crossterm::terminal::size()
        .ok()
        .map(|(width, height)| Rect::new(0, 0, width, height))
}
