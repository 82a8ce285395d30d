use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::Title;
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap,
};
use ratatui::Frame;

pub mod layout;

use crate::app::{App, Focus, InputMode, SidebarRow, StatusLevel};
use crate::content::{FieldKind, FormSpec, PanelBody, StatCard, TableSpec};
use crate::menu::{IconId, MenuEntry};

pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::areas(f.size());

    draw_search_bar(f, areas.header_search, app);
    draw_clock(f, areas.header_clock, app);
    draw_user(f, areas.header_user, app);
    draw_sidebar(f, areas.sidebar, app);
    draw_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);
    draw_hint_line(f, areas.hint_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn icon(app: &App, id: IconId) -> &'static str {
    if app.ascii_icons {
        id.ascii()
    } else {
        id.glyph()
    }
}

/// Decorative marks follow the same switch as the icons.
fn deco(app: &App, unicode: &'static str, ascii: &'static str) -> &'static str {
    if app.ascii_icons {
        ascii
    } else {
        unicode
    }
}

// --- header ---

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search_input.clone()),
            Span::styled(deco(app, "▌", "_"), Style::default().fg(Color::Yellow)),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::styled(
                format!("{} ", icon(app, IconId::Search)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "Search anything...",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(match app.input_mode {
            InputMode::Search => Style::default().fg(Color::Yellow),
            InputMode::Normal => Style::default(),
        });
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_clock(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", icon(app, IconId::Clock)),
            Style::default().fg(Color::LightCyan),
        ),
        Span::styled(
            app.clock.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_user(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", icon(app, IconId::Bell)),
            Style::default().fg(Color::LightYellow),
        ),
        Span::styled(
            format!("{} ", deco(app, "•", "*")),
            Style::default().fg(Color::LightRed),
        ),
        Span::styled(
            app.user.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.user.role.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);
    f.render_widget(paragraph, area);
}

// --- sidebar ---

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = app
        .visible_rows()
        .iter()
        .map(|row| sidebar_item(app, *row))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Kanri {} Dashboard UI", deco(app, "·", "-")))
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol("");

    let mut state = ListState::default();
    state.select(Some(app.sidebar_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn sidebar_item(app: &App, row: SidebarRow) -> ListItem<'static> {
    match row {
        SidebarRow::Entry { index } => match &app.menu[index] {
            MenuEntry::Leaf { label, icon: icon_id, target, .. } => {
                let active = app.is_active(*target);
                let style = if active {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icon(app, *icon_id)), style),
                    Span::styled((*label).to_string(), style),
                ]))
            }
            MenuEntry::Group { id, label, icon: icon_id, .. } => {
                let expanded = app.expansion.is_expanded(id);
                let chevron = if expanded {
                    deco(app, "▾", "v")
                } else {
                    deco(app, "▸", ">")
                };
                let style = if expanded {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icon(app, *icon_id)), style),
                    Span::styled((*label).to_string(), style),
                    Span::styled(format!(" {chevron}"), Style::default().fg(Color::DarkGray)),
                ]))
            }
        },
        SidebarRow::Child { entry, child } => {
            let MenuEntry::Group { children, .. } = &app.menu[entry] else {
                return ListItem::new(Line::from(""));
            };
            let leaf = &children[child];
            let active = app.is_active(leaf.target);
            let (bullet, style) = if active {
                (
                    Span::styled(
                        format!("{} ", deco(app, "●", "*")),
                        Style::default().fg(Color::White).bg(Color::Blue),
                    ),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Span::styled(
                        format!("{} ", deco(app, "·", "-")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Style::default().fg(Color::Gray),
                )
            };
            ListItem::new(Line::from(vec![
                Span::raw("   "),
                bullet,
                Span::styled(leaf.label.to_string(), style),
            ]))
        }
        SidebarRow::Logout => ListItem::new(Line::from(vec![
            Span::styled(
                format!("{} ", icon(app, IconId::Logout)),
                Style::default().fg(Color::LightRed),
            ),
            Span::styled("Logout", Style::default().fg(Color::LightRed)),
        ])),
    }
}

// --- content ---

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Content {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let panel = app.current_panel();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(panel.title)
        .title(Title::from(deco(app, "－ □ ×", "- o x")).alignment(Alignment::Right))
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel.body {
        PanelBody::Stats(cards) => draw_stats(f, inner, cards),
        PanelBody::Table(table) => draw_table_window(f, inner, app, &table),
        PanelBody::Form(form) => draw_form_window(f, inner, app, &form),
        PanelBody::AttendanceCheck => draw_attendance_check(f, inner, app),
        PanelBody::ComingSoon => draw_centered_notice(
            f,
            inner,
            icon(app, IconId::Gear),
            &["Coming Soon", "This module is under development."],
        ),
        PanelBody::Welcome => draw_centered_notice(
            f,
            inner,
            icon(app, IconId::Dashboard),
            &[
                "Welcome to Dashboard",
                "Select an item from the sidebar to get started.",
            ],
        ),
    }
}

fn draw_stats(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[0]);

    let palette = [
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightYellow,
        Color::LightGreen,
    ];
    for (idx, card) in cards.iter().enumerate() {
        let color = palette[idx % palette.len()];
        let text = Text::from(vec![
            Line::from(Span::styled(
                card.value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.label,
                Style::default().fg(Color::Gray),
            )),
        ]);
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[idx]);
    }
}

fn greeting_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "お疲れ様、 Admin!!!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(app.clock.display(), Style::default().fg(Color::DarkGray)),
    ])
}

fn search_strip(table: &TableSpec) -> Line<'static> {
    Line::from(vec![
        Span::styled("キーワード ", Style::default().fg(Color::Gray)),
        Span::styled(
            "[                    ]",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled("[検索]", Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled("[全て]", Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled(
            format!("[{}]", table.create_label),
            Style::default().fg(Color::LightGreen),
        ),
    ])
}

fn draw_table_window(f: &mut Frame, area: Rect, app: &App, spec: &TableSpec) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(greeting_line(app)), chunks[0]);
    f.render_widget(Paragraph::new(search_strip(spec)), chunks[1]);

    let data_columns = spec.columns.len() - spec.action_columns();
    let header = Row::new(spec.columns.iter().map(|col| {
        Cell::from(*col).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1);

    let mut rows: Vec<Row> = spec
        .rows
        .iter()
        .map(|row| {
            Row::new(row.iter().enumerate().map(|(idx, cell)| {
                if idx == data_columns {
                    // Inert edit action cell.
                    Cell::from("編集").style(Style::default().fg(Color::Black).bg(Color::LightBlue))
                } else if idx == data_columns + 1 {
                    // Inert delete action cell.
                    Cell::from("削除").style(Style::default().fg(Color::Black).bg(Color::LightRed))
                } else {
                    Cell::from(*cell).style(Style::default().fg(Color::White))
                }
            }))
        })
        .collect();

    // Pad to five rows so the grid keeps its shape, as the original did.
    while rows.len() < 5 {
        rows.push(Row::new(spec.columns.iter().map(|_| Cell::from(""))));
    }

    let widths: Vec<Constraint> = spec
        .columns
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            if idx >= data_columns {
                Constraint::Length(6)
            } else {
                Constraint::Ratio(1, data_columns as u32)
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(Color::DarkGray),
        ))
        .column_spacing(1);
    f.render_widget(table, chunks[2]);

    let pagination = Line::from(vec![
        Span::styled(
            format!("{} ", deco(app, "‹", "<")),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            " 1 ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED),
        ),
        Span::styled(
            format!(" {}", deco(app, "›", ">")),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(pagination).alignment(Alignment::Right),
        chunks[3],
    );
}

fn draw_form_window(f: &mut Frame, area: Rect, app: &App, spec: &FormSpec) {
    let mut lines = vec![greeting_line(app), Line::from("")];

    for field in spec.fields {
        let control = match field.kind {
            FieldKind::Text => Span::styled(
                "[______________________]",
                Style::default().fg(Color::DarkGray),
            ),
            FieldKind::Select(options) => Span::styled(
                format!("[{} {}]", options.join(" / "), deco(app, "▽", "v")),
                Style::default().fg(Color::DarkGray),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>14}  ", field.label),
                Style::default().fg(Color::Gray),
            ),
            control,
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", spec.submit_label),
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .scroll((app.content_scroll, 0))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_attendance_check(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            icon(app, IconId::Clock),
            Style::default().fg(Color::LightCyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Attendance Check",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[ Check In ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "[ Check Out ]",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            app.clock.display_time(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_centered_notice(f: &mut Frame, area: Rect, glyph: &'static str, rows: &[&'static str]) {
    let pad = (area.height as usize / 2).saturating_sub(rows.len() + 2);
    let mut lines = vec![Line::from(""); pad];
    lines.push(Line::from(Span::styled(
        glyph,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    for (idx, row) in rows.iter().enumerate() {
        let style = if idx == 0 {
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(*row, style)));
    }
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

// --- footer ---

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_view().title())),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.focus_label())),
    ];

    if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
        };
        spans.push(Span::styled("msg: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::White)),
        area,
    );
}

fn draw_hint_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::LightCyan)),
            Span::raw(" Cancel  "),
            Span::styled("Enter", Style::default().fg(Color::LightCyan)),
            Span::raw(" Search (inert)"),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::LightCyan)),
            Span::raw(" Move  "),
            Span::styled("Enter", Style::default().fg(Color::LightCyan)),
            Span::raw(" Select  "),
            Span::styled("1-9", Style::default().fg(Color::LightCyan)),
            Span::raw(" Jump  "),
            Span::styled("Tab", Style::default().fg(Color::LightCyan)),
            Span::raw(" Focus  "),
            Span::styled("/", Style::default().fg(Color::LightCyan)),
            Span::raw(" Search  "),
            Span::styled("?", Style::default().fg(Color::LightCyan)),
            Span::raw(" Help  "),
            Span::styled("q", Style::default().fg(Color::LightCyan)),
            Span::raw(" Quit"),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  j / k      Move selection (vim)"),
        Line::from("  gg / G     Top / bottom (vim)"),
        Line::from("  Enter      Open view / toggle group"),
        Line::from("  Space      Toggle group under cursor"),
        Line::from("  1-9        Jump to top-level entry"),
        Line::from("  Tab        Cycle focus"),
        Line::from("  Mouse      Click sidebar rows, scroll content"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  /          Focus the search bar (inert)"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("All create/edit/delete affordances are display-only."),
        Line::from(""),
        Line::from(format!(
            "Signed in as {} ({})",
            app.user.name, app.user.role
        )),
        Line::from(format!("Avatar: {}", app.user.avatar)),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
