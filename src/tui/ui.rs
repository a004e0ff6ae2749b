use crate::config::DEFAULT_ACCENT;
use crate::tui::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Todo list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_input(frame, chunks[1], app);
    draw_todo_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    match app.mode() {
        Mode::ConfirmDelete => draw_delete_dialog(frame, app),
        Mode::EditDialog => draw_edit_dialog(frame, app),
        Mode::Help => draw_help_window(frame, app),
        _ => {}
    }
}

fn accent_color(app: &App) -> Color {
    let (r, g, b) = app.config.accent().unwrap_or(DEFAULT_ACCENT);
    Color::Rgb(r, g, b)
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let header = Paragraph::new("✦ Quick Todo")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(accent_color(app)).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let focused = app.mode() == Mode::Input;

    let content = if focused {
        let (before_cursor, after_cursor) = app.input.buffer.split_at(app.input.cursor_position);
        Line::from(Span::styled(
            format!("{}█{}", before_cursor, after_cursor),
            Style::default().fg(Color::White),
        ))
    } else if app.input.buffer.is_empty() {
        Line::from(Span::styled(
            "Enter Todo...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.input.buffer.clone(),
            Style::default().fg(Color::Gray),
        ))
    };

    let border_style = if focused {
        Style::default().fg(accent_color(app))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New Todo")
            .border_style(border_style),
    );

    frame.render_widget(input, area);
}

fn draw_todo_list(frame: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .store
        .todos()
        .iter()
        .map(|todo| {
            let line = Line::from(Span::styled(
                format!(" {}", todo),
                Style::default().fg(Color::White),
            ));
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Todos"))
        .highlight_style(
            Style::default()
                .bg(accent_color(app))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !app.store.is_empty() {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let footer_text = match app.mode() {
        Mode::Input => {
            "ADD | Enter: add | Esc: back to list | ←→: cursor | Backspace/Delete: edit".to_string()
        }
        Mode::ConfirmDelete => "DELETE | y/Enter: yes | n/Esc: no".to_string(),
        Mode::EditDialog => "EDIT | Enter: confirm | Esc: cancel | ←→: cursor".to_string(),
        _ => format!(
            "Items: {} | ↑↓/j/k: navigate | a: add | e: edit | d: delete | ?: help | q: quit",
            app.store.len()
        ),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_delete_dialog(frame: &mut Frame, app: &App) {
    let target = app
        .store
        .pending_delete()
        .and_then(|i| app.store.todos().get(i))
        .cloned()
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure to delete?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("“{}”", target),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[n] No   ", Style::default().fg(Color::White)),
            Span::styled(
                "[y] Yes",
                Style::default().fg(accent_color(app)).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Todo ")
                .border_style(Style::default().fg(accent_color(app))),
        )
        .alignment(ratatui::layout::Alignment::Center);

    let area = centered_rect(50, 35, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn draw_edit_dialog(frame: &mut Frame, app: &App) {
    let (before_cursor, after_cursor) = app
        .edit_input
        .buffer
        .split_at(app.edit_input.cursor_position);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}█{}", before_cursor, after_cursor),
            Style::default().bg(Color::Blue).fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc] Cancel   ", Style::default().fg(Color::White)),
            Span::styled(
                "[Enter] Edit",
                Style::default().fg(accent_color(app)).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Edit Todo... ")
                .border_style(Style::default().fg(accent_color(app))),
        )
        .alignment(ratatui::layout::Alignment::Center);

    let area = centered_rect(60, 30, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn draw_help_window(frame: &mut Frame, app: &App) {
    let help_text = vec![
        "Quick Todo - Keyboard Commands",
        "",
        "LIST:",
        "  ↑↓ / j/k          Navigate up/down",
        "  a / i             Focus the input field",
        "  e / Enter         Edit the selected todo",
        "  d / x             Delete the selected todo",
        "",
        "INPUT FIELD:",
        "  Enter             Add the typed todo",
        "  Esc               Back to the list",
        "",
        "DIALOGS:",
        "  y / Enter         Confirm",
        "  n / Esc           Cancel",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .border_style(Style::default().fg(accent_color(app))),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(70, 70, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: ratatui::layout::Rect) -> ratatui::layout::Rect {
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
