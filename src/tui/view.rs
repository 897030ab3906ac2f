use crate::core::render::BranchRow;
use crate::session::{Mode, SessionState};
use crate::tui::keymap::HELP;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const MUTED: Style = Style::new().fg(Color::DarkGray);
const CURSOR: Style = Style::new().fg(Color::Magenta);
const CURRENT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub fn draw(frame: &mut Frame, state: &SessionState, now: DateTime<Utc>) {
    let [title_area, help_area, filter_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(title_line(state)), title_area);
    frame.render_widget(Paragraph::new(Span::styled(HELP, MUTED)), help_area);
    frame.render_widget(Paragraph::new(filter_line(state)), filter_area);

    let rows = state.rows(now);
    let mut table_state = TableState::default();
    if !rows.is_empty() {
        table_state.select(Some(state.cursor()));
    }
    let header = Row::new(["", "Branch", "Hash", "Age", "Date", "Upstream"]).style(MUTED);
    let table = Table::new(
        rows.iter().map(table_row),
        [
            Constraint::Length(2),
            Constraint::Min(24),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(17),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(table, table_area, &mut table_state);

    frame.render_widget(Paragraph::new(Span::styled(state.status(), MUTED)), status_area);
}

fn title_line(state: &SessionState) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            "grecent - recent branches",
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  sort: {}", state.sort().label()), MUTED),
        Span::styled(
            format!("  {}/{} shown", state.view().len(), state.full().len()),
            MUTED,
        ),
    ];
    if let Some(command) = state.in_flight() {
        spans.push(Span::styled(
            format!("  {}…", command.describe()),
            Style::new().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn filter_line(state: &SessionState) -> Line<'_> {
    match state.mode() {
        Mode::Searching { .. } => Line::from(vec![
            Span::styled("search> ", CURSOR),
            Span::raw(state.search_text()),
            Span::styled("▏", CURSOR),
        ]),
        _ if !state.search_text().is_empty() => Line::from(vec![
            Span::styled("filter: ", MUTED),
            Span::raw(state.search_text()),
        ]),
        _ => Line::default(),
    }
}

fn table_row(row: &BranchRow) -> Row<'static> {
    let cursor = if row.selected {
        Cell::from(Span::styled("→", CURSOR))
    } else {
        Cell::from("")
    };
    let name = if row.is_current {
        Cell::from(Span::styled(format!("* {}", row.name), CURRENT))
    } else {
        Cell::from(row.name.clone())
    };
    Row::new([
        cursor,
        name,
        Cell::from(row.short_hash.clone()),
        Cell::from(row.age.clone()),
        Cell::from(row.date.clone()),
        Cell::from(if row.has_upstream { "yes" } else { "" }),
    ])
}
