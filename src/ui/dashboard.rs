use crate::model::ElementCategory;
use crate::ui::app::{App, Mode, Reply};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
        Tabs, Wrap,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Category tabs
        Constraint::Min(8),    // Table
        Constraint::Length(8), // Answer
        Constraint::Length(3), // Prompt
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_tabs(frame, chunks[1], app);
    draw_table(frame, chunks[2], app);
    draw_answer(frame, chunks[3], app);
    draw_prompt(frame, chunks[4], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let chat = app
        .orchestrator
        .as_ref()
        .map_or_else(|| "no model".to_string(), |o| o.model().to_string());
    let title = format!(
        " IFC Assistant | {} | {} | {} records | {} ",
        app.tables.project_name,
        app.tables.schema,
        app.tables.total_records(),
        chat
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = ElementCategory::ALL
        .iter()
        .map(|category| {
            Line::from(vec![
                Span::raw(category.table_name()),
                Span::styled(
                    format!(" ({})", app.tables.count(*category)),
                    Style::default().fg(BRAND_GREEN),
                ),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.selected_category)
        .highlight_style(SELECTED_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App) {
    let category = app.selected();
    let view = app.table_view(category);

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_row >= visible_rows {
        app.selected_row - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(view.headers.to_vec())
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, cells)| {
            let style = if i == app.selected_row && app.mode == Mode::Browse {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(cells.clone()).style(style)
        })
        .collect();

    let share = 100 / u16::try_from(view.headers.len()).unwrap_or(1).max(1);
    let widths = vec![Constraint::Percentage(share); view.headers.len()];

    let title = format!(" {} ({}) ", category.table_name(), view.rows.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ACCENT)),
    );

    frame.render_widget(table, area);

    if view.rows.len() > visible_rows && area.height > 3 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(view.rows.len()).position(app.selected_row);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_answer(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(BRAND_MUTED);
    let lines: Vec<Line> = match &app.reply {
        None => vec![Line::styled(
            "Press / to ask about doors, windows, beams, columns, rooms or floors.",
            muted,
        )],
        Some(Reply::Thinking(question)) => vec![
            Line::styled(format!("> {question}"), HEADER_STYLE),
            Line::styled("Thinking...", muted),
        ],
        Some(Reply::Answered { question, answer }) => {
            let mut lines = vec![Line::styled(format!("> {question}"), HEADER_STYLE)];
            lines.extend(answer.text.lines().map(|l| Line::raw(l.to_string())));
            if !answer.tool_calls.is_empty() {
                let used: Vec<&str> = answer.tool_calls.iter().map(|c| c.name.as_str()).collect();
                lines.push(Line::styled(format!("tools: {}", used.join(", ")), muted));
            }
            lines
        }
        Some(Reply::Failed { question, message }) => vec![
            Line::styled(format!("> {question}"), HEADER_STYLE),
            Line::styled(message.clone(), Style::default().fg(BRAND_ORANGE)),
        ],
    };

    let answer = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Answer ").borders(Borders::ALL));
    frame.render_widget(answer, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style, border) = match app.mode {
        Mode::Asking => (
            format!(" {}_", app.input),
            Style::default(),
            Style::default().fg(BRAND_ORANGE),
        ),
        Mode::Browse => (
            " ←→ Table | ↑↓ Row | / Ask | q Quit ".to_string(),
            Style::default().fg(BRAND_MUTED),
            Style::default(),
        ),
    };

    let title = if app.mode == Mode::Asking {
        " Question (Enter to send, Esc to cancel) "
    } else {
        ""
    };
    let prompt = Paragraph::new(text).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(prompt, area);
}
