//! Layout and rendering for the plot viewer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::{App, StreamStatus};
use crate::config::{MarkerKind, PlotStyle};

/// Width of the recent-records panel.
const RECENT_PANEL_WIDTH: u16 = 26;

/// Main draw function.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    if app.show_recent() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(RECENT_PANEL_WIDTH)])
            .split(rows[0]);
        draw_chart(f, app, cols[0]);
        draw_recent(f, app, cols[1]);
    } else {
        draw_chart(f, app, rows[0]);
    }

    draw_status(f, app, rows[1]);

    if app.show_help() {
        draw_help_overlay(f, area);
    }
}

fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let display = &app.config().display;
    let limits = app.state().limits();

    let dataset = Dataset::default()
        .marker(marker(display.marker))
        .graph_type(match app.style() {
            PlotStyle::Line => GraphType::Line,
            PlotStyle::Scatter => GraphType::Scatter,
        })
        .style(Style::default().fg(app.config().series_color()))
        .data(app.state().series().points());

    let axis_style = Style::default().fg(Color::Gray);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {} ", display.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("x")
                .style(axis_style)
                .bounds(limits.x)
                .labels(axis_labels(limits.x)),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(axis_style)
                .bounds(limits.y)
                .labels(axis_labels(limits.y)),
        );

    f.render_widget(chart, area);
}

fn marker(kind: MarkerKind) -> Marker {
    match kind {
        MarkerKind::Braille => Marker::Braille,
        MarkerKind::Dot => Marker::Dot,
        MarkerKind::Block => Marker::Block,
    }
}

/// Labels at the low end, middle and high end of an axis range.
pub fn axis_labels(range: [f64; 2]) -> Vec<String> {
    let [lo, hi] = range;
    let span = hi - lo;
    [lo, lo + span / 2.0, hi].iter().map(|&v| format_tick(v, span)).collect()
}

fn format_tick(value: f64, span: f64) -> String {
    if span < 10.0 {
        format!("{value:.2}")
    } else if value.abs() >= 1e7 {
        format!("{value:.3e}")
    } else {
        format!("{value:.0}")
    }
}

fn draw_recent(f: &mut Frame, app: &App, area: Rect) {
    let capacity = usize::from(area.height.saturating_sub(2));
    let wanted = app.config().display.recent_records.min(capacity);

    let lines: Vec<Line> = app
        .state()
        .series()
        .last_n(wanted)
        .iter()
        .map(|&(x, y)| Line::from(format!("({x:.0}, {y:.0})")))
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Records ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(panel, area);
}

/// One-line summary shown under the chart.
pub fn status_text(app: &App) -> String {
    let state = app.state();
    let stream = match app.stream() {
        StreamStatus::Live if state.is_empty() => "waiting for data".to_string(),
        StreamStatus::Live => "live".to_string(),
        StreamStatus::Ended => "stream ended".to_string(),
        StreamStatus::Failed(e) => format!("stream failed: {e}"),
    };

    let mut parts = vec![format!("records: {}", state.len())];
    if let Some(latest) = state.latest() {
        parts.push(format!("latest: {latest}"));
    }
    if let (Some((x_min, x_max)), Some((y_min, y_max))) =
        (state.bounds().x_range(), state.bounds().y_range())
    {
        parts.push(format!("x: {x_min:.0}..{x_max:.0}"));
        parts.push(format!("y: {y_min:.0}..{y_max:.0}"));
    }
    parts.push(stream);
    parts.push("? help".to_string());
    format!(" {}", parts.join(" │ "))
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.stream() {
        StreamStatus::Live => Color::Gray,
        StreamStatus::Ended => Color::Yellow,
        StreamStatus::Failed(_) => Color::Red,
    };
    f.render_widget(Paragraph::new(status_text(app)).style(Style::default().fg(color)), area);
}

fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_width = 44;
    let popup_height = 12;

    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  frameplot",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  (u32, u32) frames from stdin",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("    m, s              Line / scatter"),
        Line::from("    ?, F1             Toggle help"),
        Line::from("    q, Esc, Ctrl+C    Quit"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(help, popup_area);
}
