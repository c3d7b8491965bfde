use crate::app::App;
use flyover::braille::TerminalPainter;
use flyover::map::Rgba;
use glam::DVec2;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Split into map area and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Map
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_map(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn rgb(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", app.region().profile().display_name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Braille gives 2x4 resolution per character
    let mut engine = app.engine.clone();
    engine.set_viewport(inner.width as f64 * 2.0, inner.height as f64 * 4.0);

    let mut painter = TerminalPainter::new(inner.width as usize, inner.height as usize);
    let cities = app.cities();
    app.renderer.render(&engine, app.areas(), &cities, &mut painter);

    let to_cell = |p: DVec2| -> Option<(u16, u16)> {
        let (cx, cy) = ((p.x / 2.0).floor(), (p.y / 4.0).floor());
        (cx >= 0.0 && cy >= 0.0 && cx < inner.width as f64 && cy < inner.height as f64).then(|| (cx as u16, cy as u16))
    };

    let map_widget = MapWidget {
        painter,
        plane: to_cell(engine.anchor()),
        waypoint: app.waypoint.and_then(|w| engine.project(w)).and_then(to_cell),
        cursor_pos: app.mouse_pos.and_then(|(col, row)| {
            let (cx, cy) = (col.checked_sub(area.x + 1)?, row.checked_sub(area.y + 1)?);
            (cx < inner.width && cy < inner.height).then_some((cx, cy))
        }),
    };
    frame.render_widget(map_widget, inner);
}

/// Braille globe with labels and markers overlaid
struct MapWidget {
    painter: TerminalPainter,
    plane: Option<(u16, u16)>,
    waypoint: Option<(u16, u16)>,
    cursor_pos: Option<(u16, u16)>,
}

impl MapWidget {
    fn mark(&self, at: Option<(u16, u16)>, symbol: char, color: Color, area: Rect, buf: &mut Buffer) {
        if let Some((cx, cy)) = at {
            let (x, y) = (area.x + cx, area.y + cy);
            if x < area.x + area.width && y < area.y + area.height {
                buf[(x, y)].set_char(symbol).set_fg(color);
            }
        }
    }
}

impl Widget for MapWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas = self.painter.canvas();
        for row in 0..canvas.height().min(area.height as usize) {
            for col in 0..canvas.width().min(area.width as usize) {
                let Some(cell) = canvas.cell(col, row) else {
                    continue;
                };
                let x = area.x + col as u16;
                let y = area.y + row as u16;
                buf[(x, y)].set_char(cell.symbol).set_fg(rgb(cell.fg)).set_bg(rgb(cell.bg));
            }
        }

        for label in self.painter.labels() {
            let x = area.x + label.col;
            let y = area.y + label.row;
            let max_len = area.width.saturating_sub(label.col) as usize;
            for (i, ch) in label.text.chars().take(max_len.min(24)).enumerate() {
                buf[(x + i as u16, y)].set_char(ch).set_fg(rgb(label.color));
            }
        }

        self.mark(self.waypoint, '◎', Color::Magenta, area, buf);
        self.mark(self.plane, '✈', Color::Red, area, buf);
        self.mark(self.cursor_pos, '╋', Color::Yellow, area, buf);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let below = app.area_below().map(|a| a.name.as_str()).unwrap_or("open water");
    let target = app.target.as_ref().map(|t| t.name.as_str()).unwrap_or("-");

    let status = Line::from(vec![
        Span::styled(" ", dim),
        Span::styled(app.center_coords(), Style::default().fg(Color::Cyan)),
        Span::styled(" | hdg ", dim),
        Span::styled(format!("{:03.0}°", app.heading_degrees()), Style::default().fg(Color::Yellow)),
        Span::styled(" | ", dim),
        Span::styled(app.engine.altitude_mode().label(), Style::default().fg(Color::Magenta)),
        Span::styled(" | over ", dim),
        Span::styled(below.to_string(), Style::default().fg(Color::Green)),
        Span::styled(" | find ", dim),
        Span::styled(target.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ({} found)", app.found), dim),
        Span::styled(
            if app.paused { " [PAUSED]" } else { "" },
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            " | h/l:steer click:fly space:altitude [/]:region p:pause q:quit",
            dim,
        ),
    ]);

    let paragraph = Paragraph::new(status);
    frame.render_widget(paragraph, area);
}
