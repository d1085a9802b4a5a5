use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::game::{Axis, CellKind, CollisionType, Direction, GridCell, Snapshot};
use crate::metrics::GameMetrics;

/// Which pair of axes a panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Looking towards the front: x to the right, y up
    Front,
    /// Looking down: x to the right, front (-z) up
    Top,
}

impl Projection {
    pub fn project(self, x: f64, y: f64, z: f64) -> (f64, f64) {
        match self {
            Projection::Front => (x, y),
            Projection::Top => (x, -z),
        }
    }

    fn project_cell(self, cell: GridCell) -> (f64, f64) {
        self.project(cell.x as f64, cell.y as f64, cell.z as f64)
    }

    /// The axis pointing out of the screen
    fn depth_axis(self) -> Axis {
        match self {
            Projection::Front => Axis::Z,
            Projection::Top => Axis::Y,
        }
    }

    /// Where a wall plane shows up in this view, as a segment spanning the
    /// cube. A plane facing the viewer covers the whole view and yields None.
    fn wall_segment(
        self,
        normal: Direction,
        coord: i32,
        extent: f64,
    ) -> Option<((f64, f64), (f64, f64))> {
        let axis = normal.axis();
        if axis == self.depth_axis() {
            return None;
        }

        let corner = |sign: f64| {
            let mut point = [sign * extent; 3];
            let index = match axis {
                Axis::X => 0,
                Axis::Y => 1,
                Axis::Z => 2,
            };
            point[index] = coord as f64;
            self.project(point[0], point[1], point[2])
        };
        Some((corner(-1.0), corner(1.0)))
    }

    fn title(self) -> &'static str {
        match self {
            Projection::Front => " Front (x / y) ",
            Projection::Top => " Top (x / -z) ",
        }
    }
}

fn color_for(kind: CellKind) -> Color {
    match kind {
        CellKind::Body => Color::Green,
        CellKind::Target => Color::Red,
        CellKind::Boundary => Color::Blue,
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Views
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let views = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        for (projection, area) in [Projection::Front, Projection::Top].into_iter().zip(views.iter()) {
            self.render_view(frame, *area, snapshot, projection);
        }

        if !snapshot.is_alive() {
            let popup = centered(chunks[1], 40, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(snapshot, metrics), popup);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_view(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot, projection: Projection) {
        let wall = snapshot
            .boundary_planes()
            .iter()
            .fold(0, |widest, (_, coord)| widest.max(coord.abs())) as f64;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(projection.title()),
            )
            .marker(Marker::Braille)
            .x_bounds([-wall, wall])
            .y_bounds([-wall, wall])
            .paint(|ctx| self.paint(ctx, snapshot, projection, wall));

        frame.render_widget(canvas, area);
    }

    fn paint(&self, ctx: &mut Context, snapshot: &Snapshot, projection: Projection, wall: f64) {
        for (normal, coord) in snapshot.boundary_planes() {
            if let Some(((x1, y1), (x2, y2))) = projection.wall_segment(normal, coord, wall) {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: color_for(CellKind::Boundary),
                });
            }
        }

        // Tail first so the head ends up on top of anything it overlaps
        let mut cells: Vec<_> = snapshot.cells().collect();
        cells.reverse();
        for (cell, kind) in cells {
            let color = if cell == snapshot.head() && kind == CellKind::Body {
                Color::Cyan
            } else {
                color_for(kind)
            };
            ctx.draw(&Points {
                coords: &[projection.project_cell(cell)],
                color,
            });
        }

        let (start, end) = snapshot.up_indicator();
        let (x1, y1) = projection.project(start[0] as f64, start[1] as f64, start[2] as f64);
        let (x2, y2) = projection.project(end[0] as f64, end[1] as f64, end[2] as f64);
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: Color::Yellow,
        });

        let head = snapshot.head();
        let arrow = snapshot.target_indicator();
        let (x1, y1) = projection.project_cell(head);
        let (x2, y2) = projection.project(
            head.x as f64 + arrow[0] as f64,
            head.y as f64 + arrow[1] as f64,
            head.z as f64 + arrow[2] as f64,
        );
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: Color::Magenta,
        });
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let text = vec![Line::from(vec![
            label("Score: "),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            label("Length: "),
            value(snapshot.body.len().to_string()),
            Span::raw("    "),
            label("Heading: "),
            value(snapshot.heading.to_string()),
            Span::raw("    "),
            label("Up: "),
            value(snapshot.up.to_string()),
            Span::raw("    "),
            label("Time: "),
            value(metrics.format_time()),
            Span::raw("    "),
            label("Best: "),
            value(metrics.high_score.to_string()),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let cause = match snapshot.death {
            Some(CollisionType::Wall) => "You flew into the wall",
            Some(CollisionType::SelfCollision) => "You ran into yourself",
            None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "Longest: {}  Walls: {}  Self: {}",
                    metrics.longest_snake, metrics.wall_deaths, metrics.self_collisions
                ),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WS", Style::default().fg(Color::Cyan)),
            Span::raw(" pitch | "),
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("AD", Style::default().fg(Color::Cyan)),
            Span::raw(" yaw | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Simulation, TickStatus};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_projections() {
        assert_eq!(Projection::Front.project(1.0, 2.0, 3.0), (1.0, 2.0));
        assert_eq!(Projection::Top.project(1.0, 2.0, 3.0), (1.0, -3.0));
    }

    #[test]
    fn test_wall_segments() {
        let front = Projection::Front;
        assert_eq!(
            front.wall_segment(Direction::Right, 25, 25.0),
            Some(((25.0, -25.0), (25.0, 25.0)))
        );
        assert_eq!(
            front.wall_segment(Direction::Down, -25, 25.0),
            Some(((-25.0, -25.0), (25.0, -25.0)))
        );
        assert_eq!(front.wall_segment(Direction::Front, -25, 25.0), None);

        let top = Projection::Top;
        // Front wall sits at z = -25, which the top view draws at +25
        assert_eq!(
            top.wall_segment(Direction::Front, -25, 25.0),
            Some(((-25.0, 25.0), (25.0, 25.0)))
        );
        assert_eq!(top.wall_segment(Direction::Up, 25, 25.0), None);
    }

    #[test]
    fn test_each_view_draws_four_walls() {
        let sim = Simulation::new(GameConfig::new(4));
        let snapshot = sim.snapshot();
        for projection in [Projection::Front, Projection::Top] {
            let walls = snapshot
                .boundary_planes()
                .into_iter()
                .filter_map(|(normal, coord)| projection.wall_segment(normal, coord, 5.0))
                .count();
            assert_eq!(walls, 4);
        }
    }

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 20, 6);
        let popup = centered(area, 40, 9);
        assert_eq!(popup, area);

        let popup = centered(Rect::new(0, 0, 100, 30), 40, 10);
        assert_eq!(popup, Rect::new(30, 10, 40, 10));
    }

    #[test]
    fn test_render_shows_stats() {
        let sim = Simulation::new(GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        });
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &sim.snapshot(), &GameMetrics::new()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let header: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(header.contains("Heading: right"));
        assert!(header.contains("Up: up"));
    }

    #[test]
    fn test_game_over_shows_session_stats() {
        let mut sim = Simulation::new(GameConfig {
            seed: Some(9),
            ..GameConfig::new(2)
        });
        while sim.tick() == TickStatus::Continue {}

        let mut metrics = GameMetrics::new();
        metrics.on_game_over(&sim.snapshot());

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &sim.snapshot(), &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(screen.contains("GAME OVER"));
        let stats = format!("Longest: {}  Walls: 1  Self: 0", metrics.longest_snake);
        assert!(screen.contains(&stats));
    }
}
