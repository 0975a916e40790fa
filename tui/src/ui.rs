use crate::app::{App, Mode};
use conway_lib::{CellState, Grid, Status};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    terminal::Frame,
    text::Text,
    widgets::{
        block::{Block, Title},
        Borders, Clear, Paragraph, Widget,
    },
};

impl App {
    /// Render the TUI interface.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());

        self.render_top_bar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
        self.render_bottom_bar(frame, chunks[2]);

        // Show the popup window if needed.
        match self.mode {
            Mode::Usage => self.render_help(frame, chunks[1]),
            Mode::Quit => self.render_quit(frame, chunks[1]),
            _ => {}
        }
    }

    /// Render the top bar.
    ///
    /// This includes the current generation, the population, and the boundary policy.
    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([40, 30, 30]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let generation_str = match self.config.max_generations {
            Some(max) => format!("Generation: {}/{}", self.simulation.generation(), max),
            None => format!("Generation: {}", self.simulation.generation()),
        };
        let generation = Paragraph::new(generation_str).style(style);
        frame.render_widget(generation, chunks[0]);

        let population =
            Paragraph::new(format!("Population: {}", self.simulation.population())).style(style);
        frame.render_widget(population, chunks[1]);

        let boundary =
            Paragraph::new(format!("Boundary: {}", self.simulation.boundary())).style(style);
        frame.render_widget(boundary, chunks[2]);
    }

    /// Render the bottom bar.
    ///
    /// This includes the current status, mode, and a short help message.
    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let status_str = match self.simulation.status() {
            Status::Running => {
                if self.mode == Mode::Running {
                    "Running...".to_string()
                } else if self.reached_limit() {
                    "Generation limit reached.".to_string()
                } else {
                    "Paused.".to_string()
                }
            }
            Status::Extinct => "All cells are dead.".to_string(),
            Status::StillLife => "Reached a still life.".to_string(),
            Status::Oscillating { period } => format!("Oscillating with period {period}."),
        };

        let status = Paragraph::new(status_str).style(style);
        frame.render_widget(status, chunks[0]);

        let help = Paragraph::new("Press [h] for help.").style(style);
        frame.render_widget(help, chunks[1]);
    }

    /// Render the main area.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let cells = Cells::new(self.simulation.grid());
        frame.render_widget(cells, area);
    }

    /// Render a popup window with some text.
    fn render_popup<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        text: impl Into<Text<'a>>,
        title: impl Into<Title<'a>>,
        style: Style,
    ) {
        let text = text.into();

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let width = area.width.min(text.width() as u16 + 2);
        let height = area.height.min(text.height() as u16 + 2);

        let rect = Rect::new(center_x - width / 2, center_y - height / 2, width, height);

        frame.render_widget(Clear, rect);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);

        frame.render_widget(paragraph, rect);
    }

    /// Render the popup window to show the help message.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "[q]/[Esc]       Quit\n\
             [h]             Show or hide this help message\n\
             [Space]/[Enter] Start or pause the simulation\n\
             [n]/[.]         Advance one generation while paused\n\
             [r]             Restart from the initial grid",
            "Help",
            Style::new().green(),
        );
    }

    /// Render the popup window to ask the user to confirm quitting.
    fn render_quit(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "Are you sure you want to quit? ([y]/[n])",
            "Quit",
            Style::new().yellow(),
        );
    }
}

/// A widget to show the cells of the current generation.
///
/// Cells that do not fit in the area are not shown.
#[derive(Debug)]
struct Cells<'a> {
    /// The current generation.
    grid: &'a Grid,
}

impl<'a> Cells<'a> {
    /// Create a new widget from a grid.
    const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Widget for Cells<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let h = self.grid.height().min(area.height as usize);

        for y in 0..h {
            let Some(row) = self.grid.row(y) else {
                break;
            };
            let buf_y = area.y + y as u16;

            for (x, state) in row.iter().take(area.width as usize).enumerate() {
                let buf_x = area.x + x as u16;
                let style = match state {
                    CellState::Alive => Style::new().green(),
                    CellState::Dead => Style::new().dark_gray(),
                };
                buf.get_mut(buf_x, buf_y)
                    .set_char(state.glyph())
                    .set_style(style);
            }
        }
    }
}
