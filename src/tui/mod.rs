//! TUI module - Terminal dashboard with ratatui

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};

use crate::store::KeyValueStore;
use crate::tracker::{ExerciseLog, MealJournal};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Nutrition,
    Progress,
}

/// App state for TUI
pub struct App<S> {
    meals: MealJournal<S>,
    logs: ExerciseLog<S>,
    view: View,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(meals: MealJournal<S>, logs: ExerciseLog<S>) -> Self {
        Self {
            meals,
            logs,
            view: View::Nutrition,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let title = match self.view {
            View::Nutrition => "fitlog - Nutrition",
            View::Progress => "fitlog - Progress",
        };
        let header = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        match self.view {
            View::Nutrition => self.render_nutrition(frame, chunks[1], chunks[2]),
            View::Progress => self.render_progress(frame, chunks[1], chunks[2]),
        }

        let footer = Paragraph::new("q: quit | tab: switch view | r: refresh")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    fn render_nutrition(&self, frame: &mut Frame, summary_area: Rect, table_area: Rect) {
        let totals = self.meals.totals().display();
        let summary = Paragraph::new(format!(
            "Calories: {} | Protein: {}g | Carbs: {}g | Fats: {}g",
            totals.calories, totals.protein, totals.carbs, totals.fats
        ))
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Totals"));
        frame.render_widget(summary, summary_area);

        let rows: Vec<Row> = self
            .meals
            .items()
            .iter()
            .map(|m| {
                Row::new(vec![
                    Cell::from(m.time.clone()),
                    Cell::from(m.name.clone()),
                    Cell::from(format!("{}", m.calories)),
                    Cell::from(format!("{}/{}/{}", m.protein, m.carbs, m.fats)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Min(24),
                Constraint::Length(8),
                Constraint::Length(20),
            ],
        )
        .header(Row::new(vec!["Time", "Meal", "kcal", "P/C/F (g)"]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Meals"));

        frame.render_widget(table, table_area);
    }

    fn render_progress(&self, frame: &mut Frame, summary_area: Rect, table_area: Rect) {
        let summary = self.logs.analytics().summary();
        let text = Paragraph::new(format!(
            "Entries: {} | Sets: {} | Reps: {} | Volume: {:.1} kg",
            summary.entries, summary.sets, summary.reps, summary.volume_kg
        ))
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Totals"));
        frame.render_widget(text, summary_area);

        let rows: Vec<Row> = self
            .logs
            .items()
            .iter()
            .map(|l| {
                Row::new(vec![
                    Cell::from(l.date.clone()),
                    Cell::from(l.workout_type.label()),
                    Cell::from(l.exercise.clone()),
                    Cell::from(format!("{}x{}", l.sets, l.reps)),
                    Cell::from(format!("{} kg", l.weight)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Min(24),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["Date", "Type", "Exercise", "Sets x Reps", "Weight"])
                .style(Style::default().bold()),
        )
        .block(Block::default().borders(Borders::ALL).title("Exercise log"));

        frame.render_widget(table, table_area);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Tab => {
                            self.view = match self.view {
                                View::Nutrition => View::Progress,
                                View::Progress => View::Nutrition,
                            };
                        }
                        KeyCode::Char('r') => {
                            self.meals.reload();
                            self.logs.reload();
                        }
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
