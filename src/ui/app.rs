use crate::chat::{Answer, Orchestrator};
use crate::model::{ElementCategory, ModelTables, TableRow};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Browse,
    Asking,
}

/// What the answer panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Thinking(String),
    Answered { question: String, answer: Answer },
    Failed { question: String, message: String },
}

/// Headers and rendered cells of one category table.
pub struct TableView {
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    fn of<R: TableRow>(records: &[R]) -> Self {
        Self {
            headers: R::HEADERS,
            rows: records.iter().map(TableRow::cells).collect(),
        }
    }
}

pub struct App<'a> {
    pub tables: &'a ModelTables,
    pub orchestrator: Option<Orchestrator<'a>>,
    pub mode: Mode,
    pub selected_category: usize,
    pub selected_row: usize,
    pub input: String,
    pub reply: Option<Reply>,
    pending_question: Option<String>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(tables: &'a ModelTables) -> Self {
        Self {
            tables,
            orchestrator: None,
            mode: Mode::Browse,
            selected_category: 0,
            selected_row: 0,
            input: String::new(),
            reply: None,
            pending_question: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_orchestrator(mut self, orchestrator: Orchestrator<'a>) -> Self {
        self.orchestrator = Some(orchestrator);
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            // the chat call blocks; the "thinking" frame is already on screen
            if let Some(question) = self.pending_question.take() {
                self.answer(question);
                continue;
            }
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.mode {
                Mode::Browse => self.handle_browse_keys(key.code),
                Mode::Asking => self.handle_prompt_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_browse_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.previous_category(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_category(),
            KeyCode::Char('/' | '?') => self.mode = Mode::Asking,
            _ => {}
        }
    }

    fn handle_prompt_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.submit_question(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn submit_question(&mut self) {
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return;
        }
        self.input.clear();
        self.mode = Mode::Browse;
        self.reply = Some(Reply::Thinking(question.clone()));
        self.pending_question = Some(question);
    }

    fn answer(&mut self, question: String) {
        let Some(orchestrator) = &self.orchestrator else {
            self.reply = Some(Reply::Failed {
                question,
                message: "No chat model configured.".to_string(),
            });
            return;
        };

        self.reply = Some(match orchestrator.ask(&question) {
            Ok(answer) => Reply::Answered { question, answer },
            Err(e) => {
                warn!("Chat failed: {e}");
                Reply::Failed {
                    question,
                    message: e.to_string(),
                }
            }
        });
    }

    #[must_use]
    pub fn selected(&self) -> ElementCategory {
        ElementCategory::ALL[self.selected_category]
    }

    #[must_use]
    pub fn table_view(&self, category: ElementCategory) -> TableView {
        match category {
            ElementCategory::Door => TableView::of(&self.tables.doors),
            ElementCategory::Window => TableView::of(&self.tables.windows),
            ElementCategory::Beam => TableView::of(&self.tables.beams),
            ElementCategory::Column => TableView::of(&self.tables.columns),
            ElementCategory::Space => TableView::of(&self.tables.spaces),
            ElementCategory::Floor => TableView::of(&self.tables.floors),
        }
    }

    fn previous_category(&mut self) {
        self.selected_category = if self.selected_category == 0 {
            ElementCategory::ALL.len() - 1
        } else {
            self.selected_category - 1
        };
        self.selected_row = 0;
    }

    fn next_category(&mut self) {
        self.selected_category = (self.selected_category + 1) % ElementCategory::ALL.len();
        self.selected_row = 0;
    }

    fn previous_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn next_row(&mut self) {
        let count = self.tables.count(self.selected());
        if self.selected_row < count.saturating_sub(1) {
            self.selected_row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FloorRecord;
    use pretty_assertions::assert_eq;

    fn tables() -> ModelTables {
        let floor = |name: &str| FloorRecord {
            name: name.to_string(),
            elevation: None,
        };
        ModelTables {
            floors: vec![floor("Ground"), floor("Level 1")],
            ..ModelTables::default()
        }
    }

    #[test]
    fn categories_wrap_around() {
        let tables = tables();
        let mut app = App::new(&tables);
        app.handle_browse_keys(KeyCode::Left);
        assert_eq!(app.selected(), ElementCategory::Floor);
        app.handle_browse_keys(KeyCode::Tab);
        assert_eq!(app.selected(), ElementCategory::Door);
    }

    #[test]
    fn rows_stay_in_bounds() {
        let tables = tables();
        let mut app = App::new(&tables);
        app.handle_browse_keys(KeyCode::BackTab);
        for _ in 0..5 {
            app.handle_browse_keys(KeyCode::Down);
        }
        assert_eq!(app.selected_row, 1);

        let view = app.table_view(ElementCategory::Floor);
        assert_eq!(view.headers, ["Name", "Elevation"]);
        assert_eq!(view.rows[1], vec!["Level 1", "Unknown"]);
    }

    #[test]
    fn question_without_model_reports_failure() {
        let tables = tables();
        let mut app = App::new(&tables);
        app.handle_browse_keys(KeyCode::Char('/'));
        for c in "hi".chars() {
            app.handle_prompt_keys(KeyCode::Char(c));
        }
        app.handle_prompt_keys(KeyCode::Enter);
        assert_eq!(app.reply, Some(Reply::Thinking("hi".to_string())));
        assert_eq!(app.mode, Mode::Browse);

        let question = app.pending_question.take().unwrap();
        app.answer(question);
        assert!(matches!(app.reply, Some(Reply::Failed { .. })));
    }
}
