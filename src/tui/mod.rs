mod ui;
mod widgets;

use std::error::Error;
use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::board::Board;
use crate::hint::{hint_or_fallback, HintProvider};
use crate::models::{Course, Level, Question, Template, UserProgress};
use crate::progress::{self, is_unlocked};
use crate::session::Session;
use crate::store::ProgressStore;

/// Top-level view of the application. `About` is reachable in the type but
/// currently has no entry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Path,
    Question,
    ComingSoon,
    Onboarding,
    #[allow(dead_code)]
    About,
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

/// One page of the onboarding questionnaire.
pub struct OnboardingStep {
    pub key: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

pub const ONBOARDING_STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        key: "goal",
        title: "Hello! I am Sage.",
        question: "What brings you to Mathtrail?",
        options: &[
            ("Help with school", "school"),
            ("Sharper logical thinking", "logic"),
            ("Geometry and patterns", "visual"),
            ("Plain curiosity", "curiosity"),
        ],
    },
    OnboardingStep {
        key: "time",
        title: "Your time is precious.",
        question: "How many minutes a day can you practice?",
        options: &[("5 minutes", "5"), ("15 minutes", "15"), ("30 minutes", "30")],
    },
    OnboardingStep {
        key: "level",
        title: "Let us find your level.",
        question: "How do you and math get along?",
        options: &[
            ("Still learning", "beginner"),
            ("Okay, I follow it", "medium"),
            ("It comes easily", "expert"),
        ],
    },
];

pub struct App {
    store: Box<dyn ProgressStore>,
    hints: Box<dyn HintProvider>,
    pub courses: Vec<Course>,
    pub progress: UserProgress,
    pub view: View,
    pub course_list: StatefulList<usize>,
    pub path_list: StatefulList<usize>,
    pub active_course: Option<usize>,
    pub active_level: Option<usize>,
    pub step_idx: usize,
    pub question_idx: usize,
    pub session: Session,
    pub board: Option<Board>,
    pub cursor: (i32, i32),
    pub mascot_line: Option<String>,
    pub show_streak: bool,
    pub onboarding_step: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        store: Box<dyn ProgressStore>,
        hints: Box<dyn HintProvider>,
        courses: Vec<Course>,
    ) -> Result<Self, Box<dyn Error>> {
        let progress = store.load()?.unwrap_or_default();
        // Onboarding overrides any other requested view until done.
        let view = if progress.onboarding_done {
            View::Home
        } else {
            View::Onboarding
        };
        let course_count = courses.len();

        Ok(Self {
            store,
            hints,
            courses,
            progress,
            view,
            course_list: StatefulList::with_items((0..course_count).collect()),
            path_list: StatefulList::with_items(Vec::new()),
            active_course: None,
            active_level: None,
            step_idx: 0,
            question_idx: 0,
            session: Session::new(),
            board: None,
            cursor: (0, 0),
            mascot_line: None,
            show_streak: false,
            onboarding_step: 0,
            should_quit: false,
        })
    }

    pub fn active_course(&self) -> Option<&Course> {
        self.active_course.and_then(|i| self.courses.get(i))
    }

    pub fn current_level(&self) -> Option<&Level> {
        let course = self.active_course()?;
        let idx = self.active_level?;
        course.flattened_levels().get(idx).copied()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_level()?
            .steps
            .get(self.step_idx)?
            .questions
            .get(self.question_idx)
    }

    fn current_template(&self) -> Option<Template> {
        self.current_question().and_then(|q| q.template.clone())
    }

    /// Overall question position within the level, for the progress gauge.
    pub fn question_position(&self) -> (usize, usize) {
        let Some(level) = self.current_level() else {
            return (0, 0);
        };
        let before: usize = level
            .steps
            .iter()
            .take(self.step_idx)
            .map(|s| s.questions.len())
            .sum();
        (before + self.question_idx, level.question_count())
    }

    fn persist(&self) -> Result<(), Box<dyn Error>> {
        self.store.save(&self.progress)?;
        Ok(())
    }

    // --- transitions -----------------------------------------------------

    pub fn select_course(&mut self) {
        let Some(&idx) = self.course_list.selected_item() else {
            return;
        };
        let Some(course) = self.courses.get(idx) else {
            return;
        };
        if course.coming_soon {
            self.view = View::ComingSoon;
            return;
        }
        let level_count = course.level_count();
        self.active_course = Some(idx);
        self.path_list = StatefulList::with_items((0..level_count).collect());
        self.view = View::Path;
    }

    /// Enter the selected level if the lock policy allows it. Locked levels
    /// never reach the controller transition.
    pub fn select_level(&mut self) {
        let Some(&idx) = self.path_list.selected_item() else {
            return;
        };
        let Some(course) = self.active_course() else {
            return;
        };
        let levels = course.flattened_levels();
        let Some(level) = levels.get(idx) else {
            return;
        };
        if !is_unlocked(level.id, &levels, &self.progress) {
            return;
        }
        self.active_level = Some(idx);
        self.step_idx = 0;
        self.question_idx = 0;
        self.reset_question_state();
        self.view = View::Question;
    }

    fn reset_question_state(&mut self) {
        self.session = Session::new();
        self.board = self.current_template().as_ref().map(Board::new);
        self.cursor = (0, 0);
        self.mascot_line = None;
    }

    /// Re-evaluate the board and report synchronously to the session, the
    /// board-to-session contract.
    fn board_changed(&mut self) {
        let Some(template) = self.current_template() else {
            return;
        };
        if let Some(board) = &self.board {
            let report = board.evaluate(&template);
            self.session.report_discovery(report.success);
        }
    }

    fn submit(&mut self) {
        let Some(question) = self.current_question().cloned() else {
            return;
        };
        self.session.submit(&question);
    }

    /// Advance after a correct verdict: next question, next step, or finish
    /// the level and return to the path.
    pub fn advance_after_correct(&mut self, today: NaiveDate) -> Result<(), Box<dyn Error>> {
        let Some(level) = self.current_level() else {
            return Ok(());
        };
        let level_id = level.id;
        let step_count = level.steps.len();
        let question_count = level.steps[self.step_idx].questions.len();

        if self.question_idx + 1 < question_count {
            self.question_idx += 1;
            progress::award_question(&mut self.progress);
            self.persist()?;
            self.reset_question_state();
        } else if self.step_idx + 1 < step_count {
            self.step_idx += 1;
            self.question_idx = 0;
            progress::award_step(&mut self.progress);
            self.persist()?;
            self.reset_question_state();
        } else {
            let result = progress::complete_level(&mut self.progress, level_id, today);
            self.persist()?;
            if result.streak_milestone {
                self.show_streak = true;
            }
            self.view = View::Path;
            self.active_level = None;
            self.session = Session::new();
            self.board = None;
        }
        Ok(())
    }

    /// Answer the current onboarding page; the final answer stores the
    /// preference snapshot and releases the Home view.
    pub fn answer_onboarding(&mut self, option_idx: usize) -> Result<(), Box<dyn Error>> {
        let step = &ONBOARDING_STEPS[self.onboarding_step];
        let Some(&(_, value)) = step.options.get(option_idx) else {
            return Ok(());
        };
        self.progress
            .preferences
            .insert(step.key.to_string(), value.to_string());

        if self.onboarding_step + 1 < ONBOARDING_STEPS.len() {
            self.onboarding_step += 1;
        } else {
            self.progress.onboarding_done = true;
            self.persist()?;
            self.view = View::Home;
        }
        Ok(())
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.active_course = None;
        self.active_level = None;
    }

    fn request_hint(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let context = self
            .active_course()
            .map(|c| c.title)
            .unwrap_or("mathematics");
        self.mascot_line = Some(hint_or_fallback(
            self.hints.as_ref(),
            question.prompt,
            context,
        ));
    }

    // --- key handling ----------------------------------------------------

    fn handle_key(&mut self, key: KeyCode) -> Result<(), Box<dyn Error>> {
        // The streak overlay eats the next key.
        if self.show_streak {
            self.show_streak = false;
            return Ok(());
        }

        if self.view == View::Onboarding {
            if let KeyCode::Char(c) = key {
                if let Some(d) = c.to_digit(10) {
                    if d >= 1 {
                        self.answer_onboarding((d - 1) as usize)?;
                    }
                }
            }
            return Ok(());
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Home => {
                self.go_home();
                return Ok(());
            }
            _ => {}
        }

        match self.view {
            View::Home => match key {
                KeyCode::Char('j') | KeyCode::Down => self.course_list.next(),
                KeyCode::Char('k') | KeyCode::Up => self.course_list.previous(),
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.select_course(),
                _ => {}
            },
            View::Path => match key {
                KeyCode::Char('j') | KeyCode::Down => self.path_list.next(),
                KeyCode::Char('k') | KeyCode::Up => self.path_list.previous(),
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.select_level(),
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => self.go_home(),
                _ => {}
            },
            View::Question => self.handle_question_key(key)?,
            View::ComingSoon => match key {
                KeyCode::Esc | KeyCode::Enter => self.go_home(),
                _ => {}
            },
            View::Onboarding | View::About => {}
        }
        Ok(())
    }

    fn handle_question_key(&mut self, key: KeyCode) -> Result<(), Box<dyn Error>> {
        if self.session.is_complete() {
            if key == KeyCode::Enter {
                self.advance_after_correct(Local::now().date_naive())?;
            }
            return Ok(());
        }

        match key {
            KeyCode::Esc => {
                // Abandon the question; its transient state is discarded.
                self.view = View::Path;
                self.active_level = None;
                self.session = Session::new();
                self.board = None;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as u8 - b'1') as usize;
                if let Some(question) = self.current_question().cloned() {
                    self.session.select_option(&question, idx);
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('?') => self.request_hint(),
            KeyCode::Char('x') => {
                if let Some(board) = &mut self.board {
                    board.reset();
                    self.session = Session::new();
                }
            }
            _ => self.handle_board_key(key),
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        let Some(template) = self.current_template() else {
            return;
        };
        let Some(board) = &mut self.board else {
            return;
        };
        let grid = board.grid_size();

        let mut changed = true;
        match (&template, key) {
            (Template::Rotate { .. }, KeyCode::Char('r') | KeyCode::Right) => board.rotate(90),
            (Template::Rotate { .. }, KeyCode::Char('R') | KeyCode::Left) => board.rotate(-90),
            (Template::Match { .. }, KeyCode::Char('h') | KeyCode::Left) => board.nudge(-1, 0),
            (Template::Match { .. }, KeyCode::Char('l') | KeyCode::Right) => board.nudge(1, 0),
            (Template::Match { .. }, KeyCode::Char('k') | KeyCode::Up) => board.nudge(0, -1),
            (Template::Match { .. }, KeyCode::Char('j') | KeyCode::Down) => board.nudge(0, 1),
            (Template::Measure { .. }, KeyCode::Char(' ')) => board.touch(),
            (
                Template::Mirror { .. } | Template::Build { .. } | Template::Measure { .. },
                KeyCode::Char('h') | KeyCode::Left,
            ) => {
                self.cursor.0 = (self.cursor.0 - 1).max(0);
                changed = false;
            }
            (
                Template::Mirror { .. } | Template::Build { .. } | Template::Measure { .. },
                KeyCode::Char('l') | KeyCode::Right,
            ) => {
                self.cursor.0 = (self.cursor.0 + 1).min(grid - 1);
                changed = false;
            }
            (
                Template::Mirror { .. } | Template::Build { .. } | Template::Measure { .. },
                KeyCode::Char('k') | KeyCode::Up,
            ) => {
                self.cursor.1 = (self.cursor.1 - 1).max(0);
                changed = false;
            }
            (
                Template::Mirror { .. } | Template::Build { .. } | Template::Measure { .. },
                KeyCode::Char('j') | KeyCode::Down,
            ) => {
                self.cursor.1 = (self.cursor.1 + 1).min(grid - 1);
                changed = false;
            }
            (Template::Mirror { .. } | Template::Build { .. }, KeyCode::Char(' ')) => {
                board.toggle_point(self.cursor.0, self.cursor.1)
            }
            _ => changed = false,
        }

        if changed {
            self.board_changed();
        }
    }
}

pub fn run(
    store: Box<dyn ProgressStore>,
    hints: Box<dyn HintProvider>,
    courses: Vec<Course>,
) -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, hints, courses)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::hint::MascotHints;
    use crate::models::{Module, Step, StepKind, World};
    use crate::store::StoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory store so controller tests can observe every persisted write.
    #[derive(Clone, Default)]
    struct MemStore {
        record: Rc<RefCell<Option<UserProgress>>>,
        saves: Rc<RefCell<usize>>,
    }

    impl ProgressStore for MemStore {
        fn load(&self) -> Result<Option<UserProgress>, StoreError> {
            Ok(self.record.borrow().clone())
        }

        fn save(&self, progress: &UserProgress) -> Result<(), StoreError> {
            *self.record.borrow_mut() = Some(progress.clone());
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn onboarded_store() -> MemStore {
        let store = MemStore::default();
        let progress = UserProgress {
            onboarding_done: true,
            ..Default::default()
        };
        *store.record.borrow_mut() = Some(progress);
        store
    }

    fn app_with(store: MemStore) -> App {
        App::new(Box::new(store), Box::new(MascotHints), catalog::courses()).unwrap()
    }

    /// One course, one level, two steps: the first step carries two
    /// questions so the intra-level advance branches are reachable.
    fn fixture_courses() -> Vec<Course> {
        vec![Course {
            id: "fix",
            title: "Fixture",
            description: "d",
            icon: "#",
            coming_soon: false,
            worlds: vec![World {
                id: "w1",
                title: "W",
                icon: "#",
                modules: vec![Module {
                    id: "m1",
                    title: "M",
                    levels: vec![Level {
                        id: "fix-l1",
                        title: "L",
                        steps: vec![
                            Step {
                                id: "s1",
                                kind: StepKind::Explore,
                                questions: vec![
                                    Question::choice("q1", "p1", vec!["a", "b"], 0, "e"),
                                    Question::discovery(
                                        "q2",
                                        "p2",
                                        Template::Measure { grid_size: 6 },
                                        "e",
                                    ),
                                ],
                            },
                            Step {
                                id: "s2",
                                kind: StepKind::Quiz,
                                questions: vec![Question::choice(
                                    "q3",
                                    "p3",
                                    vec!["a", "b"],
                                    1,
                                    "e",
                                )],
                            },
                        ],
                    }],
                }],
            }],
        }]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    /// Answer the current question correctly and continue.
    fn solve_current(app: &mut App) {
        let question = app.current_question().cloned().expect("a question");
        if question.scored_by_options() {
            app.session
                .select_option(&question, question.correct.unwrap());
        } else {
            app.session.report_discovery(true);
        }
        app.session.submit(&question);
        assert!(app.session.is_complete());
        app.advance_after_correct(today()).unwrap();
    }

    mod startup_tests {
        use super::*;

        #[test]
        fn fresh_start_forces_onboarding() {
            let app = app_with(MemStore::default());
            assert_eq!(app.view, View::Onboarding);
        }

        #[test]
        fn onboarded_user_starts_at_home() {
            let app = app_with(onboarded_store());
            assert_eq!(app.view, View::Home);
        }

        #[test]
        fn onboarding_answers_are_captured_and_released_to_home() {
            let store = MemStore::default();
            let mut app = app_with(store.clone());

            app.answer_onboarding(1).unwrap(); // goal: logic
            app.answer_onboarding(0).unwrap(); // time: 5
            app.answer_onboarding(2).unwrap(); // level: expert

            assert_eq!(app.view, View::Home);
            assert!(app.progress.onboarding_done);
            assert_eq!(
                app.progress.preferences.get("goal"),
                Some(&"logic".to_string())
            );
            let saved = store.record.borrow().clone().unwrap();
            assert!(saved.onboarding_done);
        }

        #[test]
        fn out_of_range_onboarding_answer_is_ignored() {
            let mut app = app_with(MemStore::default());
            app.answer_onboarding(9).unwrap();
            assert_eq!(app.onboarding_step, 0);
            assert_eq!(app.view, View::Onboarding);
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn selecting_a_course_opens_its_path() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            assert_eq!(app.view, View::Path);
            assert_eq!(app.active_course().unwrap().id, "arithmetic");
        }

        #[test]
        fn coming_soon_course_shows_placeholder() {
            let mut app = app_with(onboarded_store());
            let cs_idx = app.courses.iter().position(|c| c.coming_soon).unwrap();
            app.course_list.selected = Some(cs_idx);
            app.select_course();
            assert_eq!(app.view, View::ComingSoon);
            assert!(app.active_course.is_none());
        }

        #[test]
        fn first_level_is_enterable() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            app.select_level();
            assert_eq!(app.view, View::Question);
            assert_eq!(app.current_level().unwrap().id, "ari-l1");
        }

        #[test]
        fn locked_level_selection_is_rejected() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            app.path_list.selected = Some(3);
            app.select_level();
            assert_eq!(app.view, View::Path);
            assert!(app.active_level.is_none());
        }

        #[test]
        fn go_home_clears_active_state() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            app.select_level();
            app.go_home();
            assert_eq!(app.view, View::Home);
            assert!(app.active_course.is_none());
            assert!(app.active_level.is_none());
        }
    }

    mod advance_tests {
        use super::*;

        #[test]
        fn finishing_the_only_question_completes_the_level() {
            let store = onboarded_store();
            let mut app = app_with(store.clone());
            app.select_course();
            app.select_level();
            solve_current(&mut app);

            assert_eq!(app.view, View::Path);
            assert!(app.active_level.is_none());
            assert!(app.progress.is_completed("ari-l1"));
            assert_eq!(app.progress.score, 50);
            assert!(app.show_streak);

            let saved = store.record.borrow().clone().unwrap();
            assert!(saved.is_completed("ari-l1"));
        }

        #[test]
        fn completing_a_level_unlocks_the_next_one() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            app.select_level();
            solve_current(&mut app);

            app.path_list.selected = Some(1);
            app.select_level();
            assert_eq!(app.view, View::Question);
            assert_eq!(app.current_level().unwrap().id, "ari-l2");
        }

        #[test]
        fn question_state_is_fresh_after_reentry() {
            let mut app = app_with(onboarded_store());
            app.select_course();
            app.select_level();

            let question = app.current_question().cloned().unwrap();
            app.session.report_discovery(false);
            assert!(app.session.can_submit(&question));

            // Leave and come back; the session must be rebuilt.
            app.view = View::Path;
            app.select_level();
            assert!(!app.session.can_submit(&question));
        }

        #[test]
        fn repeat_completion_does_not_duplicate_or_reanimate() {
            let store = onboarded_store();
            let mut app = app_with(store.clone());
            app.select_course();
            app.select_level();
            solve_current(&mut app);
            app.show_streak = false;

            // Replay the same level on the same day.
            app.path_list.selected = Some(0);
            app.select_level();
            solve_current(&mut app);

            assert_eq!(app.progress.completed_levels.len(), 1);
            assert_eq!(app.progress.score, 55);
            assert!(!app.show_streak);
        }

        #[test]
        fn question_advance_rewards_and_rebuilds_without_completing() {
            let store = onboarded_store();
            let mut app = App::new(
                Box::new(store.clone()),
                Box::new(MascotHints),
                fixture_courses(),
            )
            .unwrap();
            app.select_course();
            app.select_level();
            assert_eq!(app.question_position(), (0, 3));

            // First question of the first step: advancing stays in the level.
            solve_current(&mut app);
            assert_eq!(app.view, View::Question);
            assert_eq!(app.step_idx, 0);
            assert_eq!(app.question_idx, 1);
            assert_eq!(app.progress.score, 10);
            assert!(app.progress.completed_levels.is_empty());
            assert_eq!(app.progress.streak, 0);
            assert!(app.progress.last_completion_date.is_none());

            // The session and board are rebuilt for the new question.
            assert!(!app.session.is_complete());
            assert!(app.session.selected().is_none());
            assert!(app.board.is_some());

            let saved = store.record.borrow().clone().unwrap();
            assert_eq!(saved.score, 10);
        }

        #[test]
        fn step_advance_rewards_and_rebuilds_without_completing() {
            let store = onboarded_store();
            let mut app = App::new(
                Box::new(store.clone()),
                Box::new(MascotHints),
                fixture_courses(),
            )
            .unwrap();
            app.select_course();
            app.select_level();
            solve_current(&mut app);

            // Last question of the first step: advancing moves to step two.
            solve_current(&mut app);
            assert_eq!(app.view, View::Question);
            assert_eq!(app.step_idx, 1);
            assert_eq!(app.question_idx, 0);
            assert_eq!(app.progress.score, 30);
            assert!(app.progress.completed_levels.is_empty());
            assert!(app.progress.last_completion_date.is_none());

            // The quiz question has no board attached.
            assert!(!app.session.is_complete());
            assert!(app.board.is_none());

            let saved = store.record.borrow().clone().unwrap();
            assert_eq!(saved.score, 30);

            // The final question closes out the whole level.
            solve_current(&mut app);
            assert_eq!(app.view, View::Path);
            assert!(app.progress.is_completed("fix-l1"));
            assert_eq!(app.progress.score, 80);
            assert_eq!(app.progress.streak, 1);
        }

        #[test]
        fn every_transition_is_persisted() {
            let store = onboarded_store();
            let mut app = app_with(store.clone());
            app.select_course();
            app.select_level();
            let before = *store.saves.borrow();
            solve_current(&mut app);
            assert!(*store.saves.borrow() > before);
        }
    }

    mod board_wiring_tests {
        use super::*;

        fn open_geometry_mirror(app: &mut App) {
            let geo_idx = app.courses.iter().position(|c| c.id == "geometry").unwrap();
            app.course_list.selected = Some(geo_idx);
            app.select_course();
            app.select_level();
            assert_eq!(app.current_level().unwrap().id, "geo-l1");
        }

        #[test]
        fn board_is_created_for_discovery_questions() {
            let mut app = app_with(onboarded_store());
            open_geometry_mirror(&mut app);
            assert!(app.board.is_some());
        }

        #[test]
        fn toggling_cells_reports_to_the_session() {
            let mut app = app_with(onboarded_store());
            open_geometry_mirror(&mut app);
            let question = app.current_question().cloned().unwrap();

            // Solve the mirror: source {(0,1),(1,2),(2,1)} on a 6-wide grid.
            for (x, y) in [(5, 1), (4, 2), (3, 1)] {
                app.cursor = (x, y);
                app.handle_board_key(KeyCode::Char(' '));
            }
            assert!(app.session.can_submit(&question));
            app.session.submit(&question);
            assert!(app.session.is_complete());
        }

        #[test]
        fn board_reset_requires_fresh_interaction() {
            let mut app = app_with(onboarded_store());
            open_geometry_mirror(&mut app);
            let question = app.current_question().cloned().unwrap();

            app.handle_board_key(KeyCode::Char(' '));
            assert!(app.session.can_submit(&question));

            app.handle_question_key(KeyCode::Char('x')).unwrap();
            assert!(!app.session.can_submit(&question));
            assert!(app.board.as_ref().unwrap().points().is_empty());
        }

        #[test]
        fn hint_request_fills_the_speech_bubble() {
            let mut app = app_with(onboarded_store());
            open_geometry_mirror(&mut app);
            app.handle_question_key(KeyCode::Char('?')).unwrap();
            assert!(app.mascot_line.is_some());
        }
    }
}
