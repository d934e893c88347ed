//! Interactive menu session
//!
//! The session owns the course store for its lifetime and threads it, the
//! configuration and the prompter explicitly into every action.

use crate::commands::listing::{self, Filter};
use crate::commands::shift;
use crate::display;
use crate::prompt::Prompter;
use curriculum_monitor::config::Config;
use curriculum_monitor::core::parser::csv_parser::DELIMITER;
use curriculum_monitor::core::parser::load_courses;
use curriculum_monitor::core::report::write_copies;
use curriculum_monitor::core::{CourseStore, SortOrder};
use curriculum_monitor::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "\
[------------------------------------------------]
  Curriculum Monitoring program
  1: Show courses for each term (w/o-Grades)
  2: Show courses for each term (w-Grades)
  3: Show elective courses
  4: Show failed courses
  5: Enter grades for finished courses
  6: Edit a course
  7: Shift from another program
  8: Save changes
  9: Quit
[------------------------------------------------]
";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Term-by-term listing without grades
    ShowCourses,
    /// Term-by-term listing with grades and sorted orders
    ShowGrades,
    /// Elective listing with an edit loop
    Electives,
    /// Failed course listing
    Failed,
    /// Grade entry for an ungraded course
    EnterGrade,
    /// Rename a course
    EditCourse,
    /// Reconcile courses from another program
    Shift,
    /// Write copies after confirmation
    Save,
    /// Leave the session
    Quit,
}

impl TryFrom<u8> for MenuChoice {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ShowCourses,
            2 => Self::ShowGrades,
            3 => Self::Electives,
            4 => Self::Failed,
            5 => Self::EnterGrade,
            6 => Self::EditCourse,
            7 => Self::Shift,
            8 => Self::Save,
            9 => Self::Quit,
            other => return Err(other),
        })
    }
}

impl MenuChoice {
    /// Whether the menu waits for enter before showing itself again
    ///
    /// The electives loop ends on its own prompt; an edit goes straight back.
    #[must_use]
    pub const fn pauses_after(self) -> bool {
        !matches!(self, Self::Electives | Self::EditCourse | Self::Quit)
    }
}

/// Interactive session state
pub struct Session<'a, R, W> {
    store: CourseStore,
    config: &'a Config,
    prompter: Prompter<R, W>,
}

/// Run the interactive session on stdin/stdout
pub fn run(store: CourseStore, config: &Config) {
    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut session = Session::new(store, config, Prompter::new(stdin, stdout));

    match session.run() {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            info!("Input closed, leaving session");
        }
        Err(e) => {
            error!("Session aborted: {e}");
            eprintln!("✗ Session aborted: {e}");
        }
    }
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session over a loaded store
    pub const fn new(store: CourseStore, config: &'a Config, prompter: Prompter<R, W>) -> Self {
        Self {
            store,
            config,
            prompter,
        }
    }

    /// The store in its current state
    #[cfg(test)]
    pub const fn store(&self) -> &CourseStore {
        &self.store
    }

    /// Show the menu and dispatch choices until the user quits
    ///
    /// # Errors
    /// Returns an I/O error from the console, including `UnexpectedEof`
    /// when the input closes.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.prompter.out(), "Welcome to the Curriculum Monitoring program!")?;
        writeln!(self.prompter.out(), "See menu below for the possible options\n")?;

        loop {
            write!(self.prompter.out(), "{MENU}")?;
            let number = self.prompter.ask_in_range("Select an item: ", 1..=9)?;
            let Ok(choice) = MenuChoice::try_from(number) else {
                continue;
            };
            debug!("Menu choice: {choice:?}");

            if choice == MenuChoice::Quit {
                return Ok(());
            }
            self.dispatch(choice)?;
            if choice.pauses_after() {
                self.prompter
                    .pause("Press enter key to choose another item.")?;
            }
            writeln!(self.prompter.out())?;
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::ShowCourses => self.show_terms(false),
            MenuChoice::ShowGrades => self.show_grades(),
            MenuChoice::Electives => self.manage_electives(),
            MenuChoice::Failed => {
                listing::run_filter(self.prompter.out(), &self.store, Filter::Failed)
            }
            MenuChoice::EnterGrade => self.enter_grade(),
            MenuChoice::EditCourse => {
                self.show_terms(false)?;
                self.edit_course()
            }
            MenuChoice::Shift => self.shift(),
            MenuChoice::Save => self.save(),
            MenuChoice::Quit => Ok(()),
        }
    }

    fn show_terms(&mut self, with_grades: bool) -> io::Result<()> {
        display::title(self.prompter.out(), "COURSES")?;
        let terms: Vec<(u8, u8)> = self.store.terms().collect();
        for (year, term) in terms {
            let courses = self.store.in_term(year, term);
            display::term_block(self.prompter.out(), year, term, &courses, with_grades)?;
            writeln!(self.prompter.out())?;
            self.prompter
                .pause("Press enter key to see courses for the next term...")?;
        }
        Ok(())
    }

    fn show_grades(&mut self) -> io::Result<()> {
        self.show_terms(true)?;
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            self.prompter
                .pause(&format!("Press enter key to see grades in {order} order..."))?;
            listing::sorted_listing(self.prompter.out(), &self.store, order)?;
        }
        Ok(())
    }

    fn manage_electives(&mut self) -> io::Result<()> {
        loop {
            listing::run_filter(self.prompter.out(), &self.store, Filter::Electives)?;
            writeln!(self.prompter.out(), "What would you like to do?\n")?;
            writeln!(self.prompter.out(), "1. Manage an elective course.")?;
            writeln!(self.prompter.out(), "2. Return to the main menu.\n")?;

            match self.prompter.ask_in_range("Select an item: ", 1..=2)? {
                1 => self.edit_course()?,
                _ => return Ok(()),
            }
        }
    }

    /// Ask for course codes until one exists in the store
    fn ask_existing_code(&mut self, message: &str) -> io::Result<String> {
        loop {
            let code = self.prompter.ask(message)?;
            let code = code.trim();
            if let Some(course) = self.store.lookup(code) {
                return Ok(course.code.clone());
            }
            writeln!(
                self.prompter.out(),
                "Invalid Course Number inputted. Try again."
            )?;
        }
    }

    /// Ask for a non-empty code or title that can be saved as one column
    fn ask_field(&mut self, message: &str) -> io::Result<String> {
        loop {
            let value = self.prompter.ask_non_empty(message)?;
            if !value.contains(DELIMITER) {
                return Ok(value);
            }
            writeln!(
                self.prompter.out(),
                "Course numbers and titles cannot contain '{DELIMITER}'."
            )?;
        }
    }

    fn enter_grade(&mut self) -> io::Result<()> {
        listing::run_filter(self.prompter.out(), &self.store, Filter::Ungraded)?;
        let code = self.ask_existing_code("Enter a course number: ")?;

        let grade = loop {
            let grade: f64 = self.prompter.ask_number("Input grade: ")?;
            if grade.is_finite() && grade > 0.0 {
                break grade;
            }
            writeln!(
                self.prompter.out(),
                "A grade of 0 is reserved for courses without a grade."
            )?;
        };

        if let Some(course) = self.store.set_grade(&code, grade) {
            info!("Recorded grade {grade} for {}", course.code);
        }
        Ok(())
    }

    fn edit_course(&mut self) -> io::Result<()> {
        let code = self.ask_existing_code("Enter course number to be changed (ex. CS 122): ")?;
        let new_code = self.ask_field("Enter the new course number: ")?;
        let new_title = self.ask_field("Enter the new descriptive title: ")?;

        if let Some(course) = self.store.edit_course(&code, &new_code, &new_title) {
            let (code, title) = (course.code.clone(), course.title.clone());
            writeln!(self.prompter.out(), "New course number: {code}")?;
            writeln!(self.prompter.out(), "New course description: {title}")?;
        }
        Ok(())
    }

    fn shift(&mut self) -> io::Result<()> {
        let shift_file = Path::new(&self.config.paths.shift_file);
        let incoming = load_courses(shift_file);
        if incoming.is_empty() {
            writeln!(
                self.prompter.out(),
                "No courses to shift from {}.",
                shift_file.display()
            )?;
            return Ok(());
        }

        writeln!(self.prompter.out(), "Detected Shifter!")?;
        if self
            .prompter
            .confirm("Are you sure you want to shift courses?(y/n): ")?
        {
            shift::apply(self.prompter.out(), &mut self.store, incoming)?;
        }
        Ok(())
    }

    fn save(&mut self) -> io::Result<()> {
        if !self
            .prompter
            .confirm("The changes will be permanent. Are you sure? Y/N ")?
        {
            writeln!(self.prompter.out(), "The changes were not saved.")?;
            return Ok(());
        }

        let data_file = Path::new(&self.config.paths.data_file);
        let out_dir = Path::new(&self.config.paths.out_dir);
        match write_copies(self.store.courses(), data_file, out_dir) {
            Ok(paths) => {
                for path in paths {
                    writeln!(self.prompter.out(), "✓ Saved: {}", path.display())?;
                }
            }
            Err(e) => {
                error!("Saving failed: {e}");
                writeln!(self.prompter.out(), "✗ The changes could not be saved: {e}")?;
            }
        }
        Ok(())
    }
}
