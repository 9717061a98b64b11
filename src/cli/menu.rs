//! Interactive menu session
//!
//! Drives a `Roster` from a text menu. All outcomes of roster operations are
//! reported as messages; only I/O failures end the session with an error.

use std::io::{BufRead, Write};

use log::debug;

use super::prompt::Console;
use super::validate::{parse_age, parse_gender, parse_serial, parse_text};
use crate::config::ListStyle;
use crate::display::{
    format_page_header, format_record_details, format_record_table, format_search_results,
};
use crate::error::{RosterError, RosterResult};
use crate::models::{FieldSelector, Gender, RecordFields, SearchQuery};
use crate::services::{PageCommand, PageOutcome, Pager, Roster};

/// A main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    /// Parse a menu digit
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Search),
            "5" => Some(Self::DisplayAll),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MAIN_MENU: &str = "\n===== User Management System =====\n\
1. Add entry\n\
2. Update entry\n\
3. Delete entry\n\
4. Search entry\n\
5. Display all entries\n\
6. Exit\n";

const PAGE_HELP: &str = "n - next page | p - previous page | q - quit";

/// One interactive session over a roster
pub struct Session<R, W> {
    roster: Roster,
    console: Console<R, W>,
    list_style: ListStyle,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session
    pub fn new(roster: Roster, console: Console<R, W>, list_style: ListStyle) -> Self {
        Self {
            roster,
            console,
            list_style,
        }
    }

    /// The roster being edited
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> RosterResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(RosterError::InputClosed) => {
                    debug!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume the session, returning the roster and the console
    pub fn into_parts(self) -> (Roster, Console<R, W>) {
        (self.roster, self.console)
    }

    /// Show the menu and handle one selection. Returns false on exit.
    fn step(&mut self) -> RosterResult<bool> {
        self.console.write(MAIN_MENU)?;
        let choice = self.console.prompt_string("Enter your choice: ")?;

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => self.add_entry()?,
            Some(MenuChoice::Update) => self.update_entry()?,
            Some(MenuChoice::Delete) => self.delete_entry()?,
            Some(MenuChoice::Search) => self.search_entries()?,
            Some(MenuChoice::DisplayAll) => self.display_all()?,
            Some(MenuChoice::Exit) => {
                self.console.line("Exiting...")?;
                return Ok(false);
            }
            None => self.console.line("Invalid choice.")?,
        }

        Ok(true)
    }

    fn prompt_fields(&mut self) -> RosterResult<RecordFields> {
        let gender_prompt = format!(
            "Enter gender ({}): ",
            Gender::all()
                .iter()
                .map(Gender::code)
                .collect::<Vec<_>>()
                .join("/")
        );

        let name = self
            .console
            .prompt_valid("Enter name: ", |raw| parse_text("Name", raw))?;
        let age = self.console.prompt_valid("Enter age: ", parse_age)?;
        let gender = self.console.prompt_valid(&gender_prompt, parse_gender)?;
        let occupation = self
            .console
            .prompt_valid("Enter occupation: ", |raw| parse_text("Occupation", raw))?;

        Ok(RecordFields {
            name,
            age,
            gender,
            occupation,
        })
    }

    fn add_entry(&mut self) -> RosterResult<()> {
        let fields = self.prompt_fields()?;

        match self.roster.add(fields).map(|_| ()) {
            Ok(()) => self.console.line("Entry successfully added."),
            Err(e) => self.report(&e),
        }
    }

    fn update_entry(&mut self) -> RosterResult<()> {
        let serial = self
            .console
            .prompt_valid("Enter SRNO to update: ", parse_serial)?;
        let fields = self.prompt_fields()?;

        match self.roster.update(serial, fields).map(|_| ()) {
            Ok(()) => self.console.line("Entry successfully updated."),
            Err(e) => self.report(&e),
        }
    }

    fn delete_entry(&mut self) -> RosterResult<()> {
        let serial = self
            .console
            .prompt_valid("Enter SRNO to delete: ", parse_serial)?;

        if self.roster.find(serial).is_none() {
            return self.report(&RosterError::not_found(serial));
        }

        let confirmed = self.console.confirm(&format!(
            "Are you sure you want to delete SRNO {}? (y/n): ",
            serial
        ))?;

        match self.roster.delete_if_confirmed(serial, confirmed) {
            Ok(_) => self.console.line("Entry successfully deleted."),
            Err(e) => self.report(&e),
        }
    }

    fn search_entries(&mut self) -> RosterResult<()> {
        self.console.line("\nSearch by:")?;
        for (index, selector) in FieldSelector::all().iter().enumerate() {
            self.console
                .line(&format!("{}. {}", index + 1, selector.label()))?;
        }

        let choice = self.console.prompt_string("Enter your choice: ")?;
        let selector = match FieldSelector::from_menu_choice(&choice) {
            Ok(selector) => selector,
            Err(_) => return self.console.line("Invalid choice."),
        };

        let raw = self.console.prompt_string("Enter search value: ")?;
        let query = match SearchQuery::parse(selector, &raw) {
            Ok(query) => query,
            Err(e) => return self.report(&e),
        };

        let results = self.roster.search(&query);
        self.console.write(&format_search_results(&results))
    }

    fn display_all(&mut self) -> RosterResult<()> {
        let records = self.roster.all();
        if records.is_empty() {
            return self.console.line("No entries to display.");
        }

        let mut pager = Pager::new(records.len());
        loop {
            self.console.clear_screen()?;

            let range = pager.range();
            let page = &records[range.clone()];
            let body = match self.list_style {
                ListStyle::Detail => format_record_details(page),
                ListStyle::Table => format_record_table(page),
            };
            self.console.line(&format_page_header(&range, pager.total()))?;
            self.console.write(&body)?;

            if !pager.needs_prompt() {
                return Ok(());
            }

            self.console.line(PAGE_HELP)?;
            let input = self.console.prompt_string("Choice: ")?;
            match pager.apply(PageCommand::parse(&input)) {
                PageOutcome::Moved => {}
                PageOutcome::AtBoundary | PageOutcome::Invalid => {
                    self.console.line("Invalid choice.")?
                }
                PageOutcome::Quit => return Ok(()),
            }
        }
    }

    /// Print a recoverable error as a user-facing message
    fn report(&mut self, err: &RosterError) -> RosterResult<()> {
        if err.is_not_found() {
            debug!("{:?}", err);
        }
        match err {
            RosterError::InvalidSelector(message) => self.console.line(message),
            other => self.console.line(&other.to_string()),
        }
    }
}
