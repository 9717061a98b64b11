//! Pagination policy for the "display all" view
//!
//! Pages hold a fixed number of records. Navigation never wraps around: moving
//! past either end leaves the current page unchanged.

use std::ops::Range;

/// Records shown per page
pub const PAGE_SIZE: usize = 3;

/// A navigation command typed at the page prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Next,
    Previous,
    Quit,
    Invalid,
}

impl PageCommand {
    /// Parse user input (case-insensitive, surrounding whitespace ignored)
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "q" | "quit" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// Result of applying a command to the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The current page changed
    Moved,
    /// Already at the first/last page; nothing changed
    AtBoundary,
    /// The user ended the listing
    Quit,
    /// Unrecognized input; the same page is shown again
    Invalid,
}

/// Tracks the current page over a fixed number of records
#[derive(Debug, Clone)]
pub struct Pager {
    total: usize,
    page: usize,
}

impl Pager {
    /// Create a pager positioned on the first page
    pub fn new(total: usize) -> Self {
        Self { total, page: 0 }
    }

    /// Total number of records
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zero-based index of the current page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages (zero for an empty listing)
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(PAGE_SIZE)
    }

    /// Whether navigation is needed at all
    pub fn needs_prompt(&self) -> bool {
        self.total > PAGE_SIZE
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.page_count()
    }

    /// Index range of the records on the current page, clamped to the total
    pub fn range(&self) -> Range<usize> {
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.total);
        start..end
    }

    /// Apply a navigation command
    pub fn apply(&mut self, command: PageCommand) -> PageOutcome {
        match command {
            PageCommand::Next if self.is_last() => PageOutcome::AtBoundary,
            PageCommand::Next => {
                self.page += 1;
                PageOutcome::Moved
            }
            PageCommand::Previous if self.is_first() => PageOutcome::AtBoundary,
            PageCommand::Previous => {
                self.page -= 1;
                PageOutcome::Moved
            }
            PageCommand::Quit => PageOutcome::Quit,
            PageCommand::Invalid => PageOutcome::Invalid,
        }
    }
}
