//! # Edit Session Management
//!
//! Drives the interactive loop over one document.
//!
//! An EditSession owns the document being edited and a cursor, the current
//! element, which starts on `body`. Every turn shows the cursor and its
//! children, reads a menu key, runs the matching [`Choice`] and applies the
//! returned [`ChoiceOutcome`]. The session ends only when the user confirms
//! finishing `body`.

use crate::{Choice, ChoiceOutcome, Console, EditorError};
use htmlgen_dom::{Document, ElementId};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub struct EditSession<R, W> {
    document: Document,
    console: Console<R, W>,

    /// Element the menu operates on
    current: ElementId,

    active: bool,
}

impl<R: BufRead, W: Write> EditSession<R, W> {
    /// Start a session with the cursor on `body`
    pub fn new(document: Document, console: Console<R, W>) -> Self {
        let current = document.body();
        Self {
            document,
            console,
            current,
            active: true,
        }
    }

    pub fn current(&self) -> ElementId {
        self.current
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Loop until the user finishes `body`
    pub fn run(&mut self) -> Result<(), EditorError> {
        info!("Edit session started");
        while self.step()? {}
        info!("Edit session finished");
        Ok(())
    }

    /// Run one turn of the menu. Returns whether the session is still active.
    pub fn step(&mut self) -> Result<bool, EditorError> {
        if !self.active {
            return Ok(false);
        }

        self.console.blank()?;
        self.print_current()?;
        self.console.blank()?;
        self.print_menu()?;
        self.console.blank()?;

        let key = self.console.prompt("Enter choice: ")?;
        let Some(choice) = Choice::from_key(key.trim()) else {
            warn!(input = %key, "Unknown menu key");
            self.console.blank()?;
            self.console.say("Invalid choice.")?;
            return Ok(true);
        };

        let outcome = choice.run(&mut self.document, self.current, &mut self.console)?;
        self.apply(outcome);
        Ok(self.active)
    }

    fn apply(&mut self, outcome: ChoiceOutcome) {
        match outcome {
            ChoiceOutcome::Stay => {}
            ChoiceOutcome::MoveTo(next) => {
                debug!(
                    from = %self.document.tree().get(self.current),
                    to = %self.document.tree().get(next),
                    "Moving cursor"
                );
                self.current = next;
            }
            ChoiceOutcome::Terminate => self.active = false,
        }
    }

    fn print_current(&mut self) -> Result<(), EditorError> {
        let tree = self.document.tree();
        let current = tree.get(self.current);

        self.console.say(&format!("Current tag: {}", current))?;
        self.console.blank()?;

        if current.children().is_empty() {
            return self.console.say("Children: None");
        }

        self.console.say("Children:")?;
        for (i, child) in current.children().iter().enumerate() {
            self.console
                .say(&format!("\t{}: {}", i + 1, tree.get(*child)))?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), EditorError> {
        self.console.say("What would you like to do:")?;
        for choice in Choice::ALL {
            self.console
                .say(&format!("{}. {}", choice.key(), choice.label()))?;
        }
        Ok(())
    }

    /// End the session and hand back the edited document
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn into_parts(self) -> (Document, Console<R, W>) {
        (self.document, self.console)
    }
}
