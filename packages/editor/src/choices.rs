//! # Menu Choices
//!
//! The fixed menu offered on every turn of an [`EditSession`](crate::EditSession).
//!
//! Each choice works on the current element and reports what the cursor
//! should do next:
//!
//! | Key | Choice          | Outcome                                        |
//! |-----|-----------------|------------------------------------------------|
//! | 1   | Add child       | `MoveTo(child)` when it has no contents        |
//! | 2   | Add attribute   | `Stay` (not implemented yet)                   |
//! | 3   | Edit attributes | `Stay` (not implemented yet)                   |
//! | 4   | Edit child      | `Stay`, or `MoveTo(child)` for a container     |
//! | 5   | Remove child    | `Stay` (not implemented yet)                   |
//! | 6   | Finish tag      | `MoveTo(parent)`, or `Terminate` on body       |

use crate::{Console, EditorError};
use htmlgen_dom::{is_void, Document, Element, ElementId};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const NOT_IMPLEMENTED: &str = "This option hasn't been implemented yet.";
const INVALID_CHOICE: &str = "Invalid choice.";

/// What the session cursor does after a choice runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Keep editing the same element
    Stay,

    /// Move the cursor to another element
    MoveTo(ElementId),

    /// End the session
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddChild,
    AddAttribute,
    EditAttributes,
    EditChild,
    RemoveChild,
    Finish,
}

impl Choice {
    /// Menu order
    pub const ALL: [Choice; 6] = [
        Choice::AddChild,
        Choice::AddAttribute,
        Choice::EditAttributes,
        Choice::EditChild,
        Choice::RemoveChild,
        Choice::Finish,
    ];

    /// Stable identifier typed at the menu prompt
    pub fn key(self) -> &'static str {
        match self {
            Choice::AddChild => "1",
            Choice::AddAttribute => "2",
            Choice::EditAttributes => "3",
            Choice::EditChild => "4",
            Choice::RemoveChild => "5",
            Choice::Finish => "6",
        }
    }

    pub fn from_key(key: &str) -> Option<Choice> {
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::AddChild => "Add a child tag",
            Choice::AddAttribute => "Add an attribute",
            Choice::EditAttributes => "Edit attributes",
            Choice::EditChild => "Edit child tag",
            Choice::RemoveChild => "Remove child tag",
            Choice::Finish => "Finish tag",
        }
    }

    /// Run this choice against `current`
    pub fn run<R: BufRead, W: Write>(
        self,
        document: &mut Document,
        current: ElementId,
        console: &mut Console<R, W>,
    ) -> Result<ChoiceOutcome, EditorError> {
        debug!(choice = ?self, "Running choice");

        match self {
            Choice::AddChild => add_child(document, current, console),
            Choice::EditChild => edit_child(document, current, console),
            Choice::Finish => finish(document, current, console),
            Choice::AddAttribute | Choice::EditAttributes | Choice::RemoveChild => {
                console.say(NOT_IMPLEMENTED)?;
                Ok(ChoiceOutcome::Stay)
            }
        }
    }
}

/// Create a child of `current`. A child given contents is complete, so the
/// cursor stays; an empty one becomes the new cursor.
fn add_child<R: BufRead, W: Write>(
    document: &mut Document,
    current: ElementId,
    console: &mut Console<R, W>,
) -> Result<ChoiceOutcome, EditorError> {
    console.blank()?;
    console.say("Adding a child")?;
    console.blank()?;

    let name = console.prompt("Name: ")?.trim().to_string();
    if name.is_empty() {
        warn!("Rejected child with an empty name");
        console.say("A tag needs a name.")?;
        return Ok(ChoiceOutcome::Stay);
    }

    if is_void(&name) {
        document
            .tree_mut()
            .add_child(current, Element::self_closing(name))?;
        return Ok(ChoiceOutcome::Stay);
    }

    let contents = console.prompt("Contents (leave blank for none): ")?;
    let complete = !contents.is_empty();
    let child = document
        .tree_mut()
        .add_child(current, Element::with_contents(name, contents))?;

    if complete {
        Ok(ChoiceOutcome::Stay)
    } else {
        Ok(ChoiceOutcome::MoveTo(child))
    }
}

/// List the children and ask for one by position until a usable one is
/// picked. Content-bearing children get new contents in place; containers
/// become the new cursor.
fn edit_child<R: BufRead, W: Write>(
    document: &mut Document,
    current: ElementId,
    console: &mut Console<R, W>,
) -> Result<ChoiceOutcome, EditorError> {
    let children = document.tree().children(current).to_vec();
    if children.is_empty() {
        console.say("No children to edit.")?;
        return Ok(ChoiceOutcome::Stay);
    }

    let tree = document.tree();
    if children.iter().all(|child| tree.get(*child).is_self_closing()) {
        console.say("No children can be edited; self-closing tags hold no contents.")?;
        return Ok(ChoiceOutcome::Stay);
    }

    loop {
        console.blank()?;
        for (i, child) in children.iter().enumerate() {
            console.say(&format!("{}: {}", i + 1, document.tree().get(*child)))?;
        }
        console.blank()?;

        let reply = console.prompt("Enter child number: ")?;
        let Some(child) = parse_selection(&reply, children.len()).map(|i| children[i]) else {
            warn!(input = %reply, "Invalid child selection");
            console.say(INVALID_CHOICE)?;
            continue;
        };

        let element = document.tree().get(child);
        if element.is_self_closing() {
            console.say(&format!("{} cannot hold contents.", element))?;
            continue;
        }

        if !element.has_contents() {
            return Ok(ChoiceOutcome::MoveTo(child));
        }

        console.say(&format!("Editing {}:", element))?;
        console.blank()?;
        let contents = console.prompt("Enter new contents: ")?;
        document.tree_mut().set_contents(child, contents)?;
        return Ok(ChoiceOutcome::Stay);
    }
}

/// Ascend to the parent, or on body confirm the end of the session
fn finish<R: BufRead, W: Write>(
    document: &mut Document,
    current: ElementId,
    console: &mut Console<R, W>,
) -> Result<ChoiceOutcome, EditorError> {
    if current == document.body() {
        let reply = console.prompt("Are you sure you want to be done? (y or n): ")?;
        return Ok(match reply.trim().to_lowercase().as_str() {
            "y" | "yes" => ChoiceOutcome::Terminate,
            _ => ChoiceOutcome::Stay,
        });
    }

    Ok(match document.tree().parent(current) {
        Some(parent) => ChoiceOutcome::MoveTo(parent),
        None => ChoiceOutcome::Stay,
    })
}

/// 1-based position → index, if it names one of `len` children
fn parse_selection(reply: &str, len: usize) -> Option<usize> {
    reply
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
