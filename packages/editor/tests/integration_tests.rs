//! Integration tests for editor crate

use htmlgen_dom::Document;
use htmlgen_editor::{Choice, ChoiceOutcome, Console, EditSession, EditorError};
use std::io::Cursor;

type ScriptedSession = EditSession<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(document: Document, lines: &[&str]) -> ScriptedSession {
    let mut input = lines.join("\n");
    input.push('\n');
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    EditSession::new(document, console)
}

fn transcript(session: ScriptedSession) -> (Document, String) {
    let (document, console) = session.into_parts();
    let output = String::from_utf8(console.into_parts().1).unwrap();
    (document, output)
}

#[test]
fn test_drill_down_and_finish() {
    let mut session = scripted(
        Document::new("index.html"),
        &["1", "section", "", "6", "6", "y"],
    );
    let body = session.document().body();

    // Add child without contents: cursor moves into it
    assert!(session.step().unwrap());
    let section = session.document().tree().children(body)[0];
    assert_eq!(session.current(), section);
    assert_eq!(session.document().tree().get(section).name(), "section");

    // Finish: back to its parent
    assert!(session.step().unwrap());
    assert_eq!(session.current(), body);

    // Finish on body with confirmation ends the session
    assert!(!session.step().unwrap());
    assert!(!session.is_active());
}

#[test]
fn test_edit_child_out_of_range_then_valid() {
    let mut session = scripted(
        Document::new("index.html"),
        &[
            "1", "h1", "Title", //
            "1", "p", "Body text", //
            "4", "99", "2", "Replaced", //
            "6", "y",
        ],
    );

    session.run().unwrap();

    let (document, output) = transcript(session);
    assert_eq!(
        document.render(),
        vec![
            "<html>",
            "<head>",
            "</head>",
            "<body>",
            "<h1>Title</h1>",
            "<p>Replaced</p>",
            "</body>",
            "</html>",
        ]
    );
    assert!(output.contains("Invalid choice."));
    assert!(output.contains("Editing <p>:"));
}

#[test]
fn test_declined_finish_keeps_editing() {
    let mut session = scripted(
        Document::new("index.html"),
        &["6", "n", "1", "footer", "", "1", "small", "bye", "6", "6", "yes"],
    );

    session.run().unwrap();

    let (document, _) = transcript(session);
    assert_eq!(
        document.render(),
        vec![
            "<html>",
            "<head>",
            "</head>",
            "<body>",
            "<footer>",
            "<small>bye</small>",
            "</footer>",
            "</body>",
            "</html>",
        ]
    );
}

#[test]
fn test_full_page_session() {
    let mut session = scripted(
        Document::with_doctype("index.html"),
        &[
            "1", "header", "", //
            "1", "h1", "My Webpage", //
            "6", //
            "1", "section", "", //
            "1", "h2", "About Me", //
            "1", "ul", "", //
            "1", "li", "Teaching", //
            "1", "li", "Piano", //
            "6", "6", //
            "1", "hr", //
            "abc", //
            "6", "y",
        ],
    );

    session.run().unwrap();

    let (document, output) = transcript(session);
    assert_eq!(
        document.to_html(),
        [
            "<!DOCTYPE html>",
            "<html>",
            "<head>",
            "</head>",
            "<body>",
            "<header>",
            "<h1>My Webpage</h1>",
            "</header>",
            "<section>",
            "<h2>About Me</h2>",
            "<ul>",
            "<li>Teaching</li>",
            "<li>Piano</li>",
            "</ul>",
            "</section>",
            "<hr>",
            "</body>",
            "</html>",
        ]
        .join("\n")
    );
    assert!(output.contains("Current tag: <ul>"));
    assert!(output.contains("\t2: <section>"));
}

#[test]
fn test_edit_child_drills_into_container() {
    let mut session = scripted(
        Document::new("index.html"),
        &["1", "nav", "", "6", "4", "1", "1", "a", "Home", "6", "6", "y"],
    );
    let body = session.document().body();

    session.run().unwrap();

    let (document, _) = transcript(session);
    let nav = document.tree().children(body)[0];
    assert_eq!(document.tree().children(nav).len(), 1);
    assert_eq!(
        document.tree().render(nav),
        vec!["<nav>", "<a>Home</a>", "</nav>"]
    );
}

#[test]
fn test_session_ends_with_input() {
    let mut session = scripted(Document::new("index.html"), &["1", "div"]);
    let err = session.run().unwrap_err();
    assert!(matches!(err, EditorError::InputClosed));
}

#[test]
fn test_menu_lists_every_choice() {
    let mut session = scripted(Document::new("index.html"), &["2"]);
    session.step().unwrap();

    let (_, output) = transcript(session);
    for choice in Choice::ALL {
        assert!(output.contains(&format!("{}. {}", choice.key(), choice.label())));
    }
    assert!(output.contains("This option hasn't been implemented yet."));
}

#[test]
fn test_choice_outcomes_are_distinct() -> anyhow::Result<()> {
    let mut document = Document::new("index.html");
    let body = document.body();
    let mut console = Console::new(Cursor::new(b"y\n".to_vec()), Vec::new());

    let stub = Choice::RemoveChild.run(&mut document, body, &mut console)?;
    let finish = Choice::Finish.run(&mut document, body, &mut console)?;

    assert_eq!(stub, ChoiceOutcome::Stay);
    assert_eq!(finish, ChoiceOutcome::Terminate);
    Ok(())
}
