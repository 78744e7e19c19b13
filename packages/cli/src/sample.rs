//! Sample page used by `--sample`

use htmlgen_dom::{Document, DomError, Element};

const HOBBIES: [&str; 4] = ["Teaching", "Machining", "Blacksmithing", "Piano"];

/// Fill `body` with a small personal page: a header, an about section with
/// a hobby list, and a footer.
pub fn populate(document: &mut Document) -> Result<(), DomError> {
    let body = document.body();
    let tree = document.tree_mut();

    let header = tree.add_child(body, Element::new("header"))?;
    tree.add_child(header, Element::with_contents("h1", "My Personal Webpage!"))?;

    let section = tree.add_child(body, Element::new("section"))?;
    tree.add_child(section, Element::with_contents("h2", "About Me"))?;
    let hobbies = tree.add_child(section, Element::new("ul"))?;
    for hobby in HOBBIES {
        tree.add_child(hobbies, Element::with_contents("li", hobby))?;
    }

    let footer = tree.add_child(body, Element::new("footer"))?;
    let mut note = Element::with_contents("p", "I'm unreachable, sorry. Nobody can contact me.");
    note.add_attribute("style", "background-color: red;");
    tree.add_child(footer, note)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page() {
        let mut doc = Document::new("index.html");
        populate(&mut doc).unwrap();

        assert_eq!(
            doc.render(),
            vec![
                "<html>",
                "<head>",
                "</head>",
                "<body>",
                "<header>",
                "<h1>My Personal Webpage!</h1>",
                "</header>",
                "<section>",
                "<h2>About Me</h2>",
                "<ul>",
                "<li>Teaching</li>",
                "<li>Machining</li>",
                "<li>Blacksmithing</li>",
                "<li>Piano</li>",
                "</ul>",
                "</section>",
                "<footer>",
                "<p style=\"background-color: red;\">I'm unreachable, sorry. Nobody can contact me.</p>",
                "</footer>",
                "</body>",
                "</html>",
            ]
        );
    }
}
