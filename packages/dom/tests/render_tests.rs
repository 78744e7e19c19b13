//! Serializer behaviour over whole trees

use htmlgen_dom::{DomError, Element, ElementId, Tree};

fn sample_tree() -> Tree {
    let mut tree = Tree::new(Element::new("section"));
    let root = tree.root();

    tree.add_child(root, Element::with_contents("h2", "About Me"))
        .unwrap();
    let hobbies = tree.add_child(root, Element::new("ul")).unwrap();
    for hobby in ["Teaching", "Machining", "Blacksmithing", "Piano"] {
        tree.add_child(hobbies, Element::with_contents("li", hobby))
            .unwrap();
    }
    tree
}

#[test]
fn test_nested_section() {
    let tree = sample_tree();
    assert_eq!(
        tree.render(tree.root()),
        vec![
            "<section>",
            "<h2>About Me</h2>",
            "<ul>",
            "<li>Teaching</li>",
            "<li>Machining</li>",
            "<li>Blacksmithing</li>",
            "<li>Piano</li>",
            "</ul>",
            "</section>",
        ]
    );
}

#[test]
fn test_attributes_on_container() {
    let mut div = Element::new("div");
    div.add_attribute("style", "color:red;");
    div.add_attribute("id", "");
    let tree = Tree::new(div);

    assert_eq!(
        tree.render(tree.root()),
        vec!["<div style=\"color:red;\" id>", "</div>"]
    );
}

#[test]
fn test_content_elements_render_as_one_line() {
    let mut tree = sample_tree();
    let root = tree.root();
    let footer = tree.add_child(root, Element::new("footer")).unwrap();
    let mut note = Element::with_contents("p", "bye");
    note.add_attribute("class", "note");
    tree.add_child(footer, note).unwrap();
    tree.add_child(footer, Element::self_closing("hr")).unwrap();

    let mut checked = 0;
    let ids = all_ids(&tree);
    assert_eq!(ids.len(), tree.len());
    for id in ids {
        let element = tree.get(id);
        if !element.has_contents() {
            continue;
        }

        assert!(element.children().is_empty(), "{} has both", element);
        assert_eq!(
            tree.render(id),
            vec![format!(
                "{}{}{}",
                element.open_tag(),
                element.contents(),
                element.close_tag()
            )]
        );
        checked += 1;
    }

    // h2, four li and the footer note
    assert_eq!(checked, 6);
}

fn all_ids(tree: &Tree) -> Vec<ElementId> {
    let mut ids = vec![tree.root()];
    let mut next = 0;
    while next < ids.len() {
        ids.extend_from_slice(tree.children(ids[next]));
        next += 1;
    }
    ids
}

#[test]
fn test_failed_add_leaves_tree_unchanged() {
    let mut tree = sample_tree();
    let before = tree.render(tree.root());
    let heading = tree.children(tree.root())[0];

    let err = tree.add_child(heading, Element::new("span")).unwrap_err();
    assert!(matches!(err, DomError::AlreadyHasContent(_)));
    assert_eq!(err.to_string(), "<h2> already has contents and cannot take children");
    assert_eq!(tree.render(tree.root()), before);
}

#[test]
fn test_attribute_edit_through_tree() {
    let mut tree = sample_tree();
    let root = tree.root();
    tree.get_mut(root).add_attribute("id", "about");

    assert_eq!(tree.render(root)[0], "<section id=\"about\">");
}
