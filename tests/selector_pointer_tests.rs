mod common;

use category_combo::domain::CategoryId;
use category_combo::selector::{CategorySelector, EmptyState, SelectorKey, SelectorResponse};
use common::RecordingSource;

#[test]
fn clicking_an_option_selects_it() {
    let mut source = RecordingSource::with_names(&["Food", "Rent"]);
    let mut selector = CategorySelector::new();
    selector.focus();

    let response = selector.click_option(1, &mut source);
    assert_eq!(response, SelectorResponse::Selected(CategoryId::from(2)));
    assert_eq!(source.changes, vec!["2"]);
    assert!(!selector.is_open());
}

#[test]
fn clicks_on_a_closed_menu_or_past_the_list_are_ignored() {
    let mut source = RecordingSource::with_names(&["Food"]);
    let mut selector = CategorySelector::new();
    assert_eq!(
        selector.click_option(0, &mut source),
        SelectorResponse::Ignored
    );
    selector.focus();
    assert_eq!(
        selector.click_option(3, &mut source),
        SelectorResponse::Ignored
    );
    assert!(source.changes.is_empty());
}

#[test]
fn clicking_create_is_ignored_while_creating() {
    let mut source = RecordingSource::with_names(&["Food"]);
    source.creating = true;
    let mut selector = CategorySelector::new();
    selector.input("Fuel");

    assert_eq!(selector.click_create(&mut source), SelectorResponse::Ignored);
    assert!(source.creates.is_empty());

    source.creating = false;
    assert_eq!(
        selector.click_create(&mut source),
        SelectorResponse::CreateRequested("Fuel".into())
    );
    assert_eq!(source.creates, vec!["Fuel"]);
}

#[test]
fn hover_and_keyboard_share_one_highlight() {
    let mut source = RecordingSource::with_names(&["Food", "Fuel", "Fees"]);
    let mut selector = CategorySelector::new();
    selector.focus();

    assert_eq!(selector.hover(2, &source), SelectorResponse::Handled);
    selector.handle_key(SelectorKey::Up, &mut source);
    assert_eq!(selector.highlighted(), Some(1));
    assert_eq!(selector.hover(7, &source), SelectorResponse::Ignored);
    assert_eq!(selector.highlighted(), Some(1));

    let view = selector.view(&source, "Search");
    let menu = view.menu.unwrap();
    assert_eq!(menu.highlighted(), Some(1));
}

#[test]
fn hovering_the_create_slot_highlights_it() {
    let mut source = RecordingSource::with_names(&["Food"]);
    let mut selector = CategorySelector::new();
    selector.input("fo");
    selector.hover(1, &source);

    let menu = selector.view(&source, "Search").menu.unwrap();
    assert!(menu.create.as_ref().unwrap().highlighted);
    assert!(!menu.rows[0].highlighted);
    assert_eq!(
        selector.handle_key(SelectorKey::Enter, &mut source),
        SelectorResponse::CreateRequested("fo".into())
    );
}

#[test]
fn outside_press_closes_and_clears() {
    let mut selector = CategorySelector::new();
    assert_eq!(selector.pointer_down_outside(), SelectorResponse::Ignored);

    selector.input("Fo");
    assert_eq!(selector.pointer_down_outside(), SelectorResponse::Handled);
    assert!(!selector.is_open());
    assert_eq!(selector.search_text(), "");
    assert_eq!(selector.highlighted(), None);
}

#[test]
fn pattern_characters_in_search_are_literal() {
    let source = RecordingSource::with_names(&["a.b plan", "axb plan"]);
    let mut selector = CategorySelector::new();
    selector.input("a.b");

    let menu = selector.view(&source, "Search").menu.unwrap();
    assert_eq!(menu.rows.len(), 1);
    assert_eq!(menu.rows[0].label(), "a.b plan");
    assert!(menu.rows[0].segments[0].marked);
    assert_eq!(menu.rows[0].segments[0].text, "a.b");

    selector.input("(");
    let menu = selector.view(&source, "Search").menu.unwrap();
    assert!(menu.rows.is_empty());
    assert_eq!(menu.create.unwrap().name, "(");
}

#[test]
fn empty_catalog_prompts_to_type_without_create_option() {
    let source = RecordingSource::with_names(&[]);
    let mut selector = CategorySelector::new();
    selector.focus();

    let menu = selector.view(&source, "Search").menu.unwrap();
    assert!(menu.rows.is_empty());
    assert!(menu.create.is_none());
    assert_eq!(menu.empty, Some(EmptyState::TypeToCreate));
    assert!(!menu.show_divider());
}

#[test]
fn error_is_shown_whether_open_or_closed() {
    let mut source = RecordingSource::with_names(&["Food"]);
    source.error = Some("Category is required".into());
    let mut selector = CategorySelector::new();

    assert_eq!(
        selector.view(&source, "Search").error.as_deref(),
        Some("Category is required")
    );
    selector.focus();
    assert_eq!(
        selector.view(&source, "Search").error.as_deref(),
        Some("Category is required")
    );

    source.error = Some(String::new());
    assert!(selector.view(&source, "Search").error.is_none());
}

#[test]
fn unknown_selection_degrades_to_no_selection() {
    let mut source = RecordingSource::with_names(&["Food"]);
    source.selected = "404".into();
    let selector = CategorySelector::new();

    let view = selector.view(&source, "Search or create...");
    assert!(view.input.badge.is_none());
    assert_eq!(view.input.placeholder, "Search or create...");
}
