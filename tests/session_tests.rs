mod common;

use category_combo::catalog::CategoryCatalog;
use category_combo::cli::ui::{navigation::PickerInput, test_mode, RowTarget, UiStyle};
use category_combo::cli::{PickOutcome, PickerSession};
use category_combo::config::PickerConfig;
use category_combo::domain::{CategoryId, TransactionType};
use category_combo::form::TransactionForm;
use common::CATALOG_FIXTURE;
use crossterm::event::KeyCode;

fn setup() -> (TransactionForm, CategoryCatalog) {
    let catalog = CategoryCatalog::from_json_str(CATALOG_FIXTURE).unwrap();
    let mut form = TransactionForm::new(TransactionType::Expense);
    form.set_categories(catalog.list().to_vec());
    (form, catalog)
}

fn chars(text: &str) -> Vec<KeyCode> {
    text.chars().map(KeyCode::Char).collect()
}

#[test]
fn arrow_and_enter_pick_first_category() {
    let (mut form, mut catalog) = setup();
    let outcome = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain())
        .run_simulated(&[KeyCode::Down, KeyCode::Enter]);
    match outcome {
        PickOutcome::Picked(category) => assert_eq!(category.category_name, "Food"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn typing_a_new_name_creates_and_picks_it() {
    let (mut form, mut catalog) = setup();
    let mut keys = chars("Travel");
    keys.push(KeyCode::Enter);
    let outcome = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain())
        .run_simulated(&keys);

    let PickOutcome::Picked(category) = outcome else {
        panic!("expected a pick");
    };
    assert_eq!(category.category_id, CategoryId::from(10));
    assert!(catalog.list().iter().any(|cat| cat.category_name == "Travel"));
    assert_eq!(form.selected_category().unwrap().category_name, "Travel");
}

#[test]
fn duplicate_name_keeps_session_running() {
    let (mut form, mut catalog) = setup();
    let mut keys = chars("old hobby");
    keys.extend([KeyCode::Enter, KeyCode::Char('R'), KeyCode::Down, KeyCode::Enter]);
    let outcome = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain())
        .run_simulated(&keys);

    let PickOutcome::Picked(category) = outcome else {
        panic!("expected a pick after the failed creation");
    };
    assert_eq!(category.category_name, "Rent");
}

#[test]
fn escape_or_exhausted_script_returns_escaped() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default());
    assert_eq!(
        session.run_simulated(&[KeyCode::Char('f'), KeyCode::Esc]),
        PickOutcome::Escaped
    );
    assert!(!session.selector().is_open());
    assert_eq!(session.run_simulated(&[KeyCode::Down]), PickOutcome::Escaped);
}

#[test]
fn interrupt_ends_the_session() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default());
    assert_eq!(
        session.apply(PickerInput::Interrupt),
        Some(PickOutcome::Escaped)
    );
}

fn typed(session: &mut PickerSession<'_>, text: &str) {
    for ch in text.chars() {
        assert_eq!(session.apply(PickerInput::Char(ch)), None);
    }
}

#[test]
fn click_on_option_row_picks_that_category() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());
    session.begin();
    assert_eq!(
        session.painted().targets,
        vec![RowTarget::Input, RowTarget::Option(0), RowTarget::Option(1)]
    );

    let Some(PickOutcome::Picked(category)) = session.apply(PickerInput::Click { row: 2 }) else {
        panic!("expected a pick");
    };
    assert_eq!(category.category_name, "Rent");
}

#[test]
fn click_on_create_row_creates_the_typed_name() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());
    session.begin();
    typed(&mut session, "Tx");
    assert_eq!(session.painted().target_at(1), Some(RowTarget::Create(0)));

    let Some(PickOutcome::Picked(category)) = session.apply(PickerInput::Click { row: 1 }) else {
        panic!("expected the created category");
    };
    assert_eq!(category.category_name, "Tx");
    assert_eq!(category.category_id, CategoryId::from(10));
}

#[test]
fn press_below_widget_closes_and_input_row_reopens() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());
    session.begin();
    typed(&mut session, "fo");

    assert_eq!(session.apply(PickerInput::Click { row: 40 }), None);
    assert!(!session.selector().is_open());
    assert_eq!(session.selector().search_text(), "");
    assert_eq!(session.painted().lines.len(), 1);

    assert_eq!(session.apply(PickerInput::Click { row: 0 }), None);
    assert!(session.selector().is_open());
    assert_eq!(session.painted().lines.len(), 3);
}

#[test]
fn hovered_row_is_what_enter_picks() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());
    session.begin();

    assert_eq!(session.apply(PickerInput::Hover { row: 2 }), None);
    assert_eq!(session.selector().highlighted(), Some(1));
    assert_eq!(session.painted().lines[2], "> Rent");

    assert_eq!(session.apply(PickerInput::Hover { row: 9 }), None);
    assert_eq!(session.selector().highlighted(), Some(1));

    let Some(PickOutcome::Picked(category)) = session.apply(PickerInput::Enter) else {
        panic!("expected a pick");
    };
    assert_eq!(category.category_name, "Rent");
}

#[test]
fn creation_error_clears_once_typing_resumes() {
    let (mut form, mut catalog) = setup();
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());
    session.begin();
    typed(&mut session, "old hobby");

    assert_eq!(session.apply(PickerInput::Enter), None);
    let notice = session.notice().expect("creation error kept").to_string();
    assert!(notice.contains("already exists"));
    assert_eq!(session.painted().lines.last(), Some(&notice));

    typed(&mut session, "x");
    assert_eq!(session.notice(), None);
    assert_ne!(session.painted().lines.last(), Some(&notice));
}

#[test]
fn run_consumes_installed_scripts_in_order() {
    let (mut form, mut catalog) = setup();
    test_mode::install_selector_events(vec![vec![KeyCode::Down, KeyCode::Enter]]);
    let mut session = PickerSession::new(&mut form, &mut catalog, &PickerConfig::default())
        .with_style(UiStyle::plain());

    let first = session.run().unwrap();
    let second = session.run().unwrap();
    test_mode::reset_selector_events();

    assert!(matches!(first, PickOutcome::Picked(ref cat) if cat.category_name == "Food"));
    assert_eq!(second, PickOutcome::Escaped);
}
