mod mocks;

use contact_book::menu::MenuLoop;
use contact_book::models::ContactBook;
use mocks::{MockContactStore, ScriptedConsole};
use std::sync::Arc;

fn menu_with_store() -> (MenuLoop, MockContactStore) {
    let store = MockContactStore::new();
    let menu = MenuLoop::new(Arc::new(store.clone()));
    (menu, store)
}

#[tokio::test]
async fn test_menu_prints_options_and_exits() {
    let (menu, _store) = menu_with_store();
    let mut book = ContactBook::new();

    let mut console = ScriptedConsole::new(&["5"]);
    menu.run(&mut console, &mut book).await.unwrap();

    assert!(console.printed("1. Add Contact"));
    assert!(console.printed("2. Search Contact"));
    assert!(console.printed("3. Update Contact"));
    assert!(console.printed("4. Delete Contact"));
    assert!(console.printed("5. Exit"));
    assert!(console.printed("Exiting contact book."));
    assert_eq!(console.prompts(), &["Choose an option: ".to_string()]);
}

#[tokio::test]
async fn test_menu_invalid_choice_reports_and_continues() {
    let (menu, _store) = menu_with_store();
    let mut book = ContactBook::new();

    let mut console = ScriptedConsole::new(&["9", "5"]);
    menu.run(&mut console, &mut book).await.unwrap();

    assert!(console.printed("Error: Invalid choice. Please try again."));
    // The menu is shown again after the bad choice
    assert_eq!(console.count_printed("1. Add Contact"), 2);
    assert!(console.printed("Exiting contact book."));
}

#[tokio::test]
async fn test_menu_dispatches_add_and_search() {
    let (menu, store) = menu_with_store();
    let mut book = ContactBook::new();

    let mut console = ScriptedConsole::new(&[
        "1",
        "Alice",
        "5551234567",
        "alice@example.com",
        "2",
        "Alice",
        "5",
    ]);
    menu.run(&mut console, &mut book).await.unwrap();

    assert!(console.printed("Contact Alice added successfully."));
    assert!(console.printed("Name: Alice"));
    assert!(console.printed("Phone: 5551234567"));
    assert_eq!(book.len(), 1);
    assert_eq!(store.get_call_count("save"), 1);
}

#[tokio::test]
async fn test_menu_full_session() {
    let (menu, store) = menu_with_store();
    let mut book = ContactBook::new();

    let mut console = ScriptedConsole::new(&[
        "1",
        "Alice",
        "5551234567",
        "alice@example.com",
        "3",
        "Alice",
        "",
        "alice@work.com",
        "4",
        "Alice",
        "2",
        "Alice",
        "5",
    ]);
    menu.run(&mut console, &mut book).await.unwrap();

    assert!(console.printed("Contact Alice updated successfully."));
    assert!(console.printed("Contact Alice deleted successfully."));
    assert!(console.printed("Error: No contact found with the name 'Alice'."));
    assert!(book.is_empty());
    // Add, update, and delete each persisted once
    assert_eq!(store.get_call_count("save"), 3);
}

#[tokio::test]
async fn test_menu_exits_cleanly_on_closed_input() {
    let (menu, _store) = menu_with_store();
    let mut book = ContactBook::new();

    let mut console = ScriptedConsole::new(&[]);
    menu.run(&mut console, &mut book).await.unwrap();

    // The menu was shown once, then input ended at the choice prompt
    assert_eq!(console.count_printed("1. Add Contact"), 1);
    assert!(!console.printed("Exiting contact book."));
}

#[tokio::test]
async fn test_menu_exits_when_input_closes_mid_operation() {
    let (menu, store) = menu_with_store();
    let mut book = ContactBook::new();

    // "1" starts an add, then input closes at the name prompt
    let mut console = ScriptedConsole::new(&["1"]);
    menu.run(&mut console, &mut book).await.unwrap();

    assert_eq!(console.count_printed("1. Add Contact"), 1);
    assert!(book.is_empty());
    assert_eq!(store.get_call_count("save"), 0);
}
