use authlist::auth::UserIdentity;
use authlist::constants::HINT_REQUIRED_FIELD;
use authlist::gate::{CredentialDraft, GateEvent};
use authlist::items::{reduce, EditorEvent, ItemEditor};
use authlist::ui::components::{CredentialField, ItemFocus, ItemListComponent, SignInComponent, TextInput};
use authlist::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

mod text_input {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            assert!(input.handle_key(press(KeyCode::Char(c))));
        }
        input
    }

    #[test]
    fn test_typing_appends() {
        let input = typed("héllo");
        assert_eq!(input.value(), "héllo");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut input = typed("ac");
        assert!(!input.handle_key(press(KeyCode::Left)));
        input.handle_key(press(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");

        input.handle_key(press(KeyCode::Home));
        input.handle_key(press(KeyCode::Char('>')));
        assert_eq!(input.value(), ">abc");

        input.handle_key(press(KeyCode::End));
        assert_eq!(input.cursor(), 4);
        input.handle_key(press(KeyCode::Right));
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("abc");
        assert!(input.handle_key(press(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");

        // Delete at the end changes nothing
        assert!(!input.handle_key(press(KeyCode::Delete)));

        input.handle_key(press(KeyCode::Home));
        assert!(!input.handle_key(press(KeyCode::Backspace)));
        assert!(input.handle_key(press(KeyCode::Delete)));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)));
        assert!(input.is_empty());

        // Shifted characters are ordinary input
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert_eq!(input.value(), "A");
    }

    #[test]
    fn test_display_masks_and_shows_cursor() {
        let mut input = typed("pw");
        assert_eq!(input.display(Some('*'), false), "**");
        assert_eq!(input.display(Some('*'), true), "**█");
        input.handle_key(press(KeyCode::Left));
        assert_eq!(input.display(None, true), "p█w");
    }

    #[test]
    fn test_sync_keeps_cursor_when_unchanged() {
        let mut input = typed("abc");
        input.handle_key(press(KeyCode::Home));
        input.sync("abc");
        assert_eq!(input.cursor(), 0);

        input.sync("xy");
        assert_eq!(input.value(), "xy");
        assert_eq!(input.cursor(), 2);

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}

mod sign_in {
    use super::*;

    fn form() -> SignInComponent {
        SignInComponent::new('•')
    }

    #[test]
    fn test_typing_emits_field_changes() {
        let mut form = form();
        assert_eq!(
            form.handle_key_events(press(KeyCode::Char('a'))),
            Action::Gate(GateEvent::EmailChanged("a".to_string()))
        );

        form.handle_key_events(press(KeyCode::Tab));
        assert_eq!(form.focus, CredentialField::Password);
        assert_eq!(
            form.handle_key_events(press(KeyCode::Char('p'))),
            Action::Gate(GateEvent::PasswordChanged("p".to_string()))
        );

        form.handle_key_events(press(KeyCode::BackTab));
        assert_eq!(form.focus, CredentialField::Email);
    }

    #[test]
    fn test_ctrl_t_toggles_mode() {
        let mut form = form();
        assert_eq!(
            form.handle_key_events(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Action::Gate(GateEvent::ToggleMode)
        );
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = form();
        assert_eq!(form.handle_key_events(press(KeyCode::Enter)), Action::None);
        assert_eq!(form.validation_hint, Some(HINT_REQUIRED_FIELD));
        assert_eq!(form.focus, CredentialField::Email);

        form.update_data(&CredentialDraft {
            email: "ada@example.com".to_string(),
            ..CredentialDraft::default()
        });
        assert_eq!(form.handle_key_events(press(KeyCode::Enter)), Action::None);
        assert_eq!(form.focus, CredentialField::Password);
    }

    #[test]
    fn test_submit_with_complete_draft() {
        let mut form = form();
        form.update_data(&CredentialDraft {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            ..CredentialDraft::default()
        });

        assert_eq!(form.handle_key_events(press(KeyCode::Enter)), Action::SubmitCredentials);
        assert_eq!(form.validation_hint, None);
    }

    #[test]
    fn test_typing_clears_validation_hint() {
        let mut form = form();
        form.handle_key_events(press(KeyCode::Enter));
        form.handle_key_events(press(KeyCode::Char('a')));
        assert_eq!(form.validation_hint, None);
    }

    #[test]
    fn test_escape_quits() {
        let mut form = form();
        assert_eq!(form.handle_key_events(press(KeyCode::Esc)), Action::Quit);
    }
}

mod item_list {
    use super::*;

    fn list_with(items: &[&str]) -> ItemListComponent {
        let mut component = ItemListComponent::new(true);
        component.update_data(
            &ItemEditor::with_items(items.iter().copied()),
            Some(&UserIdentity::new("ada@example.com")),
        );
        component
    }

    #[test]
    fn test_input_keys() {
        let mut component = list_with(&[]);
        assert_eq!(component.focus, ItemFocus::Input);
        assert_eq!(component.user_email, "ada@example.com");

        assert_eq!(
            component.handle_key_events(press(KeyCode::Char('m'))),
            Action::Editor(EditorEvent::DraftChanged("m".to_string()))
        );
        assert_eq!(
            component.handle_key_events(press(KeyCode::Enter)),
            Action::Editor(EditorEvent::AddItem)
        );
    }

    #[test]
    fn test_tab_to_empty_list_stays_on_input() {
        let mut component = list_with(&[]);
        component.handle_key_events(press(KeyCode::Tab));
        assert_eq!(component.focus, ItemFocus::Input);
    }

    #[test]
    fn test_list_navigation_and_actions() {
        let mut component = list_with(&["a", "b", "c"]);
        component.handle_key_events(press(KeyCode::Tab));
        assert_eq!(component.focus, ItemFocus::List);

        component.handle_key_events(press(KeyCode::Char('j')));
        component.handle_key_events(press(KeyCode::Down));
        component.handle_key_events(press(KeyCode::Down));
        assert_eq!(component.selected_index, 2);

        component.handle_key_events(press(KeyCode::Char('k')));
        assert_eq!(
            component.handle_key_events(press(KeyCode::Char('d'))),
            Action::Editor(EditorEvent::DeleteItem(1))
        );
        assert_eq!(
            component.handle_key_events(press(KeyCode::Char('e'))),
            Action::Editor(EditorEvent::BeginEdit(1))
        );
    }

    #[test]
    fn test_edit_mode_keys() {
        let mut component = list_with(&["a", "b"]);
        let action = component.update(Action::Editor(EditorEvent::BeginEdit(1)));
        assert_eq!(action, Action::Editor(EditorEvent::BeginEdit(1)));
        assert_eq!(component.focus, ItemFocus::List);

        let editor = reduce(ItemEditor::with_items(["a", "b"]), EditorEvent::BeginEdit(1));
        component.update_data(&editor, None);

        assert_eq!(
            component.handle_key_events(press(KeyCode::Char('!'))),
            Action::Editor(EditorEvent::ScratchChanged("b!".to_string()))
        );
        assert_eq!(component.handle_key_events(press(KeyCode::Esc)), Action::None);
        assert_eq!(
            component.handle_key_events(press(KeyCode::Up)),
            Action::Editor(EditorEvent::BeginEdit(0))
        );
        assert_eq!(
            component.handle_key_events(press(KeyCode::Enter)),
            Action::Editor(EditorEvent::SaveEdit(1))
        );
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let mut component = list_with(&["a", "b"]);
        component.handle_key_events(press(KeyCode::Tab));
        component.handle_key_events(press(KeyCode::Down));
        assert_eq!(component.selected_index, 1);

        component.update_data(&ItemEditor::with_items(["a"]), None);
        assert_eq!(component.selected_index, 0);

        component.update_data(&ItemEditor::new(), None);
        assert_eq!(component.focus, ItemFocus::Input);
    }
}
