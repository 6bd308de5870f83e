use super::*;
use crate::api::positions::{Position, PositionInit};
use std::rc::Rc;
use yew::Reducible;

fn manager() -> Position {
    Position {
        id: 1,
        code: "MGR".to_string(),
        name: "Manager".to_string(),
    }
}

#[test]
fn begin_edit_should_copy_item_into_form() {
    let state = Rc::new(PositionsState::default());
    let state = state.reduce(PositionsAction::BeginEdit(manager()));

    assert_eq!(state.code, "MGR");
    assert_eq!(state.name, "Manager");
    assert_eq!(state.editing, Some(1), "begin edit should track the item id");
}

#[test]
fn cancel_edit_should_reset_form_and_error() {
    let state = Rc::new(PositionsState::default());
    let state = state.reduce(PositionsAction::BeginEdit(manager()));
    let state = state.reduce(PositionsAction::SetError(Some("save failed".to_string())));
    let state = state.reduce(PositionsAction::CancelEdit);

    assert!(state.code.is_empty());
    assert!(state.name.is_empty());
    assert_eq!(state.editing, None);
    assert_eq!(state.error, None);
}

#[test]
fn clear_form_should_leave_collection_untouched() {
    let state = Rc::new(PositionsState::default());
    let state = state.reduce(PositionsAction::SetPositions(vec![manager()]));
    let state = state.reduce(PositionsAction::BeginEdit(manager()));
    let state = state.reduce(PositionsAction::ClearForm);

    assert!(state.code.is_empty());
    assert!(state.name.is_empty());
    assert_eq!(state.editing, None, "a saved form leaves edit mode");
    assert_eq!(state.positions, vec![manager()]);
}

#[test]
fn form_should_require_both_fields() {
    let state = Rc::new(PositionsState::default());
    assert!(state.form().is_err(), "empty form should not validate");

    let state = state.clone().reduce(PositionsAction::SetCode("MGR".to_string()));
    let state = state.reduce(PositionsAction::SetName("   ".to_string()));

    assert_eq!(
        state.form(),
        Err("Both fields are required"),
        "whitespace only fields should not validate"
    );
}

#[test]
fn form_should_trim_fields() {
    let state = Rc::new(PositionsState::default());
    let state = state.reduce(PositionsAction::SetCode(" MGR ".to_string()));
    let state = state.reduce(PositionsAction::SetName(" Manager ".to_string()));

    assert_eq!(
        state.form(),
        Ok(PositionInit {
            code: "MGR".to_string(),
            name: "Manager".to_string(),
        })
    );
}

#[test]
fn set_positions_should_replace_collection_in_server_order() {
    let first = manager();
    let second = Position {
        id: 2,
        code: "DEV".to_string(),
        name: "Developer".to_string(),
    };

    let state = Rc::new(PositionsState::default());
    let state = state.reduce(PositionsAction::SetPositions(vec![
        second.clone(),
        first.clone(),
    ]));
    assert_eq!(state.positions, vec![second.clone(), first.clone()]);

    // re-fetching an unchanged collection is idempotent
    let state = state.reduce(PositionsAction::SetPositions(vec![
        second.clone(),
        first.clone(),
    ]));
    assert_eq!(state.positions, vec![second, first]);
}
