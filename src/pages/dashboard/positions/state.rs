//! Positions editor state.
use crate::api::positions::{Position, PositionInit};
use std::rc::Rc;
use yew::prelude::*;

/// Actions for [`PositionsState`].
#[derive(Debug)]
pub enum PositionsAction {
    /// Replace the collection with the server's response.
    SetPositions(Vec<Position>),

    SetCode(String),
    SetName(String),

    /// Load an item into the form for editing.
    BeginEdit(Position),

    /// Clear the form and leave edit mode.
    CancelEdit,

    /// Reset the form after a successful save.
    ClearForm,

    SetError(Option<String>),
    SetLoading(bool),
}

/// State of the positions editor.
///
/// The collection mirrors the server's response order; the form holds at
/// most one item's fields, in create mode when `editing` is `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionsState {
    /// All positions, in server order.
    pub positions: Vec<Position>,

    pub code: String,
    pub name: String,

    /// Id of the item being edited, `None` in create mode.
    pub editing: Option<i64>,

    pub error: Option<String>,
    pub loading: bool,
}

impl PositionsState {
    /// Form contents, trimmed and validated.
    pub fn form(&self) -> Result<PositionInit, &'static str> {
        let code = self.code.trim();
        let name = self.name.trim();

        if code.is_empty() || name.is_empty() {
            return Err("Both fields are required");
        }

        Ok(PositionInit {
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

impl Reducible for PositionsState {
    type Action = PositionsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();

        match action {
            PositionsAction::SetPositions(positions) => {
                current.positions = positions;
            }

            PositionsAction::SetCode(code) => {
                current.code = code;
            }

            PositionsAction::SetName(name) => {
                current.name = name;
            }

            PositionsAction::BeginEdit(position) => {
                current.code = position.code;
                current.name = position.name;
                current.editing = Some(position.id);
            }

            PositionsAction::CancelEdit => {
                current.code = String::new();
                current.name = String::new();
                current.editing = None;
                current.error = None;
            }

            PositionsAction::ClearForm => {
                current.code = String::new();
                current.name = String::new();
                current.editing = None;
            }

            PositionsAction::SetError(error) => {
                current.error = error;
            }

            PositionsAction::SetLoading(loading) => {
                current.loading = loading;
            }
        };

        current.into()
    }
}

pub type PositionsStateReducer = UseReducerHandle<PositionsState>;
pub type PositionsStateDispatcher = UseReducerDispatcher<PositionsState>;

#[cfg(test)]
#[path = "./state_test.rs"]
mod state_test;
