//! Session state.
use crate::claims::{self, Identity};
use crate::credentials::CredentialStore;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug)]
pub enum SessionAction {
    /// Persist the credential obtained from the login exchange.
    SignIn(String),

    /// Discard the session and its stored credential.
    SignOut,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SessionState {
    /// Stored bearer credential.
    pub token: Option<String>,

    /// Identity decoded from the credential, for display.
    pub identity: Option<Identity>,

    credentials: CredentialStore,
}

impl SessionState {
    /// Loads the session from the credential store.
    ///
    /// The read is synchronous, so the first render already knows whether
    /// the session is authorized and protected views never flash.
    pub fn load() -> Self {
        let credentials = CredentialStore::default();
        let token = credentials.read();
        let identity = token.as_deref().and_then(claims::decode);

        Self {
            token,
            identity,
            credentials,
        }
    }

    /// Returns whether a session credential is present.
    ///
    /// Presence is the only criterion: a credential that does not decode
    /// is still sent to the server, which remains the authority on
    /// validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    #[tracing::instrument(level = "debug", skip(self))]
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();

        match action {
            SessionAction::SignIn(token) => {
                current.credentials.save(&token);
                current.identity = claims::decode(&token);
                current.token = Some(token);
            }

            SessionAction::SignOut => {
                current.credentials.clear();
                current.token = None;
                current.identity = None;
            }
        };

        current.into()
    }
}

pub type SessionStateReducer = UseReducerHandle<SessionState>;
pub type SessionStateDispatcher = UseReducerDispatcher<SessionState>;
