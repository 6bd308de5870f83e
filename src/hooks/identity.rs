//! Identity hook to get the current user's decoded identity.
use crate::app::SessionStateReducer;
use crate::claims::Identity;
use yew::prelude::*;

/// Gets the identity decoded from the session credential.
///
/// `None` when signed out or when the credential does not decode.
#[hook]
pub fn use_identity() -> UseStateHandle<Option<Identity>> {
    let session =
        use_context::<SessionStateReducer>().expect("`SessionStateReducer` context not found");

    let identity = use_state(|| session.identity.clone());
    {
        let identity = identity.clone();

        use_effect_with(session, move |session| {
            identity.set(session.identity.clone());
        });
    }

    identity
}
