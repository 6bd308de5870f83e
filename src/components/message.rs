//! User facing messages.
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: AttrValue,
}

/// Inline error banner.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class={classes!("message", "message-error")}>
            { props.message.clone() }
        </div>
    }
}
