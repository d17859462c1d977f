use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

/// Single error banner. No retry affordance.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div role="alert" class="alert alert-error my-4" data-testid="analytics-error">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
