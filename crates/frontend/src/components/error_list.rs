//! Flattened server error display

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorListProps {
    pub errors: Vec<String>,
}

/// Renders the extracted server error messages, one line each
#[function_component(ErrorList)]
pub fn error_list(props: &ErrorListProps) -> Html {
    if props.errors.is_empty() {
        return html! {};
    }

    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-4">
            <ul class="text-sm text-red-700 list-none m-0 p-0 space-y-1">
                { for props.errors.iter().map(|error| html! { <li>{error}</li> }) }
            </ul>
        </div>
    }
}
