use leptos::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <p class="mt-2 text-xs font-thin text-red-600">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn field_error_renders_message() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Invalid email address".to_string()));
            view! { <FieldError message=message /> }
        });
        assert!(html.contains("Invalid email address"));
        assert!(html.contains("text-red-600"));
    }

    #[test]
    fn field_error_hidden_without_message() {
        let html = render_to_string(move || {
            let message = create_rw_signal(None::<String>);
            view! { <FieldError message=message /> }
        });
        assert!(!html.contains("text-red-600"));
    }
}
