use crate::state::flash::FlashMessage;
use leptos::*;

#[component]
fn SuccessIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 text-green-400" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                clip-rule="evenodd"
            ></path>
        </svg>
    }
}

#[component]
fn ErrorIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 text-red-400" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z"
                clip-rule="evenodd"
            ></path>
        </svg>
    }
}

#[component]
pub fn FlashBanner(#[prop(into)] flash: Signal<Option<FlashMessage>>) -> impl IntoView {
    view! {
        <div aria-live="polite">
            {move || {
                flash
                    .get()
                    .map(|message| {
                        let success = message.is_success();
                        let (card_class, text_class) = if success {
                            ("mb-4 p-4 rounded-md bg-green-50", "text-sm font-medium text-green-800")
                        } else {
                            ("mb-4 p-4 rounded-md bg-red-50", "text-sm font-medium text-red-800")
                        };
                        view! {
                            <div class=card_class>
                                <div class="flex">
                                    <div class="flex-shrink-0">
                                        {if success {
                                            view! { <SuccessIcon/> }.into_view()
                                        } else {
                                            view! { <ErrorIcon/> }.into_view()
                                        }}
                                    </div>
                                    <div class="ml-3">
                                        <p class=text_class>{message.text}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::flash::FlashKind;
    use crate::test_support::ssr::render_to_string;
    use chrono::Utc;

    fn message(kind: FlashKind, text: &str) -> FlashMessage {
        FlashMessage {
            kind,
            text: text.into(),
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn renders_success_styling() {
        let html = render_to_string(move || {
            let flash = create_rw_signal(Some(message(FlashKind::Success, "Login successful!")));
            view! { <FlashBanner flash=flash /> }
        });
        assert!(html.contains("Login successful!"));
        assert!(html.contains("bg-green-50"));
        assert!(!html.contains("bg-red-50"));
    }

    #[test]
    fn renders_error_styling() {
        let html = render_to_string(move || {
            let flash = create_rw_signal(Some(message(FlashKind::Error, "Invalid credentials")));
            view! { <FlashBanner flash=flash /> }
        });
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("bg-red-50"));
    }

    #[test]
    fn renders_nothing_without_message() {
        let html = render_to_string(move || {
            let flash = create_rw_signal(None::<FlashMessage>);
            view! { <FlashBanner flash=flash /> }
        });
        assert!(!html.contains("rounded-md"));
    }
}
