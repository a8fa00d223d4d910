use crate::{
    components::error::FieldError,
    pages::login::utils::{Field, ValidationErrors},
};
use leptos::{ev::SubmitEvent, *};

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "border-red-500 appearance-none block w-full px-1 py-1 border-b border-gray-500 placeholder-gray-400 focus:outline-none sm:text-sm"
    } else {
        "focus:ring-indigo-500 focus:border-indigo-500 appearance-none block w-full px-1 py-1 border-b border-gray-500 placeholder-gray-400 focus:outline-none sm:text-sm"
    }
}

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] errors: Signal<ValidationErrors>,
    #[prop(into)] agreed: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_agreement_change: Callback<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field_error =
        move |field: Field| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));
    let invalid = move |field: Field| errors.with(|e| e.get(field).is_some());

    view! {
        <form class="space-y-6" on:submit=move |ev: SubmitEvent| on_submit.call(ev)>
            <div>
                <label for="email" class="block text-sm font-medium text-gray-700">
                    "Email address"
                </label>
                <div class="mt-0">
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        required
                        class=move || input_class(invalid(Field::Email))
                        prop:value=email
                        on:input=move |ev| on_email_input.call(event_target_value(&ev))
                    />
                </div>
                <FieldError message=field_error(Field::Email) />
            </div>

            <div>
                <label for="password" class="block text-sm font-medium text-gray-700">
                    "Password"
                </label>
                <div class="mt-0">
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        required
                        class=move || input_class(invalid(Field::Password))
                        prop:value=password
                        on:input=move |ev| on_password_input.call(event_target_value(&ev))
                    />
                </div>
                <FieldError message=field_error(Field::Password) />
            </div>

            <div class="flex items-center">
                <input
                    id="terms"
                    type="checkbox"
                    class="rounded border-gray-300"
                    prop:checked=agreed
                    on:change=move |ev| on_agreement_change.call(event_target_checked(&ev))
                />
                <label for="terms" class="ml-2 text-sm text-gray-600 cursor-pointer">
                    "I agree to all "
                    <a href="/terms" class="text-black font-semibold hover:underline">
                        "Terms & Conditions"
                    </a>
                </label>
            </div>

            <button
                type="submit"
                disabled=move || !can_submit.get()
                class="w-full rounded-md bg-black disabled:cursor-not-allowed py-2 text-white hover:bg-gray-800"
            >
                {move || if pending.get() { "Loading..." } else { "Log in" }}
            </button>
        </form>
    }
}
