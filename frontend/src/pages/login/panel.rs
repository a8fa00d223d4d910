use crate::pages::login::{
    components::{flash::FlashBanner, form::LoginForm, social::SocialSignIn},
    view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let email_input = Callback::new(move |value: String| vm.form.email.set(value));
    let password_input = Callback::new(move |value: String| vm.form.password.set(value));
    let agreement_change = Callback::new(move |checked: bool| vm.set_agreement(checked));

    view! {
        <div>
            <FlashBanner flash=vm.flash() />
            <LoginForm
                email=vm.form.email
                password=vm.form.password
                errors=vm.errors()
                agreed=vm.agreed()
                pending=vm.pending()
                can_submit=vm.can_submit()
                on_email_input=email_input
                on_password_input=password_input
                on_agreement_change=agreement_change
                on_submit=handle_submit
            />
            <SocialSignIn />
        </div>
    }
}
