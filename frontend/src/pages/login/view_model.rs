use super::repository::LoginRepository;
use super::utils::{FormInput, ValidationErrors};
use crate::api::ApiClient;
use crate::state::flash::{BrowserScheduler, FlashMessage, Scheduler};
use crate::state::sign_in::{AuthService, SignInSnapshot, SignInWorkflow};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn input(&self) -> FormInput {
        FormInput::new(self.email.get_untracked(), self.password.get_untracked())
    }
}

pub struct LoginViewModel<A = LoginRepository, S = BrowserScheduler>
where
    A: 'static,
    S: Scheduler + 'static,
{
    pub form: LoginFormState,
    pub snapshot: RwSignal<SignInSnapshot>,
    workflow: StoredValue<SignInWorkflow<A, S>>,
}

impl<A: 'static, S: Scheduler + 'static> Clone for LoginViewModel<A, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static, S: Scheduler + 'static> Copy for LoginViewModel<A, S> {}

impl<A, S> LoginViewModel<A, S>
where
    A: AuthService + 'static,
    S: Scheduler + 'static,
{
    pub fn workflow(&self) -> SignInWorkflow<A, S> {
        self.workflow.get_value()
    }

    pub fn pending(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.pending()))
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.can_submit))
    }

    pub fn agreed(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.agreed))
    }

    pub fn errors(&self) -> Signal<ValidationErrors> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.errors.clone()))
    }

    pub fn flash(&self) -> Signal<Option<FlashMessage>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.flash.clone()))
    }

    pub fn set_agreement(&self, value: bool) {
        self.workflow.with_value(|wf| wf.set_agreement(value));
    }

    pub fn submit(&self) {
        let input = self.form.input();
        if let Some(task) = self.workflow.with_value(|wf| wf.submit(input)) {
            spawn_local(task);
        }
    }
}

/// Mirrors the workflow into signals and disposes it with the owning scope.
pub fn bind_workflow<A, S>(workflow: SignInWorkflow<A, S>) -> LoginViewModel<A, S>
where
    A: AuthService + 'static,
    S: Scheduler + 'static,
{
    let snapshot = create_rw_signal(workflow.snapshot());
    workflow.subscribe(move |next: &SignInSnapshot| snapshot.set(next.clone()));

    let for_cleanup = workflow.clone();
    on_cleanup(move || for_cleanup.dispose());

    LoginViewModel {
        form: LoginFormState::default(),
        snapshot,
        workflow: store_value(workflow),
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    bind_workflow(SignInWorkflow::new(repository, BrowserScheduler))
}
