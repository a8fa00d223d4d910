//! Drives one sign-in form: agreement gate, submission state machine,
//! the injected authentication service and the outcome flash.

use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable, FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{SignInError, SignInRequest};
use crate::pages::login::utils::{FormInput, ValidationErrors};
use crate::state::agreement::AgreementGate;
use crate::state::flash::{FlashMessage, FlashScheduler, Scheduler};
use crate::state::submission::{Effect, SubmissionController, SubmissionEvent, SubmissionState};

#[async_trait(?Send)]
pub trait AuthService {
    async fn sign_in(&self, request: SignInRequest) -> Result<(), SignInError>;
}

#[async_trait(?Send)]
impl<T: AuthService + ?Sized> AuthService for Rc<T> {
    async fn sign_in(&self, request: SignInRequest) -> Result<(), SignInError> {
        (**self).sign_in(request).await
    }
}

/// Future carrying the one outstanding service call; spawn it on the event loop.
pub type SignInTask = LocalBoxFuture<'static, ()>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInSnapshot {
    pub state: SubmissionState,
    pub errors: ValidationErrors,
    pub agreed: bool,
    pub can_submit: bool,
    pub flash: Option<FlashMessage>,
}

impl SignInSnapshot {
    pub fn pending(&self) -> bool {
        self.state.is_pending()
    }
}

type Observer = Rc<dyn Fn(&SignInSnapshot)>;

#[derive(Default)]
struct Core {
    gate: AgreementGate,
    controller: SubmissionController,
    in_flight: Option<AbortHandle>,
    disposed: bool,
}

struct Shared<A, S: Scheduler> {
    core: RefCell<Core>,
    service: A,
    flash: FlashScheduler<S>,
    observer: RefCell<Option<Observer>>,
}

pub struct SignInWorkflow<A, S: Scheduler> {
    shared: Rc<Shared<A, S>>,
}

impl<A, S: Scheduler> Clone for SignInWorkflow<A, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<A, S> SignInWorkflow<A, S>
where
    A: AuthService + 'static,
    S: Scheduler + 'static,
{
    pub fn new(service: A, scheduler: S) -> Self {
        let shared = Rc::new(Shared {
            core: RefCell::new(Core::default()),
            service,
            flash: FlashScheduler::new(scheduler),
            observer: RefCell::new(None),
        });
        let weak = Rc::downgrade(&shared);
        shared.flash.on_expire(move || {
            if let Some(shared) = weak.upgrade() {
                SignInWorkflow { shared }.dismissed();
            }
        });
        Self { shared }
    }

    pub fn subscribe(&self, observer: impl Fn(&SignInSnapshot) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn snapshot(&self) -> SignInSnapshot {
        let core = self.shared.core.borrow();
        SignInSnapshot {
            state: core.controller.state().clone(),
            errors: core.controller.errors().clone(),
            agreed: core.gate.is_satisfied(),
            can_submit: !core.disposed && core.controller.can_submit(&core.gate),
            flash: self.shared.flash.current(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.snapshot().can_submit
    }

    pub fn set_agreement(&self, value: bool) {
        {
            let mut core = self.shared.core.borrow_mut();
            if core.disposed {
                return;
            }
            core.gate.set(value);
        }
        self.notify();
    }

    /// Returns the request future when, and only when, a service call was issued.
    pub fn submit(&self, input: FormInput) -> Option<SignInTask> {
        let effect = {
            let mut core = self.shared.core.borrow_mut();
            if core.disposed {
                return None;
            }
            let core = &mut *core;
            core.controller
                .handle(&core.gate, SubmissionEvent::Submit(input))
        };

        match effect {
            Effect::SignIn(request) => {
                // A message from the previous attempt must not outlive it.
                self.shared.flash.clear();
                let (handle, registration) = AbortHandle::new_pair();
                self.shared.core.borrow_mut().in_flight = Some(handle);
                log::debug!("sign-in pending for {}", request.email);
                self.notify();

                let shared = Rc::clone(&self.shared);
                let call = async move {
                    let outcome = shared.service.sign_in(request).await;
                    SignInWorkflow { shared }.resolve(outcome);
                };
                Some(Abortable::new(call, registration).map(|_| ()).boxed_local())
            }
            Effect::ShowFieldErrors(errors) => {
                log::debug!("sign-in blocked by {} invalid field(s)", errors.len());
                self.notify();
                None
            }
            _ => None,
        }
    }

    fn resolve(&self, outcome: Result<(), SignInError>) {
        match &outcome {
            Ok(()) => log::info!("sign-in accepted"),
            Err(err) => log::warn!("sign-in failed: {}", err),
        }
        let effect = {
            let mut core = self.shared.core.borrow_mut();
            if core.disposed {
                return;
            }
            core.in_flight = None;
            let core = &mut *core;
            core.controller.handle(&core.gate, outcome.into())
        };
        if let Effect::Flash { kind, text } = effect {
            self.shared.flash.show(kind, text);
            self.notify();
        }
    }

    fn dismissed(&self) {
        let effect = {
            let mut core = self.shared.core.borrow_mut();
            if core.disposed {
                return;
            }
            let core = &mut *core;
            core.controller
                .handle(&core.gate, SubmissionEvent::Dismissed)
        };
        if effect == Effect::Cleared {
            self.notify();
        }
    }

    /// Tears the form down: aborts the call, cancels the timer, detaches the observer.
    pub fn dispose(&self) {
        let in_flight = {
            let mut core = self.shared.core.borrow_mut();
            core.disposed = true;
            core.in_flight.take()
        };
        if let Some(handle) = in_flight {
            handle.abort();
        }
        self.shared.flash.clear();
        self.shared.observer.borrow_mut().take();
    }

    fn notify(&self) {
        let observer = self.shared.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&self.snapshot());
        }
    }
}
