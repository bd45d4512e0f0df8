//! Single-slot confirmation dialog state.
//!
//! [`ConfirmContext::new`] is the one wiring point: it hands out a cloneable
//! [`Confirmer`] for anything that wants to ask the user, and the only
//! [`ConfirmSurface`], which displays the request and resolves it.

use askama::Template;
use std::{cell::RefCell, fmt, rc::Rc};
use thiserror::Error;

type Action = Box<dyn FnOnce() -> anyhow::Result<()>>;
type Listener = Box<dyn Fn(&ConfirmView)>;

#[derive(Debug, Error)]
#[error("confirmed action failed: {0}")]
pub struct ActionError(pub anyhow::Error);

#[derive(Default)]
struct ConfirmationRequest {
    is_open: bool,
    title: String,
    message: String,
    action: Option<Action>,
}

impl fmt::Debug for ConfirmationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationRequest")
            .field("is_open", &self.is_open)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("action", &self.action.is_some())
            .finish()
    }
}

impl ConfirmationRequest {
    fn view(&self) -> ConfirmView {
        ConfirmView {
            is_open: self.is_open,
            title: self.title.clone(),
            message: self.message.clone(),
        }
    }
}

/// What the surface displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmView {
    pub is_open: bool,
    pub title: String,
    pub message: String,
}

#[derive(Default)]
struct Shared {
    request: RefCell<ConfirmationRequest>,
    listener: RefCell<Option<Listener>>,
}

impl Shared {
    fn notify(&self) {
        let view = self.request.borrow().view();
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&view);
        }
    }

    fn reset(&self) {
        *self.request.borrow_mut() = ConfirmationRequest::default();
        self.notify();
    }
}

pub struct ConfirmContext;

impl ConfirmContext {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Confirmer, ConfirmSurface) {
        let shared = Rc::new(Shared::default());
        (
            Confirmer {
                shared: Rc::clone(&shared),
            },
            ConfirmSurface { shared },
        )
    }
}

#[derive(Clone)]
pub struct Confirmer {
    shared: Rc<Shared>,
}

impl Confirmer {
    /// Replaces whatever is pending. A previous action is dropped unrun.
    pub fn request_confirmation<F>(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        action: F,
    ) where
        F: FnOnce() -> anyhow::Result<()> + 'static,
    {
        let title = title.into();
        let replaced = {
            let mut request = self.shared.request.borrow_mut();
            let replaced = request.is_open;
            *request = ConfirmationRequest {
                is_open: true,
                title,
                message: message.into(),
                action: Some(Box::new(action)),
            };
            replaced
        };
        if replaced {
            tracing::debug!("pending confirmation overwritten");
        }
        self.shared.notify();
    }
}

/// Puts the slot back to closed when dropped, unwinding included.
struct ResetGuard<'a>(&'a Shared);

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        self.0.reset();
    }
}

/// Where the dialog submits and what it carries along.
#[derive(Debug, Default)]
pub struct DialogForm<'a> {
    pub action: &'a str,
    pub confirm_label: &'a str,
    pub cancel_label: &'a str,
    pub hidden: Vec<HiddenField<'a>>,
}

#[derive(Debug)]
pub struct HiddenField<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

#[derive(Template)]
#[template(path = "confirm.html")]
struct ConfirmTemplate<'a> {
    view: &'a ConfirmView,
    form: &'a DialogForm<'a>,
}

pub struct ConfirmSurface {
    shared: Rc<Shared>,
}

impl ConfirmSurface {
    pub fn view(&self) -> ConfirmView {
        self.shared.request.borrow().view()
    }

    pub fn has_pending_action(&self) -> bool {
        self.shared.request.borrow().action.is_some()
    }

    /// Re-render hook, called with the new view after every change.
    ///
    /// The listener also runs while an action's panic unwinds, so it must not
    /// panic itself.
    pub fn on_change(&self, listener: impl Fn(&ConfirmView) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Runs the pending action if `confirmed`, then closes the dialog.
    ///
    /// The slot is reset on every exit path before control returns to the
    /// caller. An error from the action is returned after the reset and a
    /// panic keeps unwinding after it.
    pub fn resolve(&self, confirmed: bool) -> Result<(), ActionError> {
        let action = {
            let mut request = self.shared.request.borrow_mut();
            if !request.is_open {
                return Ok(());
            }
            request.action.take()
        };
        let _guard = ResetGuard(&self.shared);

        match action {
            Some(action) if confirmed => action().map_err(ActionError),
            _ => Ok(()),
        }
    }

    /// Dialog markup for the current view; empty while closed.
    pub fn render(&self, form: &DialogForm<'_>) -> askama::Result<String> {
        let view = self.view();
        ConfirmTemplate { view: &view, form }.render()
    }
}
