//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::remote::ApiConfig;
use taskboard_core::{ActionResult, Controller, HttpRemote, Session};

use crate::session;
use crate::store::BoardSignal;

pub type AppController = Controller<HttpRemote, BoardSignal>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Projects, tasks, form and status
    pub board: BoardSignal,
    session: StoredValue<Session>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(session: Session, config: ApiConfig) -> Self {
        Self {
            board: BoardSignal::new(),
            session: StoredValue::new(session),
            config: StoredValue::new(config),
        }
    }

    pub fn controller(&self) -> AppController {
        let remote = HttpRemote::new(self.config.get_value(), self.session.get_value());
        Controller::new(remote, self.board)
    }

    /// Run an async board action in the background.
    ///
    /// Failures are already on the status banner; an expired session sends
    /// the user back to the login page.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut + 'static,
        Fut: Future<Output = ActionResult> + 'static,
    {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            if let Err(err) = action(controller).await {
                if err.is_session_expired() {
                    ctx.logout();
                } else {
                    log::debug!("action failed: {err}");
                }
            }
        });
    }

    pub fn logout(&self) {
        session::logout(&self.config.with_value(|c| c.login_path.clone()));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
