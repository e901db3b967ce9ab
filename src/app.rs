//! Taskboard Frontend App
//!
//! Session gate plus the project/task manager layout.

use leptos::prelude::*;
use taskboard_core::{Gate, SessionGate};

use crate::components::{FormModal, ProjectList, SearchBar, StatusBanner, TaskPanel, TitleBar};
use crate::config::api_config;
use crate::context::AppContext;
use crate::session::{redirect_to_login, BrowserCredentials};

#[component]
pub fn App() -> impl IntoView {
    let config = api_config();

    match SessionGate::open(&BrowserCredentials) {
        Gate::Proceed(session) => {
            provide_context(AppContext::new(session, config));
            view! { <ProjectTaskManager /> }.into_any()
        }
        Gate::RedirectToLogin => {
            redirect_to_login(&config.login_path);
            view! { <p class="redirecting">"Redirecting to login..."</p> }.into_any()
        }
    }
}

/// Projects on the left, tasks of the selected project on the right
#[component]
fn ProjectTaskManager() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // Initial load, once per mount
    ctx.spawn(|c| async move { c.load_projects().await });

    view! {
        <div class="app-layout">
            <TitleBar />
            <StatusBanner />
            <div class="board-columns">
                <section class="project-column">
                    <h1>"Your Projects"</h1>
                    <SearchBar />
                    <ProjectList />
                </section>
                <TaskPanel />
            </div>
            <FormModal />
        </div>
    }
}
