//! Title Bar Component
//!
//! App name, project count and the logout button.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Header across the top of the board
#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;

    let project_count = move || {
        let count = board.with(|b| b.projects.all().len());
        if count == 1 { "1 project".to_string() } else { format!("{count} projects") }
    };

    view! {
        <header class="titlebar">
            <span class="titlebar-title">"Taskboard"</span>
            <span class="titlebar-count">{project_count}</span>
            <button class="logout-btn" on:click=move |_| ctx.logout()>
                "Log out"
            </button>
        </header>
    }
}
