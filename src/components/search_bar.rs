//! Search Bar Component
//!
//! Filters the project list by name; never talks to the server.

use leptos::prelude::*;
use taskboard_core::BoardHandle;

use crate::context::use_app_context;

#[component]
pub fn SearchBar() -> impl IntoView {
    let board = use_app_context().board;

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search projects..."
                prop:value=move || board.with(|b| b.projects.query().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    board.update(|b| b.projects.search(query));
                }
            />
        </div>
    }
}
