//! Status Banner Component

use leptos::prelude::*;
use taskboard_core::BoardHandle;

use crate::context::use_app_context;

/// Shows the latest error or success message; dismissable
#[component]
pub fn StatusBanner() -> impl IntoView {
    let board = use_app_context().board;

    let current = Memo::new(move |_| board.with(|b| b.status.clone()));

    move || {
        let status = current.get();
        let text = status.text()?.to_string();
        let (class, role) = if status.is_error() {
            ("status-banner error", "alert")
        } else {
            ("status-banner success", "status")
        };
        Some(view! {
            <div class=class role=role>
                <span>{text}</span>
                <button class="dismiss-btn" on:click=move |_| board.update(|b| b.dismiss_status())>
                    "×"
                </button>
            </div>
        })
    }
}
