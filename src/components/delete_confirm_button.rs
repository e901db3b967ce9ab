//! Delete Confirm Button Component
//!
//! Two-step delete for board rows: the first click asks, the second deletes.

use leptos::prelude::*;
use taskboard_core::EntityKind;

/// Row delete button that names what it is about to delete.
///
/// Clicks never reach the row underneath, so asking for confirmation does not
/// also select the project.
#[component]
pub fn DeleteConfirmButton(
    kind: EntityKind,
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let prompt = kind.delete_prompt(&name);
    let label = format!("Delete {}", kind.noun());

    move || {
        if !asking.get() {
            return view! {
                <button
                    class="delete-btn"
                    title=label.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(true);
                    }
                >
                    "Delete"
                </button>
            }
            .into_any();
        }

        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        }
        .into_any()
    }
}
