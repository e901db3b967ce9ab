//! Form Modal Component
//!
//! Single modal shared by project and task create/edit. The buffer lives in
//! the board's `Modal`, so closing and reopening always starts from the state
//! the board decides.

use leptos::prelude::*;
use taskboard_core::{BoardHandle, EntityKind, Form};

use crate::context::use_app_context;
use crate::store::BoardSignal;

/// Apply an input change to the open form, if any
fn edit_form(board: BoardSignal, f: impl FnOnce(&mut Form)) {
    board.update(|b| {
        if let Some(form) = b.modal.form_mut() {
            f(form);
        }
    });
}

#[component]
pub fn FormModal() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;

    let is_open = move || board.with(|b| b.modal.is_open());
    let kind = Memo::new(move |_| board.with(|b| b.modal.form().map(Form::kind)));
    let is_task = move || kind.get() == Some(EntityKind::Task);

    let heading = move || board.with(|b| b.modal.form().map(Form::heading).unwrap_or_default());
    let submit_label = move || board.with(|b| b.modal.form().map(Form::submit_label).unwrap_or_default());
    let primary = move || board.with(|b| b.modal.form().map(|f| f.primary().to_string()).unwrap_or_default());
    let description =
        move || board.with(|b| b.modal.form().map(|f| f.description().to_string()).unwrap_or_default());
    let completed = move || board.with(|b| b.modal.form().and_then(Form::completed).unwrap_or(false));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|c| async move { c.submit().await });
    };

    let cancel = move |_| board.update(|b| b.modal.cancel());

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=cancel>
                <form
                    class="modal"
                    on:submit=on_submit
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2>{heading}</h2>

                    <div class="input-group">
                        <label>{move || if is_task() { "Task Title" } else { "Project Name" }}</label>
                        <input
                            type="text"
                            required=true
                            prop:value=primary
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_form(board, |f| f.set_primary(value));
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label>"Description"</label>
                        <textarea
                            prop:value=description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_form(board, |f| f.set_description(value));
                            }
                        />
                    </div>

                    <Show when=is_task>
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=completed
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    edit_form(board, |f| f.set_completed(checked));
                                }
                            />
                            "Completed"
                        </label>
                    </Show>

                    <div class="modal-actions">
                        <button type="submit" class="submit-btn">{submit_label}</button>
                        <button type="button" class="cancel-btn" on:click=cancel>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
