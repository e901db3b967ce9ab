//! Task Panel Component
//!
//! Tasks of the selected project, with completion checkbox and row actions.

use leptos::prelude::*;
use taskboard_core::{BoardHandle, EntityKind, Task};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn TaskPanel() -> impl IntoView {
    let board = use_app_context().board;

    // Only re-render the panel when the selected project (or its name) changes
    let selected_name = Memo::new(move |_| {
        board.with(|b| {
            b.tasks
                .selected()
                .and_then(|id| b.projects.get(id))
                .map(|p| p.name.clone())
        })
    });

    view! {
        <section class="task-column">
            {move || match selected_name.get() {
                None => view! {
                    <p class="empty-hint">"Select a project to see its tasks."</p>
                }.into_any(),
                Some(name) => view! {
                    <h2>{format!("Tasks for {name}")}</h2>
                    <button
                        class="add-btn"
                        on:click=move |_| board.update(|b| b.modal.open_create(EntityKind::Task))
                    >
                        "+ Add Task"
                    </button>
                    <ul class="task-list">
                        <For
                            each=move || board.with(|b| b.tasks.tasks().to_vec())
                            key=|t| (t.id.clone(), t.title.clone(), t.description.clone())
                            children=move |task| view! { <TaskRow task=task /> }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;
    let id = task.id.clone();

    let completed = {
        let id = id.clone();
        move || board.with(|b| b.tasks.get(&id).is_some_and(|t| t.completed))
    };

    let toggle = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            let current = board.read(|b| b.tasks.get(&id).is_some_and(|t| t.completed));
            ctx.spawn(move |c| async move { c.toggle_task(id, current).await });
        }
    };

    let edit = {
        let id = id.clone();
        move |_| board.update(|b| b.open_edit_task(&id))
    };

    let delete = Callback::new(move |_: ()| {
        let id = id.clone();
        ctx.spawn(move |c| async move { c.delete_task(id).await });
    });

    let row_class = {
        let completed = completed.clone();
        move || if completed() { "task-item completed" } else { "task-item" }
    };

    let title = task.title.clone();

    view! {
        <li class=row_class>
            <input type="checkbox" prop:checked=completed on:change=toggle />
            <div class="task-text">
                <strong>{task.title}</strong>
                {task.description.filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
            </div>
            <div class="row-actions">
                <button class="edit-btn" on:click=edit>"Edit"</button>
                <DeleteConfirmButton kind=EntityKind::Task name=title on_confirm=delete />
            </div>
        </li>
    }
}
