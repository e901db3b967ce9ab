//! Project List Component
//!
//! Filtered projects with select / edit / delete actions.

use leptos::prelude::*;
use taskboard_core::{BoardHandle, EntityKind, Project};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

const NO_DESCRIPTION: &str = "No description available.";

#[component]
pub fn ProjectList() -> impl IntoView {
    let board = use_app_context().board;
    let is_empty = move || board.with(|b| b.projects.visible().is_empty());

    view! {
        <button
            class="add-btn"
            on:click=move |_| board.update(|b| b.modal.open_create(EntityKind::Project))
        >
            "+ Add Project"
        </button>

        <ul class="project-list">
            <For
                each=move || board.with(|b| b.projects.visible().to_vec())
                key=|p| (p.id.clone(), p.name.clone(), p.description.clone())
                children=move |project| view! { <ProjectRow project=project /> }
            />
        </ul>

        <Show when=is_empty>
            <p class="empty-hint">"No projects found."</p>
        </Show>
    }
}

/// A single project; clicking it loads its tasks
#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;
    let id = project.id.clone();

    let is_selected = {
        let id = id.clone();
        move || board.with(|b| b.tasks.selected() == Some(&id))
    };

    let select = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            ctx.spawn(move |c| async move { c.select_project(id).await });
        }
    };

    let edit = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            board.update(|b| b.open_edit_project(&id));
        }
    };

    let delete = Callback::new(move |_: ()| {
        let id = id.clone();
        ctx.spawn(move |c| async move { c.delete_project(id).await });
    });

    let description = project
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let name = project.name.clone();

    view! {
        <li
            class=move || if is_selected() { "project-item selected" } else { "project-item" }
            on:click=select
        >
            <h2>{project.name}</h2>
            <p>{description}</p>
            <div class="row-actions">
                <button class="edit-btn" on:click=edit>"Edit"</button>
                <DeleteConfirmButton kind=EntityKind::Project name=name on_confirm=delete />
            </div>
        </li>
    }
}
