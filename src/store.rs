//! Reactive Board Store
//!
//! The core [`Board`] held in a Leptos signal so views re-render on change.

use leptos::prelude::*;
use taskboard_core::{Board, BoardHandle};

/// Board state shared by every component
#[derive(Clone, Copy)]
pub struct BoardSignal(pub RwSignal<Board>);

impl BoardSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(Board::new()))
    }

    /// Tracked read for use inside views
    pub fn with<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        self.0.with(f)
    }
}

impl BoardHandle for BoardSignal {
    fn update<T>(&self, f: impl FnOnce(&mut Board) -> T) -> T {
        f(&mut *self.0.write())
    }

    fn read<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        self.0.with_untracked(f)
    }
}
