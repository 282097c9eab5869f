//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::link::UpiLink;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the
/// fixed `AppState` context.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The payee VPA as typed into the form.
    pub payee_id: Signal<String>,
    /// The optional amount as typed; empty when left blank.
    pub amount: Signal<String>,
    /// The most recently generated link. Replaced wholesale on the next
    /// CREATE; never persisted.
    pub payment_link: Signal<Option<UpiLink>>,
}
