//! Transient status notices, stacked bottom-center.
//!
//! Entries expire on their own after a per-notice duration; clicking one
//! dismisses it early.

use std::time::Duration;

use dioxus::prelude::*;

const DEFAULT_NOTICE: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn accent(self) -> &'static str {
        match self {
            ToastLevel::Success => "var(--pico-color-green-500)",
            ToastLevel::Error => "var(--pico-color-red-500)",
            ToastLevel::Info => "var(--pico-primary)",
        }
    }
}

/// An optional tappable follow-up rendered under the message.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastAction {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    level: ToastLevel,
    message: String,
    action: Option<ToastAction>,
}

/// Handle for pushing notices, provided as a context from the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Creates the backing signals and registers the handle in context.
    /// Call once, from the root component.
    pub fn provide() -> Self {
        let entries = use_signal(Vec::new);
        let next_id = use_signal(|| 0u64);
        use_context_provider(|| Self { entries, next_id })
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into(), None, DEFAULT_NOTICE);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into(), None, DEFAULT_NOTICE);
    }

    /// An informational notice with a custom display time.
    pub fn info_for(&mut self, message: impl Into<String>, duration: Duration) {
        self.push(ToastLevel::Info, message.into(), None, duration);
    }

    /// An error notice carrying a tappable link, shown for `duration`.
    pub fn error_with_action(
        &mut self,
        message: impl Into<String>,
        action: ToastAction,
        duration: Duration,
    ) {
        self.push(ToastLevel::Error, message.into(), Some(action), duration);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.with_mut(|list| list.retain(|toast| toast.id != id));
    }

    fn push(
        &mut self,
        level: ToastLevel,
        message: String,
        action: Option<ToastAction>,
        duration: Duration,
    ) {
        let id = (self.next_id)();
        self.next_id.set(id + 1);
        self.entries.with_mut(|list| {
            list.push(Toast {
                id,
                level,
                message,
                action,
            })
        });

        // Self-expire. The id check means an early manual dismiss (or a
        // reused slot) is not double-removed.
        let mut entries = self.entries;
        spawn(async move {
            crate::compat::sleep(duration).await;
            entries.with_mut(|list| list.retain(|toast| toast.id != id));
        });
    }
}

/// Renders the active notices. Mount once, after the main content.
#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_context::<Toasts>();
    let entries = (toasts.entries)();

    rsx! {
        div {
            style: "position: fixed; bottom: 1.5rem; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; gap: 0.5rem; z-index: 1000; width: max-content; max-width: 90vw;",
            for toast in entries {
                article {
                    key: "{toast.id}",
                    style: "margin: 0; padding: 0.6rem 1rem; border-left: 4px solid {toast.level.accent()}; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.25); cursor: pointer;",
                    onclick: move |_| toasts.dismiss(toast.id),
                    p {
                        style: "margin: 0;",
                        "{toast.message}"
                    }
                    if let Some(action) = &toast.action {
                        a {
                            href: "{action.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}
