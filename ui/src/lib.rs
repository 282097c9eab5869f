// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod launch;
pub mod link;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::toast::{Toaster, Toasts};
use screens::create::CreateScreen;
use screens::pay::PayScreen;

/// Enum to represent the two panes of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Create,
    Pay,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Create => "Create",
            Screen::Pay => "Pay",
        }
    }

    /// Tab to show after a link-generation attempt: success lands on the
    /// pay pane, failure stays put.
    #[must_use]
    pub fn after_generation(self, generated: bool) -> Self {
        if generated {
            Screen::Pay
        } else {
            self
        }
    }
}

/// A list of all available screens for the tab bar.
const ALL_SCREENS: [Screen; 2] = [Screen::Create, Screen::Pay];

/// The two-pane navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    body {
        background-color: var(--pico-muted-border-color);
    }

    /* Phone-sized column, centered on larger screens */
    main.container {
        max-width: 430px;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu ul {
        display: flex;
        width: 100%;
        margin: 0 0 1.5rem 0;
        padding: 0.25rem;
        list-style: none;
        background-color: var(--pico-card-background-color);
        border-radius: var(--pico-border-radius);
        box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    }

    .tab-menu li {
        flex: 1;
        list-style: none;
        text-align: center;
    }

    .tab-menu a {
        display: block;
        padding: 0.6rem 0;
        border-radius: var(--pico-border-radius);
        text-decoration: none;
        color: var(--pico-muted-color);
    }

    .tab-menu a.active-tab {
        background-color: var(--pico-primary);
        color: var(--pico-primary-inverse);
    }
"#;

    // Fixed context: device classification plus the launch policy.
    use_context_provider(AppState::detect);

    // Reactive form state.
    let payee_id = use_signal(String::new);
    let amount = use_signal(String::new);
    let payment_link = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        payee_id,
        amount,
        payment_link,
    });

    // Transient notices.
    Toasts::provide();

    // --- Provide the active_screen signal to the context ---
    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        Container {
            header {
                style: "text-align: center; padding-top: 2rem; margin-bottom: 1.5rem;",
                h1 {
                    style: "margin-bottom: 0.25rem;",
                    "UPI PayLink"
                }
                p {
                    style: "color: var(--pico-muted-color); margin: 0;",
                    "Shareable payment links for UPI"
                }
            }
            Tabs {
                active_screen,
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Create => rsx! {
                        CreateScreen {}
                    },
                    Screen::Pay => rsx! {
                        PayScreen {}
                    },
                }
            }
            footer {
                style: "margin-top: 2rem; text-align: center; font-size: 0.85rem; color: var(--pico-muted-color);",
                p {
                    "Links are built locally in your browser; nothing is stored or sent anywhere."
                }
                p {
                    style: "font-weight: bold;",
                    "# Go Cashless"
                }
            }
        }
        Toaster {}
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn generation_success_activates_pay_tab() {
        assert_eq!(Screen::Create.after_generation(true), Screen::Pay);
        assert_eq!(Screen::Pay.after_generation(true), Screen::Pay);
    }

    #[test]
    fn generation_failure_leaves_tab_unchanged() {
        assert_eq!(Screen::Create.after_generation(false), Screen::Create);
        assert_eq!(Screen::Pay.after_generation(false), Screen::Pay);
    }

    #[test]
    fn tab_names() {
        assert_eq!(Screen::Create.name(), "Create");
        assert_eq!(Screen::Pay.name(), "Pay");
    }
}
