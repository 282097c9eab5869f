//=============================================================================
// File: src/screens/pay.rs
//=============================================================================
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, Card, CopyButton};
use crate::components::qr_code::QrCodeView;
use crate::components::toast::{ToastAction, Toasts};
use crate::launch::{plan_launch, schedule, Deadline, HandoffWatch, LaunchAction};

// Notice durations: the no-app fallback lingers longer than the scan hint.
const NO_APP_NOTICE: Duration = Duration::from_secs(5);
const SCAN_HINT_NOTICE: Duration = Duration::from_secs(4);

/// Keeps the fallback timer and the blur subscription alive for one launch
/// attempt. Dropping it (a newer attempt, or the pane unmounting) cancels
/// both.
struct LaunchAttempt {
    _deadline: Deadline,
    _blur: Option<compat::BlurListener>,
}

#[component]
pub fn PayScreen() -> Element {
    let app = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut toasts = use_context::<Toasts>();

    let mut attempt = use_signal::<Option<LaunchAttempt>>(|| None);

    let Some(link) = (state.payment_link)() else {
        return rsx! {
            EmptyState {
                title: "No payment link yet".to_string(),
                description: "Generate a payment link first".to_string(),
            }
        };
    };

    let amount_text = match link.amount() {
        Some(amount) => format!("₹{amount}"),
        None => "custom amount".to_string(),
    };
    let uri = link.uri().to_string();

    let on_pay_now = {
        let app = app.clone();
        let uri = uri.clone();
        move |_| match plan_launch(app.device.as_ref(), &app.launch) {
            LaunchAction::Redirect { fallback_after } => {
                info!("handing the payment link to the platform");

                // The race: the fallback notice fires after the delay unless
                // the window loses focus first. Focus loss is our only hint
                // that an app took over.
                let watch = Rc::new(RefCell::new(HandoffWatch::new()));
                let blur = compat::on_window_blur({
                    let watch = Rc::clone(&watch);
                    move || watch.borrow_mut().cancel()
                });
                let deadline = schedule(fallback_after, {
                    let watch = Rc::clone(&watch);
                    let store_url = app.launch.store_url;
                    let mut toasts = toasts;
                    move || {
                        if watch.borrow_mut().deadline_elapsed() {
                            toasts.error_with_action(
                                "No UPI payment app found!",
                                ToastAction {
                                    label: "Download Google Pay".to_string(),
                                    href: store_url.to_string(),
                                },
                                NO_APP_NOTICE,
                            );
                        }
                    }
                });
                attempt.set(Some(LaunchAttempt {
                    _deadline: deadline,
                    _blur: blur,
                }));

                if !compat::navigate_to(&uri) {
                    warn!("navigation to the payment link failed");
                }
            }
            LaunchAction::ScanHint => {
                toasts.info_for(
                    "Please scan the QR code with your mobile UPI app to pay, or use the copied link on your mobile device",
                    SCAN_HINT_NOTICE,
                );
            }
        }
    };

    rsx! {
        Card {
            div {
                style: "text-align: center;",
                div {
                    style: "display: inline-block; background: white; padding: 1rem; border-radius: var(--pico-border-radius);",
                    QrCodeView {
                        data: uri.clone(),
                        caption: "Scan with any UPI app to pay, or use the Pay button below.".to_string(),
                    }
                }
                p {
                    style: "margin-top: 1rem; margin-bottom: 0;",
                    "You are paying {amount_text}"
                }
                p {
                    style: "color: var(--pico-muted-color); margin: 0;",
                    "to"
                }
                p {
                    code { "{link.payee_id()}" }
                }
                div {
                    style: "margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem;",
                    Button {
                        on_click: on_pay_now,
                        "Pay Now"
                    }
                    CopyButton {
                        text_to_copy: uri,
                        label: "Copy Payment Link".to_string(),
                        on_copy: move |ok: bool| {
                            if ok {
                                toasts.success("Link copied to clipboard!");
                            } else {
                                toasts.error("Could not copy the link to the clipboard");
                            }
                        },
                    }
                }
            }
        }
    }
}
