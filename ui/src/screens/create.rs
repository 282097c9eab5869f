//=============================================================================
// File: src/screens/create.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, Card, Input};
use crate::components::toast::Toasts;
use crate::link::UpiLink;
use crate::Screen;

#[component]
pub fn CreateScreen() -> Element {
    let mut state = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut toasts = use_context::<Toasts>();

    let on_create = move |_| {
        let outcome = UpiLink::build(&state.payee_id.read(), &state.amount.read());
        let next = active_screen().after_generation(outcome.is_ok());
        match outcome {
            Ok(link) => {
                info!("generated payment link for {}", link.payee_id());
                state.payment_link.set(Some(link));
                toasts.success("Payment link generated!");
            }
            Err(err) => toasts.error(err.to_string()),
        }
        active_screen.set(next);
    };

    rsx! {
        Card {
            h2 {
                style: "text-align: center;",
                "Create Shareable Link for UPI Payment"
            }
            Input {
                label: "Enter Your VPA (UPI ID)".to_string(),
                name: "payee_id",
                placeholder: "example@upi",
                value: "{state.payee_id}",
                on_input: move |evt: FormEvent| state.payee_id.set(evt.value().clone()),
            }
            Input {
                label: "Amount in ₹ (Optional)".to_string(),
                name: "amount",
                input_type: "number".to_string(),
                placeholder: "0",
                value: "{state.amount}",
                on_input: move |evt: FormEvent| state.amount.set(evt.value().clone()),
            }
            div {
                style: "margin-top: 1rem;",
                Button {
                    on_click: on_create,
                    "CREATE"
                }
            }
        }
    }
}
