//! Quantity readout with -/+ buttons.
//!
//! The buttons are display-only; quantities are not editable yet.

#[cfg(test)]
#[path = "quantity_stepper_test.rs"]
mod quantity_stepper_test;

use leptos::prelude::*;

/// Text shown next to the stepper.
pub fn quantity_label(quantity: u32) -> String {
    format!("Qty: {quantity}")
}

#[component]
pub fn QuantityStepper(quantity: u32) -> impl IntoView {
    view! {
        <div class="quantity-stepper">
            <button class="quantity-stepper__step quantity-stepper__step--minus">"-"</button>
            <span class="quantity-stepper__value">{quantity_label(quantity)}</span>
            <button class="quantity-stepper__step quantity-stepper__step--plus">"+"</button>
        </div>
    }
}
