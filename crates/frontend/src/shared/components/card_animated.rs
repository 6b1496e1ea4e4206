//! CardAnimated: Thaw `Card` with the `card-appear` entrance animation.
//!
//! Lists pass an increasing `delay_ms` to get a staggered cascade:
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between two consecutive cards of a list
pub const STAGGER_MS: u32 = 80;

/// Stagger delay for the card at `index` in a list
pub fn stagger(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card surface
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "site-card".to_string()
    } else {
        format!("site-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
