//! Neutral loading placeholder.

use leptos::prelude::*;

/// Grey placeholder bars shown while data or the session is still loading.
#[component]
pub fn SkeletonLoader(#[prop(default = 3)] lines: usize) -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true" aria-live="polite">
            {(0..lines)
                .map(|index| {
                    let short = index + 1 == lines;
                    view! { <div class="skeleton__line" class:skeleton__line--short=short></div> }
                })
                .collect_view()}
        </div>
    }
}
