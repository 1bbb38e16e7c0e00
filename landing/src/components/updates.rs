//! Grid of update/partner cards.

use leptos::prelude::*;

use crate::content::UpdateEntry;

/// One card per entry: the image wrapped in an external link.
///
/// An entry with an empty `src` or `href` is rendered as is.
#[component]
pub fn Updates(entries: Vec<UpdateEntry>) -> impl IntoView {
    view! {
        <section id="events" class="bg-support border-top">
            <div class="container">
                <h2 class="section-title centered text-accent">"Our latest updates"</h2>
                <div class="updates-grid">
                    {entries.into_iter().enumerate().map(|(idx, entry)| {
                        let alt = format!("Update {}", idx + 1);
                        view! {
                            <a
                                href=entry.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="update-card"
                            >
                                <img src=entry.src alt=alt loading="lazy" class="update-image" />
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
