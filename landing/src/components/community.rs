use leptos::prelude::*;

/// Community chat call-to-action. Target of "Stay in the loop".
#[component]
pub fn Community(invite: String) -> impl IntoView {
    view! {
        <section id="newsletter" class="border-top">
            <div class="container">
                <h2 class="section-title text-accent">"Join our WhatsApp"</h2>
                <p class="section-body">"Or directly join our WhatsApp community with the link below!"</p>
                <a
                    href=invite
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-primary community-cta"
                >
                    "Join our WhatsApp"
                </a>
            </div>
        </section>
    }
}
