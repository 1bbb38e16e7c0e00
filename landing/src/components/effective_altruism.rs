//! Video plus explanation of effective altruism.

use leptos::prelude::*;

use crate::actions::Action;

const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Two panes: the embedded talk and the copy beside it.
///
/// The call-to-action is a focusable span, not an anchor, so the page script
/// handles both click and Enter/Space on it through `openExternal`.
#[component]
pub fn EffectiveAltruism(video_embed: String, learn_more: String) -> impl IntoView {
    let cta_action = Action::OpenExternal(learn_more.clone()).data_action();

    view! {
        <section id="ea" class="bg-support border-top">
            <div class="container ea-grid">
                <div class="video-frame">
                    <iframe
                        src=video_embed
                        title="Effective Altruism Talk"
                        allow=VIDEO_ALLOW
                        allowfullscreen=true
                    ></iframe>
                </div>
                <div>
                    <h2 class="section-title text-accent">
                        "Effective altruism is about using evidence and reason."
                    </h2>
                    <p class="section-body">
                        "Effective altruism takes the well-being of others as a guiding principle, \
                         using the best available evidence to guide our actions. These principles \
                         are applied by a global network of over 200 student organisations. "
                        <span
                            class="inline-cta text-accent"
                            role="link"
                            tabindex="0"
                            data-action=cta_action
                            data-href=learn_more
                        >
                            "Read more about effective altruism"
                        </span>
                    </p>
                </div>
            </div>
        </section>
    }
}
