use leptos::prelude::*;

use crate::content::SiteInfo;

#[component]
pub fn Hero(site: SiteInfo) -> impl IntoView {
    let image_alt = format!("{} Group", site.name);

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <img src=site.hero_image_src alt=image_alt class="hero-image" />
            </div>
            <div class="hero-content">
                <h1 class="hero-title">{site.tagline}</h1>
                <p class="hero-description">{site.description}</p>
            </div>
        </section>
    }
}
