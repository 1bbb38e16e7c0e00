//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{About, Community, EffectiveAltruism, Hero, SiteFooter, SiteHeader, Updates};
use crate::content::Content;
use crate::menu::MenuState;
use crate::styles::{PAGE_SCRIPT, stylesheet};

/// The complete landing page, sections in fixed order.
#[component]
pub fn PageDocument(
    content: Content,
    menu: MenuState,
    /// Year printed in the footer
    year: i32,
) -> impl IntoView {
    let Content {
        nav,
        updates,
        theme,
        site,
        links,
    } = content;
    let css = stylesheet(&theme);
    let title = site.title.clone();
    let description = site.description.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{css}</style>
            </head>
            <body>
                <SiteHeader site=site.clone() nav=nav.into_vec() menu=menu />
                <main>
                    <Hero site=site.clone() />
                    <EffectiveAltruism
                        video_embed=links.video_embed
                        learn_more=links.learn_more
                    />
                    <About />
                    <Updates entries=updates.into_vec() />
                    <Community invite=links.community_invite />
                </main>
                <SiteFooter site=site social=links.social year=year />
                <script inner_html=PAGE_SCRIPT></script>
            </body>
        </html>
    }
}
