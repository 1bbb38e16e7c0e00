use leptos::prelude::*;

use crate::content::{SiteInfo, SocialLink};

/// Footer with the copyright line for `year` and the social links.
#[component]
pub fn SiteFooter(site: SiteInfo, social: Vec<SocialLink>, year: i32) -> impl IntoView {
    let copyright = format!("© {} {} — {}", year, site.name, site.tagline);

    view! {
        <footer class="site-footer bg-support border-top">
            <div class="footer-inner">
                <span class="copyright">{copyright}</span>
                <div class="social-links">
                    {social.into_iter().map(|link| {
                        let label = link.label.clone();
                        view! {
                            <a href=link.href aria-label=label class="btn btn-outline">{link.label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
