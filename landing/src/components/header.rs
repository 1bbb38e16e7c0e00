//! Sticky header with desktop navigation and the mobile menu panel.

use leptos::prelude::*;

use super::{ICON_LIST, ICON_X, Icon};
use crate::actions::Action;
use crate::content::{NavEntry, SiteInfo};
use crate::menu::MenuState;

/// Anchor the "Stay in the loop" button scrolls to
const NEWSLETTER_ANCHOR: &str = "newsletter";

/// Id of the inert copy of the mobile panel the page script toggles in
pub const MOBILE_NAV_TEMPLATE_ID: &str = "mobile-nav-template";

/// Header bar; the live mobile panel is emitted only while the menu is open.
///
/// An inert `<template>` copy of the panel always follows it, so the page
/// script can open and close the menu in the browser without a re-render.
/// The toggle button carries both icon paths for the same reason.
#[component]
pub fn SiteHeader(site: SiteInfo, nav: Vec<NavEntry>, menu: MenuState) -> impl IntoView {
    let open = menu.is_open();
    let expanded = if open { "true" } else { "false" };
    let toggle_icon = if open { ICON_X } else { ICON_LIST };
    let toggle_action = Action::ToggleMenu.data_action();
    let scroll_action = Action::ScrollTo(NEWSLETTER_ANCHOR.into()).data_action();
    let logo_alt = format!("{} Logo", site.name);
    let mobile_entries = nav.clone();
    let template_entries = nav.clone();

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="#home" class="brand">
                    <img src=site.logo_src alt=logo_alt width="30" height="30" />
                    <span class="brand-name text-accent">{site.name}</span>
                </a>

                <nav class="desktop-nav" aria-label="Main">
                    <NavLinks entries=nav link_class="nav-link" />
                </nav>

                <div class="header-action">
                    <button
                        class="btn btn-outline"
                        data-action=scroll_action
                        data-target=NEWSLETTER_ANCHOR
                    >
                        "Stay in the loop"
                    </button>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=expanded
                    aria-controls="mobile-nav"
                    data-action=toggle_action
                    data-icon-open=ICON_X
                    data-icon-closed=ICON_LIST
                >
                    <Icon path=toggle_icon size="24" />
                </button>
            </div>
            {open.then(|| view! { <MobileNav entries=mobile_entries /> })}
            <template id=MOBILE_NAV_TEMPLATE_ID>
                <MobileNav entries=template_entries />
            </template>
        </header>
    }
}

/// Stacked navigation for narrow screens. Same entries as the desktop bar.
#[component]
pub fn MobileNav(entries: Vec<NavEntry>) -> impl IntoView {
    view! {
        <div id="mobile-nav" class="mobile-nav">
            <nav class="mobile-nav-inner" aria-label="Mobile">
                <NavLinks entries=entries link_class="mobile-nav-link" />
            </nav>
        </div>
    }
}

/// One link per entry, in order. Labels and hrefs are emitted as given.
#[component]
fn NavLinks(entries: Vec<NavEntry>, link_class: &'static str) -> impl IntoView {
    view! {
        {entries.into_iter().map(|entry| {
            view! {
                <a href=entry.href class=link_class>{entry.label}</a>
            }
        }).collect::<Vec<_>>()}
    }
}
