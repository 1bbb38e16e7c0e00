//! Stylesheet and page script.
//!
//! Colors are never hard-coded here: every rule reads the custom properties
//! emitted by [`crate::content::ThemeTokens::css_variables`], so the final
//! stylesheet is that `:root` block followed by [`PAGE_CSS`].
//!
//! Both assets are inlined into the document. Keep `<`, `>` and `&` out of
//! them; text children are HTML-escaped on render.

use crate::content::ThemeTokens;

/// Complete stylesheet for the given theme.
pub fn stylesheet(theme: &ThemeTokens) -> String {
    format!("{}{}", theme.css_variables(), PAGE_CSS)
}

/// Layout and component rules for the landing page.
pub const PAGE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    color: var(--neutral-text);
    background: var(--base);
}

img {
    max-width: 100%;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem 1rem;
}

.text-accent { color: var(--accent); }
.bg-support { background-color: var(--support-background); }
.border-top { border-top: 1px solid #e5e7eb; }

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.6rem 1rem;
    border-radius: 0.75rem;
    font-weight: 600;
    border: 1px solid transparent;
    text-decoration: none;
    cursor: pointer;
    transition: filter .2s ease;
}

.btn-primary { background: var(--accent); color: var(--base); }
.btn-primary:hover { filter: brightness(0.95); }

.btn-outline {
    background: transparent;
    color: var(--accent);
    border-color: var(--accent);
}
.btn-outline:hover { filter: brightness(0.95); }

/* Header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    width: 100%;
    border-bottom: 1px solid #e5e7eb;
    background: rgba(255, 255, 255, .9);
    backdrop-filter: blur(8px);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
    text-decoration: none;
}

.brand-name { font-weight: 600; }

.desktop-nav {
    display: flex;
    gap: 24px;
}

.nav-link {
    font-size: 14px;
    color: var(--neutral-text);
    text-decoration: none;
}

.menu-toggle {
    display: none;
    border: 0;
    border-radius: 12px;
    padding: 8px;
    background: transparent;
    color: var(--neutral-text);
    cursor: pointer;
}

.mobile-nav {
    border-top: 1px solid #e5e7eb;
    background: var(--base);
}

.mobile-nav-inner {
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 0.75rem 1rem;
}

.mobile-nav-link {
    padding: 0.5rem 0;
    color: #111827;
    text-decoration: none;
}

@media (max-width: 767px) {
    .desktop-nav, .header-action { display: none; }
    .menu-toggle { display: inline-flex; }
}

/* Hero */

.hero {
    position: relative;
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #fff;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: brightness(0.5);
}

.hero-content {
    position: relative;
    z-index: 1;
    padding: 0 1rem;
}

.hero-title {
    font-size: clamp(2rem, 6vw, 4rem);
    font-weight: 800;
    margin: 0;
}

.hero-description {
    margin: 16px auto 0;
    max-width: 720px;
    font-size: 18px;
}

/* Sections */

.section-title {
    font-size: clamp(1.5rem, 4vw, 2.25rem);
    font-weight: 700;
}

.centered { text-align: center; }

.ea-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 40px;
}

.video-frame {
    aspect-ratio: 16 / 9;
    width: 100%;
    overflow: hidden;
    border-radius: 0.5rem;
    box-shadow: 0 6px 20px rgba(0, 0, 0, .08);
}

.video-frame iframe {
    width: 100%;
    height: 100%;
    border: 0;
}

.inline-cta {
    font-weight: 600;
    text-decoration: underline;
    cursor: pointer;
}

.feature-grid {
    display: grid;
    gap: 32px;
    margin-top: 40px;
    grid-template-columns: repeat(3, minmax(0, 1fr));
}

.feature-title {
    font-weight: 700;
    color: #111827;
}

.feature-body {
    margin-top: 8px;
    font-size: 14px;
}

.updates-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 1rem;
    margin-top: 2.5rem;
}

.update-card {
    position: relative;
    display: block;
    overflow: hidden;
    border-radius: 0.5rem;
    aspect-ratio: 1 / 1;
}

.update-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.community-cta { margin-top: 16px; }

/* Footer */

.site-footer .footer-inner {
    display: flex;
    flex-direction: column;
    gap: 16px;
    align-items: center;
    padding: 2.5rem 1rem;
}

.copyright { font-size: 14px; }

.social-links {
    display: flex;
    gap: 16px;
}
"#;

/// Wires `data-action` controls to one function per action.
///
/// Pointer and keyboard activation both call `perform`, so a non-native
/// control such as the inline call-to-action behaves the same either way.
/// Native buttons already turn Enter/Space into clicks and are skipped for
/// `keydown`. `toggleMenu` mirrors the menu controller in the browser: it
/// removes the live panel, or clones it back in from `#mobile-nav-template`,
/// and swaps the icon path and `aria-expanded` to match.
pub const PAGE_SCRIPT: &str = r#"
(function () {
    function openExternal(url) {
        if (!url) { return; }
        window.open(url, "_blank", "noopener,noreferrer");
    }

    function scrollToAnchor(id) {
        var target = document.getElementById(id);
        if (target) { target.scrollIntoView({ behavior: "smooth" }); }
    }

    function toggleMenu(button) {
        var template = document.getElementById("mobile-nav-template");
        if (!template) { return; }
        var header = template.parentNode;
        var panel = header.querySelector(".mobile-nav");
        var open = !panel;
        if (panel) {
            panel.remove();
        } else {
            header.insertBefore(template.content.cloneNode(true), template);
        }
        button.setAttribute("aria-expanded", open ? "true" : "false");
        var icon = button.querySelector("path");
        if (icon) { icon.setAttribute("d", button.getAttribute(open ? "data-icon-open" : "data-icon-closed")); }
    }

    function perform(el) {
        var action = el.getAttribute("data-action");
        if (action === "toggle-menu") { toggleMenu(el); }
        if (action === "open-external") { openExternal(el.getAttribute("data-href")); }
        if (action === "scroll-to") { scrollToAnchor(el.getAttribute("data-target")); }
    }

    document.querySelectorAll("[data-action]").forEach(function (el) {
        el.addEventListener("click", function () { perform(el); });
        if (el.tagName === "BUTTON") { return; }
        el.addEventListener("keydown", function (event) {
            if (event.key === "Enter" || event.key === " " || event.key === "Spacebar") {
                event.preventDefault();
                perform(el);
            }
        });
    });
})();
"#;
