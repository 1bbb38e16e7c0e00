//! Content registry for the landing page.
//!
//! Everything the page shows that is not markup lives here: the two ordered
//! collections (navigation and update cards), the theme colors, site copy and
//! the fixed outbound links. A [`Content`] value is built once and handed to
//! [`crate::render_page`]; components never reach for globals.
//!
//! # Example
//!
//! ```rust
//! use impact_landing::content::{Content, NavEntry};
//!
//! let content = Content::default().with_nav(vec![NavEntry::new("Home", "#home")]);
//! assert_eq!(content.nav.len(), 1);
//! assert_eq!(content.updates.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::normalize::Entries;

/// Image used for every update card until real updates are wired in.
const PLACEHOLDER_CARD: &str = "/Leuk Kaartje 3 gebroeders.png";
const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/mimi_moto_ccfa/";

/// A single navigation menu item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Human-readable link text, unique within the menu
    pub label: String,
    /// In-page anchor (`#about`) or external URL
    pub href: String,
}

impl NavEntry {
    /// Build an entry from anything string-like.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A single partner/update card: an image that links out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// Image resource shown on the card
    pub src: String,
    /// External destination opened when the card is activated
    pub href: String,
}

impl UpdateEntry {
    /// Build an entry from anything string-like.
    pub fn new(src: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            href: href.into(),
        }
    }
}

/// The four color roles of the Utrecht theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Page background (white)
    pub base: &'static str,
    /// Brand color used for headings and buttons (bordeaux)
    pub accent: &'static str,
    /// Body copy color (gray)
    pub neutral_text: &'static str,
    /// Soft background for alternating sections (beige)
    pub support_background: &'static str,
}

impl ThemeTokens {
    /// White, bordeaux red, gray and a beige support color.
    pub const UTRECHT: ThemeTokens = ThemeTokens {
        base: "#ffffff",
        accent: "#800020",
        neutral_text: "#4b4b4b",
        support_background: "#f5f4ef",
    };

    /// CSS custom properties for the `:root` rule.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n    --base: {};\n    --accent: {};\n    --neutral-text: {};\n    --support-background: {};\n}}\n",
            self.base, self.accent, self.neutral_text, self.support_background
        )
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::UTRECHT
    }
}

/// Site-wide copy and imagery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Organization name shown in the header brand and footer
    pub name: String,
    /// Document `<title>`
    pub title: String,
    /// Meta description, also used as the hero subheading
    pub description: String,
    /// Short slogan used as hero heading and in the footer
    pub tagline: String,
    /// Header logo image
    pub logo_src: String,
    /// Full-bleed hero background image
    pub hero_image_src: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Impact Makers Utrecht".into(),
            title: "Impact Makers Utrecht — Doing Good Better".into(),
            description: "Impact Makers Utrecht is a community for people who want to do the most good they can, using evidence and careful reasoning.".into(),
            tagline: "Doing Good Better".into(),
            logo_src: "/droneshot.jpg".into(),
            hero_image_src: "/droneshot.jpg".into(),
        }
    }
}

/// A labelled outbound link (footer socials).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Visible text and accessible name
    pub label: String,
    /// Destination, rendered as given
    pub href: String,
}

/// Fixed outbound destinations used by the static sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLinks {
    /// Community chat invite behind the "Join our WhatsApp" button
    pub community_invite: String,
    /// Embedded talk in the effective altruism section
    pub video_embed: String,
    /// Target of the inline call-to-action next to the video
    pub learn_more: String,
    /// Footer social links, in display order
    pub social: Vec<SocialLink>,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        let social = ["Instagram", "LinkedIn", "Email"]
            .into_iter()
            .map(|label| SocialLink {
                label: label.into(),
                href: "#".into(),
            })
            .collect();

        Self {
            community_invite: "https://chat.whatsapp.com/HtnrgFwcNvxEBk4bbJy4vq".into(),
            video_embed: "https://www.youtube.com/embed/diDvxeia2cY".into(),
            learn_more: "https://www.effectivealtruism.org/".into(),
            social,
        }
    }
}

/// Everything the page view consumes, already normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    /// Navigation entries, in menu order
    pub nav: Entries<NavEntry>,
    /// Update cards, in grid order
    pub updates: Entries<UpdateEntry>,
    /// Color roles
    pub theme: ThemeTokens,
    /// Copy and imagery
    pub site: SiteInfo,
    /// Outbound destinations
    pub links: ExternalLinks,
}

impl Default for Content {
    fn default() -> Self {
        let nav = vec![
            NavEntry::new("Home", "#home"),
            NavEntry::new("About Impact Makers Utrecht", "#about"),
            NavEntry::new("Effective Altruism", "#ea"),
            NavEntry::new("Events", "#events"),
        ];
        let updates = std::iter::repeat_with(|| UpdateEntry::new(PLACEHOLDER_CARD, INSTAGRAM_PROFILE))
            .take(6)
            .collect::<Vec<_>>();

        Self {
            nav: nav.into(),
            updates: updates.into(),
            theme: ThemeTokens::UTRECHT,
            site: SiteInfo::default(),
            links: ExternalLinks::default(),
        }
    }
}

impl Content {
    /// Replace the navigation collection.
    pub fn with_nav(mut self, nav: impl Into<Entries<NavEntry>>) -> Self {
        self.nav = nav.into();
        self
    }

    /// Replace the update collection.
    pub fn with_updates(mut self, updates: impl Into<Entries<UpdateEntry>>) -> Self {
        self.updates = updates.into();
        self
    }
}
