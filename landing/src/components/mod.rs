//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── SiteHeader
//! │   ├── MobileNav (only while the menu is open)
//! │   └── <template> MobileNav (inert copy for the page script)
//! ├── Hero                (#home)
//! ├── EffectiveAltruism   (#ea)
//! ├── About               (#about)
//! ├── Updates             (#events)
//! ├── Community           (#newsletter)
//! └── SiteFooter
//! ```
//!
//! Components take owned, already-normalized data and hold no state of
//! their own; the menu flag arrives as a prop.

mod about;
mod community;
mod document;
mod effective_altruism;
mod footer;
mod header;
mod hero;
mod icons;
mod updates;

pub use about::About;
pub use community::Community;
pub use document::PageDocument;
pub use effective_altruism::EffectiveAltruism;
pub use footer::SiteFooter;
pub use header::{MOBILE_NAV_TEMPLATE_ID, MobileNav, SiteHeader};
pub use hero::Hero;
pub use icons::*;
pub use updates::Updates;
