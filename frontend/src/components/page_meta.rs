use log::warn;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::config::SITE_NAME;

/// Static `<head>` metadata for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME: PageMeta = PageMeta {
    title: "Art Lending Platform | Liquidity for Artists, Returns for Communities",
    description: "Back artists with small loans secured by their artwork and share in the rewards when they sell. Join the Artist Bank.",
};

pub const CANVAS: PageMeta = PageMeta {
    title: "Canvas Invitation Program | Open Artist Bank - By Invitation Only",
    description: "A regenerative entry into the creative ecosystem, by invitation only. Redeem your invitation, receive a gifted canvas and join the collective.",
};

pub const ROADMAP: PageMeta = PageMeta {
    title: "Roadmap | Open Artist Bank - Building the Future of Artist Financing",
    description: "Explore our 4-phase roadmap from MVP to global expansion. See how we're building the decentralized Artist Bank that transforms cultural investment.",
};

pub const NOT_FOUND: PageMeta = PageMeta {
    title: "Page Not Found | Open Artist Bank",
    description: SITE_NAME,
};

/// Sets the document title and description, and scrolls to the top on mount.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_title(meta.title.to_string());

    use_effect_with_deps(
        move |meta| {
            set_description(meta.description);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        meta,
    );
}

fn set_description(content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document available, skipping description meta");
        return;
    };
    match document.query_selector("meta[name='description']") {
        Ok(Some(tag)) => {
            let _ = tag.set_attribute("content", content);
        }
        _ => warn!("Description meta tag not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_carry_their_titles() {
        assert_eq!(HOME.title, "Art Lending Platform | Liquidity for Artists, Returns for Communities");
        assert_eq!(CANVAS.title, "Canvas Invitation Program | Open Artist Bank - By Invitation Only");
        assert_eq!(ROADMAP.title, "Roadmap | Open Artist Bank - Building the Future of Artist Financing");
    }

    #[test]
    fn every_page_has_a_description() {
        for meta in [HOME, CANVAS, ROADMAP, NOT_FOUND] {
            assert!(!meta.description.is_empty(), "{}", meta.title);
        }
    }
}
