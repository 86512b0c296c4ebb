use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::page_meta::{use_page_meta, NOT_FOUND};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_meta(NOT_FOUND);

    html! {
        <div class="not-found-page" style="min-height: 100vh; background: linear-gradient(135deg, var(--dark-bg) 0%, var(--charcoal) 100%);">
            <BackLink />
            <section style="padding: 6rem 2rem; text-align: center;">
                <h1 style="font-family: 'Playfair Display', serif; font-size: 4rem; color: var(--gold); margin-bottom: 1rem;">{"404"}</h1>
                <p style="font-size: 1.3rem; color: rgba(255, 255, 255, 0.85);">
                    {"This canvas is still blank. The page you're looking for doesn't exist."}
                </p>
            </section>
        </div>
    }
}
