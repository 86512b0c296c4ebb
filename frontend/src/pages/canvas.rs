use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::invitation_form::InvitationFormPanel;
use crate::components::page_meta::{use_page_meta, CANVAS};

const PROCESS: [(&str, &str); 5] = [
    (
        "Receive an Invitation",
        "Members of the collective nominate new artists they believe in. Each invitation carries a unique referral code, symbolizing trust and sponsorship.",
    ),
    (
        "Onboarding & Connection",
        "Create your artist profile, choose your practice area, and meet your referrer plus a community mentor. Relationships come before creation.",
    ),
    (
        "Gift & Creation",
        "Receive your gifted canvas and optional starter materials. Create freely, reflecting on themes of community, regeneration, or self-expression.",
    ),
    (
        "Return & Registration",
        "Bring your completed piece back for professional photography and cataloging. Your work links you, your referrer, and the collective in a transparent creative lineage.",
    ),
    (
        "Regeneration",
        "Sales replenish the materials fund. You and your referrer receive recognition and royalties. Every successful cycle unlocks new invitations for organic growth.",
    ),
];

const BENEFITS: [&str; 5] = [
    "💌 Invitation-only access to intentional creative community",
    "🤝 Personal mentorship and referrer relationships",
    "🎨 Creative lineage linking you to the collective's story",
    "💰 Royalties for both artist and referrer on sales",
    "🌱 Organic growth through successful creative cycles",
];

const PRINCIPLES: [&str; 6] = [
    "💌 You enter through the trust and belief of an existing member",
    "🤝 Your referrer and a community mentor will guide your onboarding",
    "🎨 Your work connects to the collective's growing story of collaboration",
    "💰 Both you and your referrer benefit from your artistic contributions",
    "🌱 Successful cycles unlock new invitations, expanding the community thoughtfully",
    "📸 Professional documentation creates transparent creative lineage",
];

#[function_component(Canvas)]
pub fn canvas() -> Html {
    use_page_meta(CANVAS);

    html! {
        <div class="canvas-page">
            <style>
                {r#"
                    .canvas-page {
                        background: linear-gradient(135deg, var(--dark-bg) 0%, var(--charcoal) 100%);
                        color: var(--white);
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .page-header {
                        padding: 2rem 2rem 0;
                        max-width: 1400px;
                        margin: 0 auto;
                    }
                    .canvas-page .hero {
                        padding: 4rem 2rem;
                        text-align: center;
                        max-width: 1400px;
                        margin: 0 auto;
                    }
                    .hero-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 6vw, 5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        line-height: 1.1;
                    }
                    .accent {
                        color: var(--gold);
                        font-style: italic;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.2rem, 2.5vw, 1.6rem);
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.9);
                        max-width: 800px;
                        margin: 0 auto 3rem;
                    }
                    .canvas-main {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem 4rem;
                    }
                    .content-container {
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 4rem;
                        margin-bottom: 4rem;
                    }
                    .canvas-page .section-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 2.2rem;
                        color: var(--gold);
                        margin: 2rem 0 1.5rem;
                    }
                    .purpose-text {
                        line-height: 1.8;
                        color: rgba(255, 255, 255, 0.9);
                        margin-bottom: 1.5rem;
                    }
                    .process-list {
                        list-style: none;
                        counter-reset: step-counter;
                        padding: 0;
                        margin: 0 0 3rem;
                    }
                    .process-step {
                        counter-increment: step-counter;
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 2rem;
                    }
                    .process-step::before {
                        content: counter(step-counter);
                        flex-shrink: 0;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: var(--gold);
                        color: var(--dark-bg);
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-right: 1.5rem;
                    }
                    .step-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.4rem;
                        margin: 0 0 0.5rem;
                    }
                    .step-description {
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.85);
                        margin: 0;
                    }
                    .canvas-benefits {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .canvas-benefits li {
                        padding: 1rem;
                        margin-bottom: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-left: 3px solid var(--teal);
                        border-radius: 8px;
                    }
                    .application-form {
                        background: rgba(255, 255, 255, 0.05);
                        border: 2px solid var(--gold);
                        border-radius: 20px;
                        padding: 3rem;
                        align-self: start;
                        position: sticky;
                        top: 2rem;
                    }
                    .form-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        color: var(--gold);
                        text-align: center;
                        margin: 0 0 1rem;
                    }
                    .form-intro {
                        text-align: center;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 2rem;
                    }
                    .form-grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                    }
                    .form-label {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                        color: var(--teal);
                    }
                    .form-input {
                        padding: 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.08);
                        color: var(--white);
                        font-size: 1rem;
                        transition: border-color 0.3s ease;
                    }
                    .form-input:focus {
                        outline: none;
                        border-color: var(--gold);
                    }
                    .form-input::placeholder {
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .submit-button {
                        width: 100%;
                        padding: 1.2rem;
                        border-radius: 12px;
                        border: none;
                        background: linear-gradient(135deg, var(--gold), var(--muted-gold));
                        color: var(--dark-bg);
                        font-size: 1.1rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .submit-button:hover {
                        transform: translateY(-2px);
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                        transform: none;
                    }
                    .contract-preview {
                        background: rgba(255, 255, 255, 0.03);
                        border: 2px dashed var(--purple);
                        border-radius: 16px;
                        padding: 2.5rem;
                        line-height: 1.7;
                    }
                    .contract-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.8rem;
                        color: var(--purple);
                        margin-top: 0;
                    }
                    .contract-preview ul {
                        padding-left: 1rem;
                        list-style: none;
                    }
                    @media (max-width: 968px) {
                        .content-container {
                            grid-template-columns: 1fr;
                        }
                        .application-form {
                            position: static;
                        }
                    }
                "#}
            </style>

            <BackLink />

            <section class="hero">
                <h1 class="hero-title">
                    {"The "}<span class="accent">{"Canvas Invitation"}</span><br/>
                    <span class="accent">{"Program"}</span>{" 💌"}
                </h1>
                <p class="hero-subtitle">
                    {"A regenerative entry into the creative ecosystem, by invitation only. Enter a supportive, intentional network where creativity, respect, and community trust come first."}
                </p>
            </section>

            <main class="canvas-main">
                <div class="content-container">
                    <section class="info-section">
                        <h2 class="section-title">{"🌿 Purpose"}</h2>
                        <p class="purpose-text">
                            {"Not everyone can simply join the collective; they must be welcomed in. The Canvas Invitation Program ensures that each artist who receives a gifted canvas is entering a supportive, intentional network where creativity, respect, and community trust come first."}
                        </p>
                        <p class="purpose-text">
                            {"An invitation isn't just access to a resource. It's entry into a living ecosystem of creators, mentors, and collaborators."}
                        </p>

                        <h2 class="section-title">{"💌 How It Works"}</h2>
                        <ol class="process-list">
                            { for PROCESS.iter().map(|(title, description)| html! {
                                <li class="process-step">
                                    <div class="step-content">
                                        <h3 class="step-title">{*title}</h3>
                                        <p class="step-description">{*description}</p>
                                    </div>
                                </li>
                            }) }
                        </ol>

                        <ul class="canvas-benefits">
                            { for BENEFITS.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                        </ul>
                    </section>

                    <InvitationFormPanel />
                </div>

                <div class="contract-preview">
                    <h3 class="contract-title">{"💞 Canvas Invitation Agreement"}</h3>
                    <p><strong>{"Invited Artist:"}</strong>{" [Your Name]"}</p>
                    <p><strong>{"Referrer:"}</strong>{" [Inviting Member]"}</p>
                    <p><strong>{"Invitation Code:"}</strong>{" [Your Code]"}</p>
                    <p><strong>{"Canvas ID:"}</strong>{" [Generated upon acceptance]"}</p>
                    <p><strong>{"Invitation Principles:"}</strong></p>
                    <ul>
                        { for PRINCIPLES.iter().map(|principle| html! { <li>{*principle}</li> }) }
                    </ul>
                    <p>
                        <strong>{"Community Agreement:"}</strong>
                        {" By redeeming this invitation, you commit to creating with intention and contributing to our regenerative creative ecosystem built on trust and collaboration."}
                    </p>
                </div>
            </main>
        </div>
    }
}
