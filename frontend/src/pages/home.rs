use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::investment_calculator::InvestmentCalculator;
use crate::components::opportunity_card::OpportunityCard;
use crate::components::page_meta::{use_page_meta, HOME};
use crate::lending::OPPORTUNITIES;
use crate::Route;

const STEPS: [(&str, &str, &str); 3] = [
    (
        "🎨",
        "Artists List & Request",
        "Artists upload their work and request a loan amount based on estimated value. Our community evaluates and funds promising pieces.",
    ),
    (
        "👥",
        "Lenders Fund (Fractionalized)",
        "Community members back artists with micro-loans starting at $10. Each loan is split into tradeable tokens for maximum accessibility.",
    ),
    (
        "⚡",
        "Automatic Distribution",
        "When artwork sells, smart contracts automatically distribute returns to all token holders while artists keep the majority of proceeds.",
    ),
];

const ARTIST_BENEFITS: [(&str, &str); 3] = [
    ("💵", "Upfront liquidity without traditional debt"),
    ("🚫", "No debt collectors, just sale-based repayment"),
    ("👁️", "Exposure to new collectors and art enthusiasts"),
];

const BACKER_BENEFITS: [(&str, &str); 3] = [
    ("💎", "Micro-loans starting at just $10"),
    ("📊", "Shared upside when artwork sells successfully"),
    ("🤝", "Be part of an artist's success story"),
];

const MEMBERSHIP_BENEFITS: [&str; 5] = [
    "Access to exclusive loan opportunities",
    "Priority artwork listings and early access",
    "Free canvas frames & art materials (monthly)",
    "Community Discord with artists and collectors",
    "Monthly art market insights and reports",
];

const PARTNERS: [&str; 4] = ["Detroit Studios", "Gallery Collective", "Art District", "Creative Commons"];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "This platform gave me the liquidity I needed to focus on creating instead of worrying about rent. When my piece sold, everyone won.",
        "Maya Chen, Digital Artist",
    ),
    (
        "I started with $20 backing local artists. Now I'm part of a community that's genuinely supporting Detroit's creative scene.",
        "Marcus Johnson, Community Backer",
    ),
];

fn benefit_list(items: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul class="benefits-list">
            { for items.iter().map(|(icon, text)| html! {
                <li class="benefit-item">
                    <span class="benefit-icon">{*icon}</span>
                    <div class="benefit-text">{*text}</div>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(HOME);

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        background: linear-gradient(135deg, var(--dark-bg) 0%, var(--charcoal) 100%);
                        color: var(--white);
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .home-page .hero {
                        padding: 6rem 2rem 4rem;
                    }
                    .hero-container {
                        max-width: 1400px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .hero-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2.8rem, 5vw, 4.5rem);
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .accent {
                        color: var(--gold);
                        font-style: italic;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.1rem, 2vw, 1.4rem);
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.9);
                        margin-bottom: 2.5rem;
                    }
                    .cta-buttons {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .cta-buttons.centered {
                        margin-top: 1rem;
                        justify-content: center;
                    }
                    .cta-button {
                        padding: 1rem 2rem;
                        border-radius: 12px;
                        font-family: 'Inter', sans-serif;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        text-align: center;
                        transition: all 0.3s ease;
                        border: 2px solid var(--gold);
                    }
                    .cta-button.primary {
                        background: var(--gold);
                        color: var(--dark-bg);
                    }
                    .cta-button.secondary {
                        background: transparent;
                        color: var(--gold);
                    }
                    .cta-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 10px 30px rgba(212, 175, 55, 0.3);
                    }
                    .cta-button.roadmap {
                        min-width: 200px;
                    }
                    .hero-visual {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }
                    .artwork-frame {
                        width: 320px;
                        height: 400px;
                        border: 12px solid var(--gold);
                        border-radius: 4px;
                        background: linear-gradient(45deg, var(--purple), var(--teal));
                        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
                    }
                    .flow-diagram {
                        display: flex;
                        gap: 2rem;
                    }
                    .flow-step {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .flow-icon {
                        font-size: 2rem;
                    }
                    .flow-text {
                        font-size: 0.9rem;
                        font-weight: 600;
                        color: var(--teal);
                    }
                    .home-main {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .home-section {
                        padding: 4rem 0;
                    }
                    .section-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2rem, 4vw, 3rem);
                        color: var(--gold);
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .section-subtitle {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 3rem;
                    }
                    .steps-container {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .step-card {
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 16px;
                        padding: 2.5rem;
                        border-top: 4px solid var(--teal);
                        transition: transform 0.3s ease;
                    }
                    .step-card:hover {
                        transform: translateY(-5px);
                    }
                    .step-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .step-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .step-description {
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .benefits-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        margin-top: 3rem;
                    }
                    .category-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.8rem;
                        color: var(--teal);
                        margin-bottom: 1.5rem;
                    }
                    .benefits-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .benefit-item {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 10px;
                    }
                    .benefit-icon {
                        font-size: 1.5rem;
                    }
                    .marketplace-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 2rem;
                    }
                    .artwork-card {
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 16px;
                        padding: 1.5rem;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                    }
                    .artwork-image {
                        height: 180px;
                        border-radius: 10px;
                        background: linear-gradient(135deg, var(--purple), var(--teal));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-family: 'Playfair Display', serif;
                        font-style: italic;
                        margin-bottom: 1rem;
                    }
                    .artwork-title {
                        font-size: 1.2rem;
                        margin: 0 0 1rem;
                    }
                    .progress-bar {
                        height: 8px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 4px;
                        overflow: hidden;
                        margin-bottom: 0.75rem;
                    }
                    .artwork-stats {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 1rem;
                    }
                    .claim-button {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 8px;
                        border: none;
                        background: var(--teal);
                        color: var(--dark-bg);
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .membership-section {
                        text-align: center;
                        background: linear-gradient(135deg, rgba(157, 78, 221, 0.2), rgba(64, 224, 208, 0.1));
                        border-radius: 20px;
                        padding: 4rem 2rem;
                    }
                    .membership-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 2.5rem;
                        color: var(--gold);
                        margin-bottom: 1rem;
                    }
                    .membership-price {
                        font-family: 'Playfair Display', serif;
                        font-size: 4rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .membership-price .currency {
                        font-size: 2rem;
                        vertical-align: top;
                    }
                    .membership-price .period {
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .membership-benefits {
                        list-style: none;
                        padding: 0;
                        margin: 0 auto 2.5rem;
                        max-width: 500px;
                        text-align: left;
                    }
                    .membership-benefits li {
                        padding: 0.6rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .membership-benefits li::before {
                        content: "✓";
                        color: var(--teal);
                        margin-right: 0.75rem;
                        font-weight: 700;
                    }
                    .partners-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                        margin: 3rem 0;
                    }
                    .partner-logo {
                        padding: 1.5rem;
                        text-align: center;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 10px;
                        font-weight: 600;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .testimonial-card {
                        background: rgba(255, 255, 255, 0.05);
                        border-left: 4px solid var(--gold);
                        border-radius: 12px;
                        padding: 2rem;
                    }
                    .testimonial-text {
                        font-style: italic;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .testimonial-author {
                        color: var(--gold);
                        font-weight: 600;
                    }
                    .final-cta {
                        text-align: center;
                        padding: 6rem 2rem;
                        background: linear-gradient(135deg, var(--charcoal), var(--dark-bg));
                        border-top: 2px solid rgba(212, 175, 55, 0.3);
                    }
                    .final-cta-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2rem, 4vw, 3rem);
                        color: var(--gold);
                        margin-bottom: 1rem;
                    }
                    .final-cta-subtitle {
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 2.5rem;
                    }
                    .final-cta .cta-buttons {
                        justify-content: center;
                        margin-bottom: 3rem;
                    }
                    .social-links {
                        display: flex;
                        gap: 2rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .social-link {
                        color: var(--teal);
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .social-link:hover {
                        color: var(--gold);
                    }
                    @media (max-width: 968px) {
                        .hero-container,
                        .benefits-grid,
                        .testimonial-grid {
                            grid-template-columns: 1fr;
                        }
                        .artwork-frame {
                            width: 240px;
                            height: 300px;
                        }
                    }
                "#}
            </style>

            // Hero Section
            <section class="hero">
                <div class="hero-container">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            <span class="accent">{"Liquidity"}</span>{" for Artists."}<br/>
                            <span class="accent">{"Returns"}</span>{" for Communities."}
                        </h1>
                        <p class="hero-subtitle">
                            {"Back artists with small loans secured by their artwork, and share in the rewards when they sell."}
                        </p>
                        <div class="cta-buttons">
                            <button class="cta-button primary">{"Start as an Artist"}</button>
                            <button class="cta-button secondary">{"Start as a Backer"}</button>
                        </div>
                        <div class="cta-buttons centered">
                            <Link<Route> to={Route::Roadmap} classes="cta-button secondary roadmap">
                                {"📍 View Our Roadmap"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="artwork-frame"></div>
                        <div class="flow-diagram">
                            <div class="flow-step">
                                <div class="flow-icon">{"💰"}</div>
                                <div class="flow-text">{"Loan"}</div>
                            </div>
                            <div class="flow-step">
                                <div class="flow-icon">{"🪙"}</div>
                                <div class="flow-text">{"Tokens"}</div>
                            </div>
                            <div class="flow-step">
                                <div class="flow-icon">{"📈"}</div>
                                <div class="flow-text">{"Returns"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <main class="home-main">
                <section class="home-section">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <div class="steps-container">
                        { for STEPS.iter().map(|(icon, title, description)| html! {
                            <div class="step-card">
                                <div class="step-icon">{*icon}</div>
                                <h3 class="step-title">{*title}</h3>
                                <p class="step-description">{*description}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="home-section">
                    <h2 class="section-title">{"Why Join"}</h2>
                    <div class="benefits-grid">
                        <div class="benefit-category">
                            <h3 class="category-title">{"For Artists"}</h3>
                            { benefit_list(&ARTIST_BENEFITS) }
                        </div>
                        <div class="benefit-category">
                            <h3 class="category-title">{"For Backers"}</h3>
                            { benefit_list(&BACKER_BENEFITS) }
                        </div>
                    </div>
                </section>

                <section class="home-section">
                    <InvestmentCalculator />
                </section>

                <section class="home-section">
                    <h2 class="section-title">{"Current Opportunities"}</h2>
                    <p class="section-subtitle">{"Browse live artworks seeking backing from our community"}</p>
                    <div class="marketplace-grid">
                        { for OPPORTUNITIES.iter().map(|opportunity| html! {
                            <OpportunityCard key={opportunity.title} opportunity={*opportunity} />
                        }) }
                    </div>
                </section>

                <section class="home-section">
                    <div class="membership-section">
                        <h3 class="membership-title">{"Join the Artist Bank"}</h3>
                        <div class="membership-price">
                            <span class="currency">{"$"}</span>{"10"}<span class="period">{"/month"}</span>
                        </div>
                        <ul class="membership-benefits">
                            { for MEMBERSHIP_BENEFITS.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                        </ul>
                        <button class="cta-button primary">{"Become a Member"}</button>
                    </div>
                </section>

                <section class="home-section">
                    <h2 class="section-title">{"Trusted by the Community"}</h2>
                    <div class="partners-grid">
                        { for PARTNERS.iter().map(|partner| html! { <div class="partner-logo">{*partner}</div> }) }
                    </div>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|(text, author)| html! {
                            <div class="testimonial-card">
                                <p class="testimonial-text">{*text}</p>
                                <div class="testimonial-author">{format!("— {}", author)}</div>
                            </div>
                        }) }
                    </div>
                </section>
            </main>

            <section class="final-cta">
                <h2 class="final-cta-title">{"Invest in Culture. Empower Creators. Share the Rewards."}</h2>
                <p class="final-cta-subtitle">
                    {"Join a community where art meets opportunity, and every investment supports creative dreams."}
                </p>
                <div class="cta-buttons">
                    <button class="cta-button primary">{"Start Lending"}</button>
                    <button class="cta-button secondary">{"List Your Artwork"}</button>
                </div>
                <div class="social-links">
                    <Link<Route> to={Route::Roadmap} classes="social-link">{"View Roadmap"}</Link<Route>>
                    <a class="social-link" href="#">{"Join Discord"}</a>
                    <a class="social-link" href="#">{"Follow Updates"}</a>
                    <a class="social-link" href="#">{"Newsletter"}</a>
                </div>
            </section>
        </div>
    }
}
