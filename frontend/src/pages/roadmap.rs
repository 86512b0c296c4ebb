use yew::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::page_meta::{use_page_meta, ROADMAP};
use crate::components::phase_section::PhaseSection;
use crate::components::phase_tabs::PhaseTabs;
use crate::components::timeline::DevelopmentTimeline;
use crate::roadmap::{PhaseId, PhaseNavigator};

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    use_page_meta(ROADMAP);
    let navigator = use_state(PhaseNavigator::default);

    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |id: PhaseId| {
            let mut next = *navigator;
            next.select(id);
            navigator.set(next);
        })
    };

    html! {
        <div class="roadmap-page">
            <style>
                {r#"
                    .roadmap-page {
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
                    .roadmap-page .hero {
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
                    .roadmap-main {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem 4rem;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .phase-section {
                        animation: fadeIn 0.5s ease-in;
                    }
                    .phase-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        padding: 3rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 20px;
                    }
                    .phase-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2.5rem, 4vw, 3.5rem);
                        color: var(--gold);
                        margin: 0 0 1rem;
                    }
                    .phase-timeline {
                        font-size: 1.2rem;
                        color: var(--teal);
                        margin-bottom: 1rem;
                        font-weight: 600;
                    }
                    .phase-description {
                        font-size: 1.1rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.9);
                        margin: 1.5rem auto 0;
                        max-width: 800px;
                    }
                    .content-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        margin-bottom: 4rem;
                    }
                    .content-section {
                        background: rgba(255, 255, 255, 0.03);
                        border-radius: 16px;
                        padding: 2.5rem;
                        border-left: 4px solid var(--teal);
                    }
                    .roadmap-page .section-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.8rem;
                        color: var(--gold);
                        margin: 0 0 2rem;
                    }
                    .deliverables-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .deliverable-item {
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 8px;
                        transition: all 0.3s ease;
                    }
                    .deliverable-item:hover {
                        background: rgba(255, 255, 255, 0.08);
                    }
                    .deliverable-item::before {
                        content: "📋";
                        margin-right: 1rem;
                        flex-shrink: 0;
                        font-size: 1.2rem;
                    }
                    .deliverable-item.completed::before {
                        content: "✅";
                    }
                    .deliverable-text {
                        color: rgba(255, 255, 255, 0.9);
                        line-height: 1.5;
                    }
                    .deliverable-item.completed .deliverable-text {
                        color: var(--white);
                        text-decoration: line-through;
                        opacity: 0.7;
                    }
                    .metrics-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .metric-card {
                        background: linear-gradient(135deg, rgba(212, 175, 55, 0.12), rgba(64, 224, 208, 0.06));
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: center;
                        border: 1px solid rgba(212, 175, 55, 0.19);
                    }
                    .metric-value {
                        font-family: 'Playfair Display', serif;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: var(--gold);
                        margin-bottom: 0.5rem;
                    }
                    .metric-label {
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                        text-transform: uppercase;
                        letter-spacing: 1px;
                        font-weight: 600;
                    }
                    .timeline-visualization {
                        margin: 4rem 0;
                        padding: 3rem;
                        background: rgba(255, 255, 255, 0.03);
                        border-radius: 20px;
                        border: 2px solid rgba(157, 78, 221, 0.25);
                    }
                    .timeline-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 2.2rem;
                        color: var(--purple);
                        text-align: center;
                        margin: 0 0 3rem;
                    }
                    .timeline-container {
                        position: relative;
                        max-width: 800px;
                        margin: 0 auto;
                    }
                    .timeline-container::before {
                        content: "";
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 3px;
                        background: linear-gradient(to bottom, var(--teal), var(--purple));
                        transform: translateX(-50%);
                    }
                    .timeline-item {
                        position: relative;
                        margin-bottom: 3rem;
                        display: flex;
                        align-items: center;
                    }
                    .timeline-item.left {
                        justify-content: flex-start;
                    }
                    .timeline-item.right {
                        justify-content: flex-end;
                    }
                    .timeline-content {
                        background: rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        max-width: 350px;
                        position: relative;
                        border: 1px solid rgba(212, 175, 55, 0.19);
                    }
                    .timeline-content::before {
                        content: "";
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 0;
                        height: 0;
                        border: 10px solid transparent;
                    }
                    .timeline-content.left::before {
                        right: -20px;
                        border-left-color: rgba(255, 255, 255, 0.08);
                    }
                    .timeline-content.right::before {
                        left: -20px;
                        border-right-color: rgba(255, 255, 255, 0.08);
                    }
                    .timeline-date {
                        font-size: 0.9rem;
                        color: var(--teal);
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .timeline-phase {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.4rem;
                        margin: 0 0 1rem;
                    }
                    .timeline-description {
                        font-size: 0.95rem;
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.5;
                        margin: 0;
                    }
                    @media (max-width: 968px) {
                        .content-grid {
                            grid-template-columns: 1fr;
                            gap: 3rem;
                        }
                    }
                    @media (max-width: 768px) {
                        .timeline-container::before {
                            left: 20px;
                        }
                        .timeline-item.left,
                        .timeline-item.right {
                            justify-content: flex-start;
                            padding-left: 60px;
                        }
                        .timeline-content.left::before,
                        .timeline-content.right::before {
                            left: -20px;
                            right: auto;
                            border-right-color: rgba(255, 255, 255, 0.08);
                            border-left-color: transparent;
                        }
                    }
                "#}
            </style>

            <BackLink />

            <section class="hero">
                <h1 class="hero-title">
                    {"Building the "}<span class="accent">{"Future"}</span><br/>
                    {"of Artist "}<span class="accent">{"Financing"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Our journey from MVP to a global network of artist banks, transforming how artists access capital and communities invest in culture."}
                </p>
            </section>

            <main class="roadmap-main">
                <PhaseTabs active={navigator.active()} {on_select} />

                { for navigator.visible_phases().map(|phase| html! {
                    <PhaseSection key={phase.id.as_str()} {phase} />
                }) }

                <DevelopmentTimeline />
            </main>
        </div>
    }
}
