use stylist::yew::styled_component;
use yew::prelude::*;

use crate::roadmap::Phase;
use crate::theme::{use_theme, Theme};

#[derive(Properties, PartialEq)]
pub struct PhaseSectionProps {
    pub phase: &'static Phase,
}

#[styled_component(PhaseSection)]
pub fn phase_section(props: &PhaseSectionProps) -> Html {
    let theme = use_theme();
    let phase = props.phase;

    let badge = css!(
        r#"
            display: inline-block;
            padding: 0.5rem 1rem;
            border-radius: 20px;
            font-family: 'Inter', sans-serif;
            font-size: 0.9rem;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 1px;
            background: ${bg};
            color: ${fg};
        "#,
        bg = phase.status.badge_color(&theme),
        fg = theme.dark_bg,
    );

    let header = css!(
        r#"
            border: 2px solid ${border};
        "#,
        border = Theme::alpha(theme.gold, "40"),
    );

    html! {
        <section class="phase-section">
            <div class={classes!("phase-header", header)}>
                <h2 class="phase-title">{phase.title}</h2>
                <div class="phase-timeline">{phase.timeline}</div>
                <div class={badge}>{phase.status.label()}</div>
                <p class="phase-description">{phase.description}</p>
            </div>

            <div class="content-grid">
                <div class="content-section">
                    <h3 class="section-title">{"🎯 Objectives"}</h3>
                    <ul class="deliverables-list">
                        { for phase.objectives.iter().map(|objective| html! {
                            <li class="deliverable-item">
                                <div class="deliverable-text">{*objective}</div>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="content-section">
                    <h3 class="section-title">{"🛠️ Key Deliverables"}</h3>
                    <ul class="deliverables-list">
                        { for phase.deliverables.iter().map(|deliverable| html! {
                            <li class={classes!("deliverable-item", deliverable.completed.then(|| "completed"))}>
                                <div class="deliverable-text">{deliverable.text}</div>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="metrics-grid">
                { for phase.metrics.iter().map(|metric| html! {
                    <div class="metric-card">
                        <div class="metric-value">{metric.value}</div>
                        <div class="metric-label">{metric.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
