use stylist::yew::styled_component;
use yew::prelude::*;

use crate::lending::Opportunity;
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct OpportunityCardProps {
    pub opportunity: Opportunity,
}

#[styled_component(OpportunityCard)]
pub fn opportunity_card(props: &OpportunityCardProps) -> Html {
    let theme = use_theme();
    let Opportunity { title, funded_percent, expected } = props.opportunity;

    let fill = css!(
        r#"
            height: 100%;
            width: ${width}%;
            background: linear-gradient(90deg, ${teal}, ${gold});
            border-radius: 4px;
            transition: width 0.3s ease;
        "#,
        width = funded_percent,
        teal = theme.teal,
        gold = theme.gold,
    );

    html! {
        <div class="artwork-card">
            <div class="artwork-image">{title}</div>
            <h4 class="artwork-title">{title}</h4>
            <div class="progress-bar">
                <div class={fill}></div>
            </div>
            <div class="artwork-stats">
                <span>{format!("{}% Funded", funded_percent)}</span>
                <span>{format!("Expected: {}", expected)}</span>
            </div>
            <button class="claim-button">{"Claim Slice"}</button>
        </div>
    }
}
