use stylist::yew::styled_component;
use yew::prelude::*;

use crate::roadmap::{PhaseId, PHASES};
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct PhaseTabsProps {
    pub active: PhaseId,
    pub on_select: Callback<PhaseId>,
}

#[styled_component(PhaseTabs)]
pub fn phase_tabs(props: &PhaseTabsProps) -> Html {
    let theme = use_theme();

    let nav = css!(
        r#"
            display: flex;
            gap: 1rem;
            margin-bottom: 4rem;
            justify-content: center;
            flex-wrap: wrap;

            @media (max-width: 768px) {
                flex-direction: column;
                align-items: center;
            }
        "#
    );

    let tab = css!(
        r#"
            background: rgba(255, 255, 255, 0.1);
            color: ${white};
            border: 2px solid ${gold};
            border-radius: 12px;
            padding: 1rem 2rem;
            font-family: 'Inter', sans-serif;
            font-weight: 600;
            cursor: pointer;
            transition: all 0.3s ease;
            min-width: 200px;

            &:hover {
                background: ${gold};
                color: ${dark_bg};
                transform: translateY(-2px);
            }
        "#,
        white = theme.white,
        gold = theme.gold,
        dark_bg = theme.dark_bg,
    );

    let active_tab = css!(
        r#"
            background: ${gold};
            color: ${dark_bg};

            &:hover {
                background: ${muted_gold};
            }
        "#,
        gold = theme.gold,
        dark_bg = theme.dark_bg,
        muted_gold = theme.muted_gold,
    );

    html! {
        <div class={nav}>
            { for PHASES.iter().map(|phase| {
                let id = phase.id;
                let onclick = props.on_select.reform(move |_: MouseEvent| id);
                html! {
                    <button
                        key={id.as_str()}
                        class={classes!(tab.clone(), (props.active == id).then(|| active_tab.clone()))}
                        {onclick}
                    >
                        {phase.title}
                    </button>
                }
            }) }
        </div>
    }
}
