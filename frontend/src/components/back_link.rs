use stylist::yew::styled_component;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::use_theme;
use crate::Route;

#[styled_component(BackLink)]
pub fn back_link() -> Html {
    let theme = use_theme();
    let link = css!(
        r#"
            display: inline-flex;
            align-items: center;
            color: ${gold};
            text-decoration: none;
            font-family: 'Inter', sans-serif;
            font-weight: 600;
            margin-bottom: 2rem;
            transition: all 0.3s ease;

            &:hover {
                transform: translateX(-5px);
                color: ${white};
            }

            &::before {
                content: '←';
                margin-right: 0.5rem;
                font-size: 1.2rem;
            }
        "#,
        gold = theme.gold,
        white = theme.white,
    );

    html! {
        <header class="page-header">
            <Link<Route> to={Route::Home} classes={classes!(link)}>
                {"Back to Home"}
            </Link<Route>>
        </header>
    }
}
