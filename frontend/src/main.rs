use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod theme;
mod lending;
mod roadmap;
mod invitation;
mod components {
    pub mod page_meta;
    pub mod back_link;
    pub mod investment_calculator;
    pub mod opportunity_card;
    pub mod invitation_form;
    pub mod phase_tabs;
    pub mod phase_section;
    pub mod timeline;
}
mod pages {
    pub mod home;
    pub mod canvas;
    pub mod roadmap;
    pub mod not_found;
}

use pages::{
    home::Home,
    canvas::Canvas,
    roadmap::Roadmap,
    not_found::NotFound,
};
use theme::ThemeProvider;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/canvas")]
    Canvas,
    #[at("/roadmap")]
    Roadmap,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Canvas => {
            info!("Rendering Canvas page");
            html! { <Canvas /> }
        },
        Route::Roadmap => {
            info!("Rendering Roadmap page");
            html! { <Roadmap /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logging is best effort, the site still renders without a console
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/canvas"), Some(Route::Canvas));
        assert_eq!(Route::recognize("/roadmap"), Some(Route::Roadmap));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Canvas.to_path(), "/canvas");
        assert_eq!(Route::Roadmap.to_path(), "/roadmap");
    }
}
