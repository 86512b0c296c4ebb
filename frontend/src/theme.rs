use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Gallery + fintech palette shared by every page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub dark_bg: &'static str,
    pub charcoal: &'static str,
    pub gold: &'static str,
    pub teal: &'static str,
    pub purple: &'static str,
    pub white: &'static str,
    pub light_gray: &'static str,
    pub muted_gold: &'static str,
}

pub const ART_THEME: Theme = Theme {
    dark_bg: "#1a1a2e",    // midnight blue
    charcoal: "#16213e",
    gold: "#d4af37",       // gallery gold
    teal: "#40e0d0",
    purple: "#9d4edd",
    white: "#ffffff",
    light_gray: "#f8f9fa",
    muted_gold: "#b8860b",
};

impl Default for Theme {
    fn default() -> Self {
        ART_THEME
    }
}

impl Theme {
    /// Appends a two digit hex alpha to one of the palette colours,
    /// e.g. `alpha(theme.gold, "40")` -> `#d4af3740`.
    pub fn alpha(color: &str, alpha: &str) -> String {
        format!("{}{}", color, alpha)
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = props.theme;

    // Page stylesheets read the palette through these custom properties.
    let globals = css!(
        r#"
            :root {
                --dark-bg: ${dark_bg};
                --charcoal: ${charcoal};
                --gold: ${gold};
                --teal: ${teal};
                --purple: ${purple};
                --white: ${white};
                --light-gray: ${light_gray};
                --muted-gold: ${muted_gold};
            }
            html, body {
                margin: 0;
                padding: 0;
                background: ${dark_bg};
                color: ${white};
                font-family: 'Inter', sans-serif;
            }
            *, *::before, *::after {
                box-sizing: border-box;
            }
        "#,
        dark_bg = theme.dark_bg,
        charcoal = theme.charcoal,
        gold = theme.gold,
        teal = theme.teal,
        purple = theme.purple,
        white = theme.white,
        light_gray = theme.light_gray,
        muted_gold = theme.muted_gold,
    );

    html! {
        <ContextProvider<Theme> context={theme}>
            <Global css={globals} />
            { for props.children.iter() }
        </ContextProvider<Theme>>
    }
}

/// Current palette, falling back to [`ART_THEME`] outside a provider.
#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_the_gallery_palette() {
        let theme = Theme::default();
        assert_eq!(theme.dark_bg, "#1a1a2e");
        assert_eq!(theme.gold, "#d4af37");
        assert_eq!(theme.muted_gold, "#b8860b");
    }

    #[test]
    fn alpha_appends_hex_channel() {
        assert_eq!(Theme::alpha(ART_THEME.gold, "40"), "#d4af3740");
    }
}
