use stylist::yew::Global;
use stylist::{css, StyleSource};
use yew::prelude::*;

use crate::theme::DisplayMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub raised: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub body_text: &'static str,
    pub hairline: &'static str,
}

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Palette {
                background: "#0D0D0D",
                surface: "#1A1A1A",
                raised: "#2D2D2D",
                foreground: "#FFFFFF",
                muted: "#888888",
                body_text: "#AAAAAA",
                hairline: "rgba(255, 255, 255, 0.1)",
            },
            DisplayMode::Light => Palette {
                background: "#FFFFFF",
                surface: "#F8F8F8",
                raised: "#E5E5E5",
                foreground: "#0D0D0D",
                muted: "#666666",
                body_text: "#555555",
                hairline: "rgba(0, 0, 0, 0.1)",
            },
        }
    }
}

fn global_style(mode: DisplayMode) -> StyleSource {
    let palette = Palette::for_mode(mode);
    css!(
        r#"
        :root {
            --orange-primary: #FF6B35;
            --orange-dark: #E85A24;
            --orange-light: #FF8C42;
            --bg: ${background};
            --surface: ${surface};
            --raised: ${raised};
            --fg: ${foreground};
            --muted: ${muted};
            --body-text: ${body_text};
            --hairline: ${hairline};
        }

        *, *::before, *::after {
            box-sizing: border-box;
        }

        html {
            scroll-behavior: smooth;
        }

        body {
            margin: 0;
            background: var(--bg);
            color: var(--fg);
            font-family: Satoshi, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            -webkit-font-smoothing: antialiased;
            transition: background-color 0.4s ease, color 0.4s ease;
        }
        "#,
        background = palette.background,
        surface = palette.surface,
        raised = palette.raised,
        foreground = palette.foreground,
        muted = palette.muted,
        body_text = palette.body_text,
        hairline = palette.hairline,
    )
}

#[derive(Properties, PartialEq)]
pub struct ThemeStyleProps {
    pub mode: DisplayMode,
}

/// Page-wide palette for the current display mode.
#[function_component(ThemeStyle)]
pub fn theme_style(props: &ThemeStyleProps) -> Html {
    html! { <Global css={global_style(props.mode)} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_invert_background_and_foreground() {
        let dark = Palette::for_mode(DisplayMode::Dark);
        let light = Palette::for_mode(DisplayMode::Light);
        assert_eq!(dark.background, light.foreground);
        assert_eq!(dark.foreground, "#FFFFFF");
        assert_eq!(light.background, "#FFFFFF");
        assert_ne!(dark.surface, light.surface);
    }
}
