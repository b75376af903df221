use yew::prelude::*;

use crate::config;
use crate::scroll::Section;
use crate::theme::DisplayMode;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub mode: DisplayMode,
    pub active: Section,
    pub scrolled: bool,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { mode, active, scrolled, on_toggle_theme, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every menu pick scrolls and closes the mobile overlay.
    let navigate = {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |section: Section| {
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    let go_home = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(Section::Hero);
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo" onclick={go_home}>
                        <span class="gradient-text">{config::BRAND_PRIMARY}</span>
                        <span class="logo-rest">{config::BRAND_SECONDARY}</span>
                    </a>

                    <div class="nav-links">
                        { for Section::nav_items().map(|section| html! {
                            <button
                                key={section.id()}
                                class={classes!("nav-link", (*active == section).then(|| "active"))}
                                onclick={navigate.reform(move |_: MouseEvent| section)}
                            >
                                {section.label()}
                            </button>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <button
                            class="theme-toggle"
                            onclick={on_toggle_theme.clone()}
                            title="Toggle theme"
                            aria-label="Toggle theme"
                        >
                            { if mode.is_dark() { "☀" } else { "☾" } }
                        </button>
                        <button
                            class="btn-primary nav-cta"
                            onclick={navigate.reform(|_: MouseEvent| Section::Contact)}
                        >
                            {"Get Started"}
                        </button>
                        <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </nav>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::nav_items().enumerate().map(|(i, section)| html! {
                                <button
                                    key={section.id()}
                                    class="mobile-menu-item"
                                    style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}
                                    onclick={navigate.reform(move |_: MouseEvent| section)}
                                >
                                    {section.label()}
                                </button>
                            }) }
                            <button
                                class="btn-primary mobile-menu-cta"
                                onclick={navigate.reform(|_: MouseEvent| Section::Contact)}
                            >
                                {"Get Started"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    animation: navDrop 0.5s ease-out;
                }

                .top-nav.scrolled {
                    background: color-mix(in srgb, var(--bg) 80%, transparent);
                    backdrop-filter: blur(20px);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                }

                @keyframes navDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    text-decoration: none;
                    color: var(--fg);
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--muted);
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: var(--orange-primary);
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .theme-toggle {
                    padding: 0.5rem 0.65rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    font-size: 1.1rem;
                    background: var(--hairline);
                    color: var(--fg);
                    transition: transform 0.15s ease;
                }

                .theme-toggle:hover {
                    transform: scale(1.1);
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.5rem;
                    color: var(--fg);
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: color-mix(in srgb, var(--bg) 98%, transparent);
                    backdrop-filter: blur(20px);
                    animation: menuSlide 0.3s ease-out;
                }

                @keyframes menuSlide {
                    from { opacity: 0; transform: translateX(100%); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .mobile-menu-item {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: var(--fg);
                    opacity: 0;
                    animation: menuItemIn 0.3s ease-out forwards;
                }

                @keyframes menuItemIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 768px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}
