use yew::prelude::*;

use crate::components::nav::Nav;
use crate::content::STATS;
use crate::hooks::{use_display_mode, use_scroll_tracker};
use crate::pages::sections::{About, Contact, Footer, Portfolio, Process, Services, TechStack, WhyUs};
use crate::scroll::{scroll_to_section, Section};
use crate::style::ThemeStyle;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_navigate = &props.on_navigate;

    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="gradient-mesh grid-lines"></div>

            <div class="container hero-inner">
                <div class="hero-copy">
                    <span class="hero-badge reveal">{"🚀 Architecting the Intelligent Future"}</span>

                    <h1 class="hero-title reveal" style="animation-delay: 0.1s;">
                        {"We don't just build "}
                        <span class="gradient-text">{"software."}</span>
                        <br />
                        {"We engineer "}
                        <span class="gradient-text">{"intelligent systems"}</span>
                        <br />
                        {"that think & evolve."}
                    </h1>

                    <p class="hero-lead reveal" style="animation-delay: 0.2s;">
                        {"Since 2020, Encon-Tech has been at the forefront of the AI revolution, \
                          transforming how businesses operate through autonomous agents, generative \
                          intelligence, and predictive systems that deliver measurable impact."}
                    </p>

                    <div class="hero-actions reveal" style="animation-delay: 0.3s;">
                        <button class="btn-primary" onclick={on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                            {"Build with Us →"}
                        </button>
                        <button class="btn-secondary" onclick={on_navigate.reform(|_: MouseEvent| Section::Portfolio)}>
                            {"View Our Work ›"}
                        </button>
                    </div>
                </div>

                <div class="hero-orb float-animation">
                    <div class="orb-ring outer pulse-glow"></div>
                    <div class="orb-ring inner"></div>
                    <div class="orb-core">{"🧠"}</div>
                </div>
            </div>

            <div class="container hero-stats reveal" style="animation-delay: 0.5s;">
                { for STATS.iter().map(|stat| html! {
                    <div key={stat.label} class="stat">
                        <div class="stat-value gradient-text">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let (mode, toggle_theme) = use_display_mode();
    let tracker = use_scroll_tracker();
    let navigate = Callback::from(scroll_to_section);

    html! {
        <div class={classes!("site", (!mode.is_dark()).then(|| "light"))}>
            <ThemeStyle mode={mode} />
            <Nav
                mode={mode}
                active={tracker.active()}
                scrolled={tracker.scrolled()}
                on_toggle_theme={toggle_theme}
                on_navigate={navigate.clone()}
            />

            <Hero on_navigate={navigate.clone()} />
            <About />
            <Services />
            <WhyUs />
            <Portfolio />
            <TechStack />
            <Process />
            <Contact />
            <Footer on_navigate={navigate} />

            <style>
                {r#"
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-padding {
                    padding: 6rem 1.5rem;
                }

                .gradient-text {
                    background: linear-gradient(135deg, var(--orange-primary), var(--orange-light));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .display {
                    font-family: "Clash Display", sans-serif;
                }

                .btn-primary,
                .btn-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.85rem 1.75rem;
                    border-radius: 10px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.15s ease, box-shadow 0.3s ease;
                }

                .btn-primary {
                    border: none;
                    color: #fff;
                    background: linear-gradient(135deg, var(--orange-primary), var(--orange-dark));
                }

                .btn-secondary {
                    color: var(--fg);
                    background: transparent;
                    border: 1px solid var(--orange-primary);
                }

                .btn-primary:hover,
                .btn-secondary:hover {
                    transform: scale(1.03);
                    box-shadow: 0 0 24px rgba(255, 107, 53, 0.35);
                }

                .btn-primary:active,
                .btn-secondary:active {
                    transform: scale(0.98);
                }

                .reveal {
                    opacity: 0;
                    animation: revealUp 0.8s ease-out forwards;
                }

                @keyframes revealUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                }

                .gradient-mesh {
                    position: absolute;
                    inset: 0;
                    background:
                        radial-gradient(circle at 20% 30%, rgba(255, 107, 53, 0.15), transparent 45%),
                        radial-gradient(circle at 80% 70%, rgba(255, 140, 66, 0.1), transparent 40%);
                }

                .grid-lines {
                    background-image:
                        linear-gradient(var(--hairline) 1px, transparent 1px),
                        linear-gradient(90deg, var(--hairline) 1px, transparent 1px);
                    background-size: 60px 60px;
                }

                .hero-inner {
                    position: relative;
                    z-index: 1;
                    padding-top: 8rem;
                    padding-bottom: 8rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .hero-copy {
                    max-width: 56rem;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                    background: rgba(255, 107, 53, 0.15);
                    color: var(--orange-primary);
                    border: 1px solid rgba(255, 107, 53, 0.3);
                }

                .hero-title {
                    font-family: "Clash Display", sans-serif;
                    font-size: 4.5rem;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .hero-lead {
                    font-size: 1.25rem;
                    max-width: 42rem;
                    margin-bottom: 2.5rem;
                    color: var(--muted);
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-orb {
                    position: relative;
                    width: 20rem;
                    height: 20rem;
                    flex-shrink: 0;
                }

                .orb-ring {
                    position: absolute;
                    border-radius: 50%;
                }

                .orb-ring.outer {
                    inset: 0;
                    opacity: 0.1;
                    background: linear-gradient(135deg, var(--orange-primary), var(--orange-light));
                }

                .orb-ring.inner {
                    inset: 2rem;
                    opacity: 0.2;
                    background: linear-gradient(135deg, var(--orange-primary), var(--orange-dark));
                }

                .orb-core {
                    position: absolute;
                    inset: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 4rem;
                }

                .float-animation {
                    animation: float 6s ease-in-out infinite;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                .pulse-glow {
                    animation: pulseGlow 3s ease-in-out infinite;
                }

                @keyframes pulseGlow {
                    0%, 100% { box-shadow: 0 0 40px rgba(255, 107, 53, 0.3); }
                    50% { box-shadow: 0 0 80px rgba(255, 107, 53, 0.6); }
                }

                .hero-stats {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 3rem;
                    padding-top: 1.5rem;
                    padding-bottom: 2rem;
                    border-top: 1px solid var(--hairline);
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .stat-label {
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                @media (max-width: 1024px) {
                    .hero-orb {
                        display: none;
                    }
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }

                    .hero-stats {
                        justify-content: center;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
