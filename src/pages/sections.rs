use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{self, HIGHLIGHTS, PORTFOLIO, PROCESS, SERVICES, TECHNOLOGIES, WHY_US};
use crate::scroll::Section;

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    eyebrow: &'static str,
    children: Children,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading in-view">
            <span class="eyebrow">{props.eyebrow}</span>
            <h2 class="display">{ for props.children.iter() }</h2>
        </div>
    }
}

/// Stagger for cards revealed one after another.
fn stagger(index: usize, step: f64) -> String {
    format!("animation-delay: {:.2}s;", index as f64 * step)
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section-padding panel">
            <div class="container about-grid">
                <div class="in-view slide-right">
                    <h2 class="display about-title">
                        {"Based in Karachi,"}
                        <br />
                        <span class="gradient-text">{"Serving the World"}</span>
                    </h2>
                    <p class="lead">
                        {"We've partnered with 50+ global clients to deliver 100+ projects that don't \
                          just meet expectations, they redefine what's possible. From startups disrupting \
                          industries to enterprises seeking digital transformation, we turn complex \
                          challenges into competitive advantages."}
                    </p>
                    <p class="lead">
                        {"While others experiment, we deploy production-ready systems using the latest \
                          breakthroughs in Agentic AI, RAG, and multimodal intelligence."}
                    </p>
                </div>

                <div class="about-card-wrap in-view slide-left">
                    <div class="about-card">
                        { for HIGHLIGHTS.iter().enumerate().map(|(i, item)| html! {
                            <div key={item.label} class="highlight in-view" style={stagger(i, 0.1)}>
                                <div class="glyph">{item.glyph}</div>
                                <div class="highlight-label">{item.label}</div>
                                <div class="highlight-value">{item.value}</div>
                            </div>
                        }) }
                    </div>
                    <div class="about-card-outline"></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section-padding panel alt">
            <div class="container">
                <SectionHeading eyebrow="OUR EXPERTISE">
                    {"Our Core "}<span class="gradient-text">{"Competencies"}</span>
                </SectionHeading>

                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div key={service.title} class="card lift in-view" style={stagger(i, 0.1)}>
                            <div class="icon-tile">{service.glyph}</div>
                            <h3 class="display">{service.title}</h3>
                            <p class="card-text">{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section id={Section::WhyUs.id()} class="section-padding panel">
            <div class="container">
                <SectionHeading eyebrow="WHY ENCON-TECH">
                    {"Why "}<span class="gradient-text">{"Forward-Thinking"}</span>{" Companies"}
                    <br />
                    {"Partner With Us"}
                </SectionHeading>

                <div class="card-grid two">
                    { for WHY_US.iter().enumerate().map(|(i, item)| html! {
                        <div key={item.title} class="reason in-view" style={stagger(i, 0.1)}>
                            <div class="icon-tile large">{item.glyph}</div>
                            <div>
                                <h3 class="display">{item.title}</h3>
                                <p class="card-text">{item.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id={Section::Portfolio.id()} class="section-padding panel alt">
            <div class="container">
                <SectionHeading eyebrow="OUR WORK">
                    {"Featured "}<span class="gradient-text">{"Innovation"}</span>{" Portfolio"}
                </SectionHeading>

                <div class="card-grid two">
                    { for PORTFOLIO.iter().enumerate().map(|(i, project)| html! {
                        <div key={project.title} class="project in-view" style={stagger(i, 0.1)}>
                            <div class="project-body">
                                <span class="eyebrow">{project.category}</span>
                                <h3 class="display">{project.title}</h3>
                                <p class="card-text">{project.description}</p>
                            </div>
                            <div class="project-overlay">
                                <span>{"View Case Study →"}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    html! {
        <section id={Section::Technology.id()} class="section-padding panel">
            <div class="container">
                <SectionHeading eyebrow="TECH STACK">
                    {"The Technology Behind "}<span class="gradient-text">{"Tomorrow"}</span>
                </SectionHeading>

                <div class="tech-cloud">
                    { for TECHNOLOGIES.iter().enumerate().map(|(i, tech)| html! {
                        <div key={tech.name} class="tech-chip pop-in" style={stagger(i, 0.05)}>
                            <span class="tech-icon">{tech.icon}</span>
                            <span class="tech-name">{tech.name}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    let last = PROCESS.len().saturating_sub(1);

    html! {
        <section id={Section::Process.id()} class="section-padding panel alt">
            <div class="container">
                <SectionHeading eyebrow="OUR APPROACH">
                    {"From Vision to "}<span class="gradient-text">{"Value"}</span>
                </SectionHeading>

                <div class="card-grid five">
                    { for PROCESS.iter().enumerate().map(|(i, item)| html! {
                        <div key={item.step} class="step in-view" style={stagger(i, 0.1)}>
                            <div class="step-card">
                                <span class="step-number gradient-text">{item.step}</span>
                                <h3 class="display">{item.title}</h3>
                                <p class="card-text">{item.description}</p>
                            </div>
                            { if i < last { html! { <span class="step-arrow">{"›"}</span> } } else { html! {} } }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section-padding panel contact">
            <div class="gradient-mesh grid-lines faded"></div>

            <div class="container contact-inner in-view">
                <span class="eyebrow">{"GET IN TOUCH"}</span>
                <h2 class="display contact-title">
                    {"Ready to Build the "}<span class="gradient-text">{"Future"}</span>{"?"}
                </h2>
                <p class="contact-lead">
                    {"Your vision deserves more than incremental improvement. It deserves transformation."}
                    <br />
                    {"Let's architect intelligence together."}
                </p>

                <div class="contact-actions">
                    <button class="btn-primary">{"Start Your Project →"}</button>
                </div>

                <div class="contact-meta">
                    <span>{format!("📍 {}", content::LOCATION)}</span>
                    <span>{format!("📧 {}", content::CONTACT_NOTE)}</span>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-logo">
                    <span class="gradient-text">{config::BRAND_PRIMARY}</span>
                    <span>{config::BRAND_SECONDARY}</span>
                </div>

                <div class="footer-links">
                    { for Section::FOOTER.into_iter().map(|section| html! {
                        <button
                            key={section.id()}
                            class="footer-link"
                            onclick={props.on_navigate.reform(move |_: MouseEvent| section)}
                        >
                            {section.label()}
                        </button>
                    }) }
                </div>

                <p class="copyright">
                    {format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}
                </p>
            </div>

            <style>
                {r#"
                .panel {
                    position: relative;
                    background: var(--bg);
                    transition: background-color 0.4s ease;
                }

                .panel.alt {
                    background: var(--surface);
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 3rem;
                    margin: 0.5rem 0 0;
                }

                .eyebrow {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--orange-primary);
                }

                .lead {
                    font-size: 1.125rem;
                    color: var(--body-text);
                    margin-bottom: 1.5rem;
                }

                .card-text {
                    font-size: 0.9rem;
                    line-height: 1.6;
                    color: var(--body-text);
                }

                .in-view {
                    opacity: 0;
                    animation: revealUp 0.8s ease-out forwards;
                }

                .slide-right {
                    animation-name: slideRight;
                }

                .slide-left {
                    animation-name: slideLeft;
                }

                @keyframes slideRight {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes slideLeft {
                    from { opacity: 0; transform: translateX(30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-title {
                    font-size: 3rem;
                    margin: 0 0 1.5rem;
                }

                .about-card-wrap {
                    position: relative;
                }

                .about-card {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--surface);
                }

                .about-card-outline {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    width: 100%;
                    height: 100%;
                    border-radius: 1rem;
                    border: 2px solid var(--orange-primary);
                    opacity: 0.3;
                }

                .highlight {
                    text-align: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: var(--raised);
                }

                .highlight-label {
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .highlight-value {
                    font-weight: 600;
                }

                .glyph {
                    font-size: 1.75rem;
                    margin-bottom: 0.5rem;
                }

                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .card-grid.two {
                    grid-template-columns: repeat(2, 1fr);
                }

                .card-grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .card-grid.five {
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }

                .card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--bg);
                    border: 1px solid var(--hairline);
                    cursor: pointer;
                }

                .lift {
                    transition: transform 0.3s ease;
                }

                .lift:hover {
                    transform: translateY(-8px);
                }

                .icon-tile {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1.25rem;
                    background: rgba(255, 107, 53, 0.15);
                }

                .icon-tile.large {
                    width: 4rem;
                    height: 4rem;
                    flex-shrink: 0;
                    font-size: 2rem;
                }

                .reason {
                    display: flex;
                    gap: 1.5rem;
                }

                .project {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: var(--raised);
                }

                .project-body {
                    padding: 2rem;
                }

                .project-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 600;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    background: linear-gradient(135deg, rgba(255, 107, 53, 0.95), rgba(255, 140, 66, 0.9));
                }

                .project:hover .project-overlay {
                    opacity: 1;
                }

                .tech-cloud {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .tech-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-radius: 0.75rem;
                    background: var(--surface);
                    border: 1px solid var(--hairline);
                    transition: transform 0.2s ease;
                }

                .tech-chip:hover {
                    transform: scale(1.05);
                }

                .tech-icon {
                    font-size: 1.5rem;
                }

                .tech-name {
                    font-weight: 500;
                }

                .pop-in {
                    opacity: 0;
                    animation: popIn 0.5s ease-out forwards;
                }

                @keyframes popIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }

                .step {
                    position: relative;
                }

                .step-card {
                    height: 100%;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: var(--raised);
                }

                .step-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .step-arrow {
                    position: absolute;
                    top: 50%;
                    right: -0.9rem;
                    transform: translateY(-50%);
                    z-index: 1;
                    font-size: 1.5rem;
                    color: var(--orange-primary);
                }

                .contact {
                    overflow: hidden;
                }

                .faded {
                    opacity: 0.5;
                }

                .contact-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    text-align: center;
                }

                .contact-title {
                    font-size: 3.75rem;
                    margin: 0.5rem 0 1.5rem;
                }

                .contact-lead {
                    font-size: 1.25rem;
                    margin-bottom: 2.5rem;
                    color: var(--body-text);
                }

                .contact-actions {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 3rem;
                }

                .contact-meta {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                .site-footer {
                    padding: 3rem 0;
                    background: var(--surface);
                }

                .footer-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .footer-links {
                    display: flex;
                    gap: 2rem;
                }

                .footer-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.875rem;
                    color: var(--muted);
                    transition: color 0.2s ease;
                }

                .footer-link:hover {
                    color: var(--orange-primary);
                }

                .copyright {
                    font-size: 0.875rem;
                    color: var(--muted);
                }

                @media (max-width: 1024px) {
                    .card-grid.three {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .about-grid,
                    .card-grid.two,
                    .card-grid.three,
                    .card-grid.five {
                        grid-template-columns: 1fr;
                    }

                    .step-arrow {
                        display: none;
                    }

                    .section-heading h2,
                    .about-title {
                        font-size: 2.25rem;
                    }

                    .contact-title {
                        font-size: 2.5rem;
                    }

                    .footer-inner {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, 0.1), "animation-delay: 0.00s;");
        assert_eq!(stagger(3, 0.1), "animation-delay: 0.30s;");
        assert_eq!(stagger(4, 0.05), "animation-delay: 0.20s;");
    }
}
