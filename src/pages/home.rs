use yew::prelude::*;

use crate::components::invest_form::InvestForm;
use crate::components::investor_modal::{InvestorCard, InvestorModal, ModalHost};
use crate::components::linkedin_feed::LinkedInFeed;
use crate::components::section_link::SectionLink;
use crate::config;
use crate::hooks::use_reveal::use_reveal;

const PAGE_STYLE: &str = r#"
    .animate-in {
        animation: fadeInUp 0.8s ease-out forwards;
    }
    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
    .investor-modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 1000;
        background: rgba(8, 12, 18, 0.8);
        align-items: center;
        justify-content: center;
    }
    .investor-modal.active {
        display: flex;
    }
    .investor-modal-content {
        position: relative;
        max-width: 560px;
        width: 90%;
        padding: 2rem;
        border-radius: 16px;
        background: rgba(19, 26, 34, 0.98);
    }
    .modal-close {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        background: none;
        border: none;
        font-size: 1.75rem;
        color: inherit;
        cursor: pointer;
    }
    .linkedin-post iframe {
        width: 100%;
        min-height: 560px;
        border: 0;
    }
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 900;
        background: transparent;
        backdrop-filter: none;
        box-shadow: none;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .navbar.scrolled {
        background: rgba(24, 24, 43, 0.95);
        backdrop-filter: blur(20px);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_reveal(config::REVEAL_SELECTOR, config::reveal_options());

    html! {
        <ModalHost>
        <div class="landing-page">
            <style>{PAGE_STYLE}</style>

            <header class="hero">
                <div class="hero-background"></div>
                <div class="floating-triangles">
                    <div class="triangle-1"></div>
                    <div class="triangle-2"></div>
                    <div class="triangle-3"></div>
                </div>
                <div class="hero-content">
                    <img class="hero-helm" src="/assets/helm.svg" alt="Valkyrie helm" />
                    <h1 class="hero-title">{"Valkyrie Revival Fund"}</h1>
                    <p class="hero-tagline">{"Capital for companies worth saving."}</p>
                    <p class="hero-message">
                        {"We acquire distressed but fundamentally sound businesses and lead them back to growth."}
                    </p>
                    <div class="hero-cta">
                        <SectionLink href="#invest" class="btn-primary">{"Invest With Us"}</SectionLink>
                    </div>
                </div>
            </header>

            <section id="strategy" class="strategy">
                <h2>{"Our Strategy"}</h2>
                <div class="strategy-grid">
                    <div class="strategy-card">
                        <h3>{"Identify"}</h3>
                        <p>{"Source overlooked companies with durable products and fixable balance sheets."}</p>
                    </div>
                    <div class="strategy-card">
                        <h3>{"Restructure"}</h3>
                        <p>{"Reset capital structures and install operators who have done it before."}</p>
                    </div>
                    <div class="strategy-card">
                        <h3>{"Revive"}</h3>
                        <p>{"Fund the turnaround plan and stay hands-on until the business compounds again."}</p>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <h2>{"About the Fund"}</h2>
                <div class="about-stats">
                    <div class="stat-item">
                        <span class="stat-number">{"12"}</span>
                        <span class="stat-label">{"Turnarounds led"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{"3.1x"}</span>
                        <span class="stat-label">{"Median MOIC"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{"20+"}</span>
                        <span class="stat-label">{"Years of operating experience"}</span>
                    </div>
                </div>
            </section>

            <section id="investors" class="investors">
                <h2>{"What Our Investors Get"}</h2>
                <div class="investor-grid">
                    <InvestorCard
                        modal_id="modal-reporting"
                        icon="📊"
                        title="Transparent Reporting"
                        summary="Quarterly letters and portfolio-level metrics."
                    />
                    <InvestorCard
                        modal_id="modal-access"
                        icon="🤝"
                        title="Direct Access"
                        summary="Regular calls with the investment team."
                    />
                    <InvestorCard
                        modal_id="modal-coinvest"
                        icon="🛡"
                        title="Co-Investment Rights"
                        summary="First look at larger deals alongside the fund."
                    />
                </div>

                <InvestorModal id="modal-reporting" title="Transparent Reporting">
                    <p>{"Every quarter you receive a written letter, audited NAV, and a company-by-company breakdown of progress against the turnaround plan."}</p>
                </InvestorModal>
                <InvestorModal id="modal-access" title="Direct Access">
                    <p>{"Investors can book time with the partners directly. We hold an annual meeting with portfolio CEOs in attendance."}</p>
                </InvestorModal>
                <InvestorModal id="modal-coinvest" title="Co-Investment Rights">
                    <p>{"When a deal exceeds the fund's concentration limit, existing investors are offered the remaining allocation on the same terms."}</p>
                </InvestorModal>
            </section>

            <section id="invest" class="invest">
                <h2>{"Register Your Interest"}</h2>
                <div class="invest-layout">
                    <InvestForm />
                    <div class="invest-info">
                        <div class="info-card">
                            <h3>{"Minimum Commitment"}</h3>
                            <p>{"$50,000 for qualified individual investors."}</p>
                        </div>
                        <div class="info-card">
                            <h3>{"Fund Term"}</h3>
                            <p>{"Seven years with two optional one-year extensions."}</p>
                        </div>
                        <div class="info-card">
                            <h3>{"Next Close"}</h3>
                            <p>{"We will contact you with the subscription documents."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="feed" class="feed">
                <h2>{"Latest From Prytaneum Partners"}</h2>
                <LinkedInFeed />
            </section>

            <footer class="footer">
                <div class="footer-links">
                    <SectionLink href="#strategy" class="footer-link">{"Strategy"}</SectionLink>
                    <SectionLink href="#about" class="footer-link">{"About"}</SectionLink>
                    <SectionLink href="#investors" class="footer-link">{"Investors"}</SectionLink>
                    <SectionLink href="#invest" class="footer-link">{"Invest"}</SectionLink>
                </div>
                <p class="footer-note">{"© Prytaneum Partners. This site does not constitute an offer to sell securities."}</p>
            </footer>
        </div>
        </ModalHost>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_styles_scrolled_navbar() {
        let rule = PAGE_STYLE
            .split(".navbar.scrolled {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect(".navbar.scrolled rule present");
        assert!(rule.contains("background: rgba(24, 24, 43, 0.95);"));
        assert!(rule.contains("backdrop-filter: blur(20px);"));
        assert!(rule.contains("box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);"));
    }

    #[test]
    fn stylesheet_defines_reveal_animation() {
        assert!(PAGE_STYLE.contains(".animate-in {"));
        assert!(PAGE_STYLE.contains("@keyframes fadeInUp"));
        assert!(PAGE_STYLE.contains(".investor-modal.active {"));
    }
}
