//! Public marketing page at `/`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

/// Scroll offset after which the header gets a solid background.
pub const SOLID_HEADER_OFFSET: f64 = 20.0;

pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y > SOLID_HEADER_OFFSET
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⌖",
        title: "Scan & Detect",
        description: "Scan food package barcodes and detect sugar content automatically using advanced OCR technology.",
    },
    Feature {
        icon: "☰",
        title: "Track & Monitor",
        description: "Keep track of your daily sugar intake with a detailed history and personal logs.",
    },
    Feature {
        icon: "▤",
        title: "Visualize Data",
        description: "See your consumption patterns with intuitive charts and personalized analytics.",
    },
    Feature {
        icon: "⛨",
        title: "Secure & Private",
        description: "Your health data stays private with our secure authentication and data protection.",
    },
];

#[component]
fn LandingHeader() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or_default();
            scrolled.set(header_is_solid(y));
        });
        on_cleanup(move || handle.remove());
    }

    let close_menu = move |_| menu_open.set(false);

    view! {
        <header class="landing-header" class:landing-header--solid=move || scrolled.get()>
            <div class="landing-header__bar">
                <a href="/" class="landing-header__brand">
                    <span class="brand-mark" aria-hidden="true">"◆"</span>
                    <span class="brand-name">"ScanSek"</span>
                </a>
                <nav class="landing-header__links">
                    <a href="/">"Home"</a>
                    <a href="#features">"Features"</a>
                    <a href="#about">"About"</a>
                    <a href="#contact">"Contact"</a>
                    <a href="/login" class="btn btn--primary">"Login"</a>
                </nav>
                <button
                    type="button"
                    class="landing-header__toggle"
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="landing-header__mobile">
                    <a href="/" on:click=close_menu>"Home"</a>
                    <a href="#features" on:click=close_menu>"Features"</a>
                    <a href="#about" on:click=close_menu>"About"</a>
                    <a href="#contact" on:click=close_menu>"Contact"</a>
                    <a href="/login" on:click=close_menu>"Login"</a>
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <LandingHeader/>
            <section class="hero">
                <div class="hero__copy">
                    <h1>"Smart Sugar " <span class="hero__accent">"Monitoring"</span> " Made Simple"</h1>
                    <p>
                        "ScanSek helps you track your daily sugar intake by simply scanning food packages. "
                        "Take control of your health with accurate data and insightful analytics."
                    </p>
                    <div class="hero__actions">
                        <a href="/login" class="btn btn--primary btn--large">"Get Started ›"</a>
                        <a href="#features" class="btn btn--large">"Learn More"</a>
                    </div>
                </div>
                <div class="hero__art" aria-hidden="true">
                    <div class="hero__phone">
                        <span class="hero__scan-line"></span>
                        <span class="hero__reading">"24.5g sugar"</span>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2>"Powerful Features"</h2>
                <p class="features__lead">
                    "ScanSek combines cutting-edge technology with user-friendly design to help you monitor sugar consumption effectively."
                </p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <article class="feature-card">
                                    <span class="feature-card__icon" aria-hidden="true">{f.icon}</span>
                                    <h3>{f.title}</h3>
                                    <p>{f.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="about" class="cta">
                <h2>"Ready to Monitor Your Sugar Intake?"</h2>
                <p>
                    "Join thousands of users who are taking control of their health with ScanSek's powerful tracking tools."
                </p>
                <a href="/login" class="btn btn--inverse btn--large">"Start Tracking Now"</a>
            </section>

            <footer id="contact" class="landing-footer">
                <div class="landing-footer__brand">
                    <span class="brand-mark" aria-hidden="true">"◆"</span>
                    <span class="brand-name">"ScanSek"</span>
                    <p>"Smart sugar monitoring for healthier everyday choices."</p>
                </div>
                <nav class="landing-footer__links">
                    <a href="#features">"Features"</a>
                    <a href="/login">"Login"</a>
                    <a href="mailto:hello@scansek.com">"hello@scansek.com"</a>
                </nav>
                <p class="landing-footer__legal">"© 2025 ScanSek. All rights reserved."</p>
            </footer>
        </div>
    }
}
