// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod sections;
pub mod store;

use content::data::PROFILE;
use content::i18n::ui_text;
use components::error_banner::ErrorBanner;
use components::navbar::Navbar;
use sections::about::AboutSection;
use sections::contact::ContactSection;
use sections::experience::ExperienceSection;
use sections::hero::HeroSection;
use sections::skills::SkillsSection;
use store::use_app_store_provider;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        // Rewritten to the resolved appearance's color on every theme apply.
        document::Meta {
            name: "theme-color",
            content: "#ffffff",
        }
        style { "{STYLESHEET}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Builds the store and rehydrates preferences before the first paint.
    let store = use_app_store_provider();

    // Track the environment color scheme while the mode is `system`.
    hooks::use_system_theme_listener();

    let lang = store.language();
    let t = ui_text(lang);
    let role = PROFILE.role.get(lang);

    rsx! {
        document::Title { "{PROFILE.name} — {role}" }
        Navbar {}
        ErrorBanner {}
        main {
            HeroSection {}
            AboutSection {}
            SkillsSection {}
            ExperienceSection {}
            ContactSection {}
        }
        footer { class: "footer",
            p { "© 2025 {PROFILE.name}. {t.footer.rights}" }
            p { class: "muted", "{t.footer.built_with}" }
        }
    }
}

const STYLESHEET: &str = r#"
    * { box-sizing: border-box; }

    html {
        scroll-behavior: smooth;
    }

    html.light {
        --bg: #ffffff;
        --bg-soft: #f4f5f7;
        --fg: #16181d;
        --muted: #5c6370;
        --border: #e2e4e9;
        --accent: #2563eb;
        --accent-soft: rgba(37, 99, 235, 0.12);
    }

    html.dark {
        --bg: #0a0a0f;
        --bg-soft: #15161d;
        --fg: #e8eaf0;
        --muted: #9aa1af;
        --border: #262834;
        --accent: #60a5fa;
        --accent-soft: rgba(96, 165, 250, 0.14);
    }

    body {
        margin: 0;
        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
        background-color: var(--bg);
        color: var(--fg);
        line-height: 1.6;
        transition: background-color 0.3s, color 0.3s;
    }

    main { max-width: 960px; margin: 0 auto; padding: 0 1rem; }
    .muted { color: var(--muted); }

    /* --- NAVBAR --- */
    .navbar {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 50;
        background-color: var(--bg);
        border-bottom: 1px solid var(--border);
    }
    .navbar-inner {
        max-width: 960px;
        margin: 0 auto;
        padding: 0.6rem 1rem;
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .brand {
        font-weight: 700;
        color: var(--fg);
        text-decoration: none;
        margin-right: auto;
    }
    .nav-links {
        display: flex;
        gap: 1.25rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-links a {
        color: var(--muted);
        text-decoration: none;
    }
    .nav-links a:hover { color: var(--accent); }
    .nav-actions { display: flex; gap: 0.4rem; }

    .menu-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
    }
    .mobile-menu {
        position: absolute;
        top: 100%; left: 0; right: 0;
        display: flex;
        flex-direction: column;
        background-color: var(--bg);
        border-bottom: 1px solid var(--border);
    }
    .mobile-menu-item {
        padding: 0.75rem 1rem;
        color: var(--fg);
        text-decoration: none;
        border-top: 1px solid var(--border);
    }
    .mobile-menu-item:hover { background-color: var(--accent-soft); }

    /* --- BUTTONS & FORMS --- */
    .btn {
        font: inherit;
        border-radius: 8px;
        padding: 0.5rem 1.1rem;
        cursor: pointer;
        border: 1px solid transparent;
    }
    .btn-primary { background-color: var(--accent); color: #fff; }
    .btn-outline {
        background: none;
        border-color: var(--accent);
        color: var(--accent);
    }
    .btn-ghost { background: none; color: var(--fg); }
    .btn-ghost:hover, .btn-outline:hover { background-color: var(--accent-soft); }

    .field { display: block; margin-bottom: 1rem; }
    .field-label { display: block; margin-bottom: 0.25rem; font-size: 0.9rem; }
    .field input, .field textarea {
        width: 100%;
        font: inherit;
        color: var(--fg);
        background-color: var(--bg-soft);
        border: 1px solid var(--border);
        border-radius: 8px;
        padding: 0.55rem 0.75rem;
    }
    .field input:focus, .field textarea:focus {
        outline: 2px solid var(--accent);
        outline-offset: 1px;
    }

    /* --- HERO --- */
    .hero {
        position: relative;
        min-height: 92vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        padding-top: 4rem;
    }
    .hero-content { position: relative; z-index: 1; }
    .hero-greeting { color: var(--accent); margin-bottom: 0; }
    .hero-name { font-size: 2.8rem; margin: 0.2rem 0; }
    .hero-role { font-size: 1.4rem; color: var(--muted); margin: 0 0 1rem; }
    .hero-tagline { max-width: 34rem; }
    .hero-actions { display: flex; gap: 0.75rem; margin-top: 1.5rem; }

    .hero-orbs { position: absolute; inset: 0; pointer-events: none; }
    .orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(60px);
        opacity: 0.5;
        animation: drift 14s ease-in-out infinite alternate;
    }
    .orb-one { width: 320px; height: 320px; top: 10%; right: 5%; background: var(--accent); }
    .orb-two { width: 220px; height: 220px; bottom: 15%; left: 10%; background: #a855f7; animation-delay: -4s; }
    .orb-three { width: 160px; height: 160px; top: 45%; left: 45%; background: #14b8a6; animation-delay: -9s; }
    @keyframes drift {
        from { transform: translate3d(0, 0, 0) scale(1); }
        to { transform: translate3d(30px, -40px, 0) scale(1.15); }
    }

    /* --- SECTIONS --- */
    .section { padding: 4.5rem 0 1rem; }
    .section-head h2 { font-size: 1.9rem; margin-bottom: 0.25rem; }
    .section-head { margin-bottom: 1.5rem; }

    .card {
        background-color: var(--bg-soft);
        border: 1px solid var(--border);
        border-radius: 12px;
        padding: 1.25rem;
    }

    .about-grid {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 1.5rem;
    }
    .about-facts dt { font-weight: 600; margin-top: 0.6rem; }
    .about-facts dd { margin: 0; color: var(--muted); }

    .skills-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .skill-list { list-style: none; margin: 0; padding: 0; }
    .skill-row {
        display: flex;
        justify-content: space-between;
        padding: 0.3rem 0;
        border-bottom: 1px solid var(--border);
    }

    .badge {
        font-size: 0.78rem;
        padding: 0.1rem 0.55rem;
        border-radius: 999px;
        background-color: var(--accent-soft);
        color: var(--accent);
    }
    .badge-accent { background-color: var(--accent); color: #fff; }

    .timeline { display: flex; flex-direction: column; gap: 1rem; }
    .timeline-head { display: flex; align-items: center; gap: 0.75rem; }
    .timeline-head h3 { margin: 0; }
    .timeline-meta { color: var(--muted); margin-top: 0.25rem; }
    .tech-list {
        display: flex;
        flex-wrap: wrap;
        gap: 0.4rem;
        list-style: none;
        margin: 0.5rem 0 0;
        padding: 0;
    }

    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1.2fr;
        gap: 1.5rem;
        align-items: start;
    }
    .contact-email a { color: var(--accent); }
    .social-list { list-style: none; padding: 0; display: flex; gap: 1rem; }
    .social-list a { color: var(--muted); }
    .social-list a:hover { color: var(--accent); }
    .copy-status { font-size: 0.9rem; color: var(--muted); }
    .form-hint { font-size: 0.85rem; margin-top: 0.5rem; }

    /* --- ERROR BANNER --- */
    .error-banner {
        position: fixed;
        top: 3.4rem; left: 0; right: 0;
        z-index: 40;
        display: flex;
        justify-content: center;
        gap: 1rem;
        padding: 0.6rem 1rem;
        background-color: #b91c1c;
        color: #fff;
    }
    .error-dismiss {
        font: inherit;
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
    }

    .footer {
        border-top: 1px solid var(--border);
        margin-top: 3rem;
        padding: 1.5rem 1rem;
        text-align: center;
    }

    @media (max-width: 767px) {
        .about-grid, .contact-grid { grid-template-columns: 1fr; }
        .hero-name { font-size: 2.1rem; }
    }

    @media (prefers-reduced-motion: reduce) {
        html { scroll-behavior: auto; }
        .orb { animation: none; }
        body { transition: none; }
    }
"#;
