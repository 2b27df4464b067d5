use futures::executor::block_on;
use legacy_web::app::bootstrap::load_content;
use legacy_web::components::footer::Footer;
use legacy_web::components::header::Header;
use legacy_web::components::hero::{Hero, HeroBanner, HeroBannerProps, HeroProps};
use legacy_web::components::loading_screen::LoadingScreen;
use legacy_web::components::normativas_tabs::{NormativasTab, NormativasTabs};
use legacy_web::components::rules::Rules;
use legacy_web::components::rules::rich_text::RichText;
use legacy_web::components::team::Team;
use legacy_web::site::SiteContent;
use std::rc::Rc;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn content() -> Rc<SiteContent> {
    Rc::new(load_content())
}

#[test]
fn header_renders_sections_and_language_select() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::header::Props {
        server_name: AttrValue::from("Complex Legacy"),
        on_landing: true,
        current_lang: AttrValue::from("es"),
        on_lang_change: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("href=\"#rules\""));
    assert!(html.contains("href=\"#team\""));
    assert!(html.contains("rules-page-link"));
    assert!(html.contains("Español"));
    assert!(html.contains("English"));
}

#[test]
fn header_links_back_to_landing_from_other_routes() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::header::Props {
        server_name: AttrValue::from("Complex Legacy"),
        on_landing: false,
        current_lang: AttrValue::from("es"),
        on_lang_change: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(!html.contains("href=\"#rules\""));
    assert!(html.contains("/#rules\""));
}

#[test]
fn footer_renders_server_name() {
    legacy_web::i18n::set_lang("en");
    let props = legacy_web::components::footer::Props {
        server_name: AttrValue::from("Complex Legacy"),
    };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("<footer>"));
    assert!(html.contains("© Complex Legacy · All rights reserved"));
}

#[test]
fn loading_screen_shows_percentage() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::loading_screen::Props {
        server_name: AttrValue::from("Complex Legacy"),
        percent: 42,
        on_skip: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoadingScreen>::with_props(props).render());
    assert!(html.contains("Cargando... 42%"));
    assert!(html.contains("width: 42%"));
    assert!(html.contains("Presiona cualquier tecla"));
}

#[test]
fn hero_starts_on_the_loading_screen() {
    legacy_web::i18n::set_lang("es");
    let props = HeroProps { content: content() };
    let html = block_on(LocalServerRenderer::<Hero>::with_props(props).render());
    assert!(html.contains("loading-screen"));
    assert!(html.contains("Cargando... 0%"));
    assert!(!html.contains("id=\"home\""));
}

#[test]
fn hero_banner_renders_stats_and_actions() {
    legacy_web::i18n::set_lang("es");
    let props = HeroBannerProps {
        content: content(),
        players_label: AttrValue::from("187/256"),
        tip_index: 1,
    };
    let html = block_on(LocalServerRenderer::<HeroBanner>::with_props(props).render());
    assert!(html.contains("id=\"home\""));
    assert!(html.contains("187/256"));
    assert!(html.contains("ONLINE"));
    assert!(html.contains("5+"));
    assert!(html.contains("99.9%"));
    assert!(html.contains("Usa /report para contactar con el staff."));
    assert!(html.contains("https://complexlegacy.net/whitelist"));
    assert!(html.contains("connect play.complexlegacy.net"));
    assert!(html.contains("Copiar IP"));
    assert_eq!(html.matches("class=\"feature-pill\"").count(), 3);
    assert_eq!(html.matches("class=\"mini-thumb\"").count(), 4);
}

#[test]
fn hero_banner_hides_whitelist_when_disabled() {
    legacy_web::i18n::set_lang("es");
    let mut site = load_content();
    site.config.whitelist.enabled = false;
    let props = HeroBannerProps {
        content: Rc::new(site),
        players_label: AttrValue::from("0/256"),
        tip_index: 0,
    };
    let html = block_on(LocalServerRenderer::<HeroBanner>::with_props(props).render());
    assert!(!html.contains("Aplicar a Whitelist"));
}

#[test]
fn rules_render_sidebar_and_cards_with_anchors() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::rules::Props {
        content: content(),
        show_heading: true,
        initial_query: AttrValue::default(),
    };
    let html = block_on(LocalServerRenderer::<Rules>::with_props(props).render());
    assert!(html.contains("Normativas del Servidor"));
    assert!(html.contains("href=\"#regla-1\""));
    assert!(html.contains("href=\"#regla-no-combat-logging\""));
    assert!(html.contains("id=\"regla-menu-de-descanso\""));
    assert!(html.contains("id=\"regla-pvp\""));
    assert!(html.contains("<li>Sin insultos OOC</li>"));
    assert_eq!(html.matches("class=\"rule-copy\"").count(), 7);
    assert!(html.contains("https://discord.gg/complexlegacy"));
}

#[test]
fn rules_query_filters_cards_but_not_the_index() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::rules::Props {
        content: content(),
        show_heading: false,
        initial_query: AttrValue::from("PVP"),
    };
    let html = block_on(LocalServerRenderer::<Rules>::with_props(props).render());
    assert!(html.contains("id=\"regla-pvp\""));
    assert!(!html.contains("id=\"regla-1\""));
    assert!(html.contains("href=\"#regla-1\""));
    assert_eq!(html.matches("class=\"rule-copy\"").count(), 1);
    assert!(!html.contains("section-heading"));
}

#[test]
fn rules_report_an_empty_search() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::rules::Props {
        content: content(),
        show_heading: true,
        initial_query: AttrValue::from("zzz"),
    };
    let html = block_on(LocalServerRenderer::<Rules>::with_props(props).render());
    assert!(html.contains("rules-empty"));
    assert!(html.contains("Ninguna normativa coincide con"));
    assert!(!html.contains("class=\"rule-copy\""));
}

#[test]
fn rich_text_renders_lists_and_paragraphs() {
    let props = legacy_web::components::rules::rich_text::Props {
        text: AttrValue::from("- uno\n- dos\n\nPárrafo simple"),
    };
    let html = block_on(LocalServerRenderer::<RichText>::with_props(props).render());
    assert!(html.contains("<li>uno</li>"));
    assert!(html.contains("<li>dos</li>"));
    assert!(html.contains("Párrafo simple</p>"));
}

#[test]
fn team_renders_owner_and_placeholders() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::team::Props { content: content() };
    let html = block_on(LocalServerRenderer::<Team>::with_props(props).render());
    assert!(html.contains("id=\"team\""));
    assert!(html.contains("Dueño"));
    assert!(html.contains("Fundador"));
    assert!(html.contains("@legacy"));
    assert_eq!(html.matches("@proximamente").count(), 3);
    assert!(html.contains("from-yellow-400 to-orange-500"));
}

#[test]
fn tabs_mark_the_active_tab() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::normativas_tabs::Props {
        content: content(),
        initial: NormativasTab::General,
    };
    let html = block_on(LocalServerRenderer::<NormativasTabs>::with_props(props).render());
    assert!(html.contains("role=\"tablist\""));
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    assert_eq!(html.matches("aria-selected=\"false\"").count(), 1);
    assert!(html.contains("Servidor de roleplay en Los Santos"));
    assert!(!html.contains("id=\"rules\""));
}

#[test]
fn rules_tab_embeds_the_rules_section() {
    legacy_web::i18n::set_lang("es");
    let props = legacy_web::components::normativas_tabs::Props {
        content: content(),
        initial: NormativasTab::Rules,
    };
    let html = block_on(LocalServerRenderer::<NormativasTabs>::with_props(props).render());
    assert!(html.contains("id=\"rules\""));
    assert!(html.contains("id=\"regla-1\""));
    assert!(!html.contains("section-heading"));
}
