use crate::i18n::{locales, t, use_locale};
use crate::paths::route_href;
use crate::router::Route;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub server_name: AttrValue,
    /// Section links are same-page fragments only on the landing route.
    pub on_landing: bool,
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
    pub on_navigate: Callback<Route>,
}

fn section_href(on_landing: bool, section: &str) -> String {
    if on_landing {
        format!("#{section}")
    } else {
        format!("{}#{section}", route_href("/"))
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let _locale = use_locale();
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let go = |route: Route| {
        let cb = p.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(route.clone());
        })
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <a class="brand" href={route_href("/")} onclick={go(Route::Home)}>
                    { p.server_name.clone() }
                </a>
                <nav class="header-links">
                    <a href={section_href(p.on_landing, "home")}>{ t("nav.home") }</a>
                    <a href={section_href(p.on_landing, "rules")}>{ t("nav.rules") }</a>
                    <a href={section_href(p.on_landing, "team")}>{ t("nav.team") }</a>
                    <a id="rules-page-link" href={route_href("/normativas")} onclick={go(Route::Normativas)}>
                        { t("nav.rules_page") }
                    </a>
                </nav>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
