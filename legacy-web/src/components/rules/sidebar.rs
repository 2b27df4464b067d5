use crate::i18n::{t, use_locale};
use legacy_core::{IndexedRule, display_number};
use std::rc::Rc;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Every rule; numbering follows this list, not the search results.
    pub rules: Rc<Vec<IndexedRule>>,
    pub query: AttrValue,
    pub on_query: Callback<String>,
}

#[function_component(RulesSidebar)]
pub fn rules_sidebar(p: &Props) -> Html {
    let _locale = use_locale();
    let oninput = {
        let cb = p.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    html! {
        <aside class="rules-sidebar">
            <div class="rules-search">
                <label for="rules-search" class="sr-only">{ t("rules.search_label") }</label>
                <input
                    id="rules-search"
                    type="search"
                    value={p.query.clone()}
                    placeholder={t("rules.search_placeholder")}
                    {oninput}
                />
            </div>
            <nav class="rules-index" aria-label={t("rules.index_label")}>
                { for p.rules.iter().enumerate().map(|(position, rule)| html! {
                    <a href={rule.href()}>
                        <span class="rule-index-number">{ display_number(position) }</span>
                        { rule.title().to_string() }
                    </a>
                }) }
            </nav>
        </aside>
    }
}
