use crate::components::normativas_tabs::{NormativasTab, NormativasTabs};
use crate::i18n::{t, use_locale};
use crate::site::SiteContent;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NormativasPageProps {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub initial_tab: NormativasTab,
}

#[function_component(NormativasPage)]
pub fn normativas_page(p: &NormativasPageProps) -> Html {
    let _locale = use_locale();
    html! {
        <section class="panel normativas-page" aria-labelledby="normativas-title">
            <h1 id="normativas-title">{ t("rules.title") }</h1>
            <p>{ t("rules.subtitle") }</p>
            <NormativasTabs content={p.content.clone()} initial={p.initial_tab} />
        </section>
    }
}
