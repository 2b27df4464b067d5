use crate::components::rules::Rules;
use crate::i18n::{t, use_locale};
use crate::site::SiteContent;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormativasTab {
    #[default]
    General,
    Rules,
}

impl NormativasTab {
    pub const ALL: [Self; 2] = [Self::General, Self::Rules];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::General => "tab-general",
            Self::Rules => "tab-rules",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::General => "tabs.general",
            Self::Rules => "tabs.rules",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub initial: NormativasTab,
}

#[function_component(NormativasTabs)]
pub fn normativas_tabs(p: &Props) -> Html {
    let _locale = use_locale();
    let active = use_state(|| p.initial);

    let tab_button = |tab: NormativasTab| {
        let selected = *active == tab;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(tab))
        };
        html! {
            <button
                type="button"
                role="tab"
                id={tab.id()}
                class={classes!("tab", selected.then_some("tab-active"))}
                aria-selected={selected.to_string()}
                aria-controls="normativas-panel"
                tabindex={if selected { "0" } else { "-1" }}
                {onclick}
            >
                { t(tab.label_key()) }
            </button>
        }
    };

    let panel = match *active {
        NormativasTab::General => {
            let server = &p.content.config.server;
            html! {
                <div class="tab-general">
                    <h2>{ server.name.clone() }</h2>
                    <p class="hero-tagline">{ server.tagline.clone() }</p>
                    <p>{ server.description.clone() }</p>
                </div>
            }
        }
        NormativasTab::Rules => html! { <Rules content={p.content.clone()} show_heading={false} /> },
    };

    html! {
        <div class="normativas-tabs">
            <div role="tablist" aria-label={t("tabs.label")} class="tablist">
                { for NormativasTab::ALL.into_iter().map(tab_button) }
            </div>
            <div id="normativas-panel" role="tabpanel" aria-labelledby={active.id()}>
                { panel }
            </div>
        </div>
    }
}
