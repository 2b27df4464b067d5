//! Searchable rules section: sidebar index over every rule, cards for the
//! rules matching the current query.

pub mod rich_text;
pub mod rule_card;
pub mod sidebar;

use crate::i18n::{t, tr, use_locale};
use crate::site::SiteContent;
use rule_card::RuleCard;
use sidebar::RulesSidebar;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
    #[prop_or(true)]
    pub show_heading: bool,
    /// Starting search text.
    #[prop_or_default]
    pub initial_query: AttrValue,
}

#[function_component(Rules)]
pub fn rules(p: &Props) -> Html {
    let _locale = use_locale();
    let query = use_state(|| p.initial_query.clone());
    let all = use_memo(p.content.clone(), |content| content.rules.clone());
    let filtered = use_memo(
        (p.content.clone(), (*query).clone()),
        |(content, query)| content.search(query),
    );

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(AttrValue::from(value)))
    };
    let on_copy = Callback::from(|anchor: String| crate::dom::copy_anchor_link(&anchor));

    let empty = (filtered.is_empty() && !query.trim().is_empty()).then(|| {
        let mut vars = BTreeMap::new();
        vars.insert("query", query.as_str());
        html! { <p class="rules-empty" role="status">{ tr("rules.empty", Some(&vars)) }</p> }
    });

    let heading = p.show_heading.then(|| {
        html! {
            <div class="section-heading">
                <h2>{ t("rules.title") }</h2>
                <p>{ t("rules.subtitle") }</p>
            </div>
        }
    });

    html! {
        <section id="rules" class="rules">
            <div class="container-gta">
                { heading }
                <div class="rules-layout">
                    <RulesSidebar rules={all} query={(*query).clone()} on_query={on_query} />
                    <div class="rules-content">
                        { for filtered.iter().enumerate().map(|(position, rule)| html! {
                            <RuleCard
                                rule={rule.clone()}
                                position={position}
                                on_copy={on_copy.clone()}
                            />
                        }) }
                        { empty }
                        <div class="rule-card rules-reminder">
                            <div class="card-gta">
                                <h3>{ t("rules.reminder_title") }</h3>
                                <p>{ t("rules.reminder_body") }</p>
                                <a href={p.content.config.social.discord.clone()} target="_blank"
                                    rel="noopener noreferrer" class="btn-gta-gold">
                                    { t("rules.open_discord") }
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
