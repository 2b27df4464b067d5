use super::rich_text::RichText;
use crate::i18n::{t, use_locale};
use legacy_core::{IndexedRule, display_number};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rule: IndexedRule,
    /// Position within the rendered (possibly filtered) list.
    pub position: usize,
    pub on_copy: Callback<String>,
}

#[function_component(RuleCard)]
pub fn rule_card(p: &Props) -> Html {
    let _locale = use_locale();
    let copy = {
        let cb = p.on_copy.clone();
        let anchor = p.rule.anchor.clone();
        Callback::from(move |_: MouseEvent| cb.emit(anchor.clone()))
    };
    html! {
        <article id={p.rule.anchor.clone()} class="rule-card scroll-mt-28">
            <div class="card-gta">
                <div class="rule-number">
                    <span>{ display_number(p.position) }</span>
                </div>
                <div class="rule-body">
                    <div class="rule-heading">
                        <h3>{ p.rule.title().to_string() }</h3>
                        <button type="button" class="rule-copy" title={t("rules.copy_title")} onclick={copy}>
                            { t("rules.copy") }
                        </button>
                    </div>
                    <RichText text={AttrValue::from(p.rule.description().to_string())} />
                    <div class="rule-sanction">
                        <span>{ t("rules.sanction") }</span>
                    </div>
                </div>
            </div>
        </article>
    }
}
