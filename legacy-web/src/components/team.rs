use crate::i18n::{t, use_locale};
use crate::paths::asset_path;
use crate::site::SiteContent;
use legacy_core::TeamCard;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
}

fn render_card(card: &TeamCard) -> Html {
    let role_label = t(card.role.label_key());
    let name = card.name.clone().unwrap_or_else(|| role_label.clone());
    let subtitle = card
        .subtitle
        .clone()
        .unwrap_or_else(|| t("team.coming_soon"));
    html! {
        <div class="team-card group">
            <div class="card-cyber">
                <div class="avatar-container">
                    <img src={asset_path(&card.avatar)} alt={name.clone()} />
                    <div class={classes!("role-badge", "bg-gradient-to-r", card.role.gradient())}>
                        <i class={card.role.icon()} aria-hidden="true"></i>
                        <span>{ role_label }</span>
                    </div>
                </div>
                <h3 class="team-name">{ name }</h3>
                <p class="team-subtitle">{ subtitle }</p>
                <div class="team-handle"><span>{ card.handle.clone() }</span></div>
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team(p: &Props) -> Html {
    let _locale = use_locale();
    let roster = TeamCard::roster(&p.content.config.team);
    html! {
        <section id="team" class="team">
            <div class="section-container">
                <div class="section-heading">
                    <h2><span class="gradient-text">{ t("team.title") }</span></h2>
                    <p>{ t("team.subtitle") }</p>
                </div>
                <div class="team-grid">
                    { for roster.iter().map(render_card) }
                </div>
                <div class="team-cta">
                    <p>{ t("team.join_prompt") }</p>
                    <a href={p.content.config.social.discord.clone()} target="_blank"
                        rel="noopener noreferrer" class="btn-primary">
                        { t("team.apply") }
                    </a>
                </div>
            </div>
        </section>
    }
}
