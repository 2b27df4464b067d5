//! Landing hero: a cosmetic loading screen followed by the server banner.
//!
//! [`Hero`] owns the timers; [`HeroBanner`] only renders a snapshot so it can
//! be rendered on the server.

use crate::components::loading_screen::LoadingScreen;
use crate::dom::copy_to_clipboard;
use crate::i18n::{t, use_locale};
use crate::paths::asset_path;
use crate::site::SiteContent;
use crate::timers::PeriodicTask;
use legacy_core::{
    COUNTER_TICK_MS, HeroStats, LOADING_TICK_MS, LoadingProgress, PlayerCounter, TIP_ROTATE_MS,
    TipRotation, feature_pills, mini_gallery,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use yew::prelude::*;

const HERO_BACKGROUND: &str = "images/hero/legacyf.png";
const HERO_CHARACTER: &str = "https://r2.fivemanage.com/kMtLpNIqKRhMGpzrcZnQY/imagen1.png";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn counter_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let server = &props.content.config.server;
    let max_players = server.max_players;
    let tip_count = server.loading_tips.len();

    let progress = use_state(LoadingProgress::new);
    let skipped = use_state(|| false);
    let counter = use_state(move || PlayerCounter::with_target(0, max_players));
    let tips = use_state(move || TipRotation::new(tip_count));

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let mut model = LoadingProgress::new();
            let task = PeriodicTask::start(LOADING_TICK_MS, move || {
                let running = model.tick();
                progress.set(model);
                running
            });
            move || drop(task)
        });
    }
    {
        let counter = counter.clone();
        use_effect_with(max_players, move |max: &u32| {
            let mut rng = SmallRng::seed_from_u64(counter_seed());
            let mut model = PlayerCounter::new(*max, &mut rng);
            log::debug!("Player counter target {}", model.target());
            let task = PeriodicTask::start(COUNTER_TICK_MS, move || {
                let running = model.tick();
                counter.set(model);
                running
            });
            move || drop(task)
        });
    }
    {
        let tips = tips.clone();
        use_effect_with(tip_count, move |len: &usize| {
            let mut model = TipRotation::new(*len);
            tips.set(model);
            let task = model
                .is_active()
                .then(|| {
                    PeriodicTask::start(TIP_ROTATE_MS, move || {
                        model = model.next();
                        tips.set(model);
                        true
                    })
                })
                .flatten();
            move || drop(task)
        });
    }

    if !progress.is_finished() && !*skipped {
        let on_skip = {
            let skipped = skipped.clone();
            Callback::from(move |()| skipped.set(true))
        };
        return html! {
            <LoadingScreen
                server_name={AttrValue::from(server.name.clone())}
                percent={progress.percent()}
                on_skip={on_skip}
            />
        };
    }

    html! {
        <HeroBanner
            content={props.content.clone()}
            players_label={AttrValue::from(counter.label())}
            tip_index={tips.index()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub content: Rc<SiteContent>,
    /// Player counter text, e.g. `"187/256"`.
    pub players_label: AttrValue,
    #[prop_or_default]
    pub tip_index: usize,
}

#[function_component(HeroBanner)]
pub fn hero_banner(p: &HeroBannerProps) -> Html {
    let _locale = use_locale();
    let config = &p.content.config;
    let server = &config.server;
    let stats = HeroStats::from_config(config, p.players_label.to_string());

    let copy_ip = {
        let ip = server.ip.clone();
        Callback::from(move |_: MouseEvent| copy_to_clipboard(&ip))
    };

    let tip = server.loading_tips.get(p.tip_index).map(|tip| {
        html! {
            <div class="hero-tip">
                <p>
                    <span class="text-gta-gold mr-2">{ t("hero.tip_label") }</span>
                    { tip.clone() }
                </p>
            </div>
        }
    });

    let pills = feature_pills(config);
    let pills = (!pills.is_empty()).then(|| {
        html! {
            <div class="feature-pills">
                { for pills.iter().map(|feature| html! {
                    <span class="feature-pill">{ feature.title.clone() }</span>
                }) }
            </div>
        }
    });

    let thumbs = mini_gallery(config);
    let thumbs = (!thumbs.is_empty()).then(|| {
        html! {
            <div class="mini-gallery">
                { for thumbs.iter().map(|image| html! {
                    <div class="mini-thumb">
                        <img src={asset_path(&image.src)} alt={image.alt.clone()} />
                    </div>
                }) }
            </div>
        }
    });

    let whitelist = config.whitelist.enabled.then(|| {
        html! {
            <a href={config.whitelist.application_url.clone()} target="_blank"
                rel="noopener noreferrer" class="btn-gta-gold">
                { t("hero.apply_whitelist") }
            </a>
        }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-background">
                <img src={asset_path(HERO_BACKGROUND)} alt={t("hero.background_alt")} />
            </div>
            <div class="hero-content container-gta">
                <div class="hero-character">
                    <img src={HERO_CHARACTER} alt={t("hero.character_alt")} />
                    <div class="hero-character-caption">
                        <h2 class="text-gta-gold">{ t("hero.welcome") }</h2>
                        <p class="hero-character-name">{ server.name.clone() }</p>
                    </div>
                </div>
                <div class="hero-info">
                    <h1>{ server.name.clone() }</h1>
                    <p class="hero-tagline">{ server.tagline.clone() }</p>
                    { tip }
                    <p class="hero-description">{ server.description.clone() }</p>
                    { pills }
                    <div class="hero-stats">
                        { for stats.items.iter().map(|stat| html! {
                            <div class="stat-item">
                                <p class="stat-label">{ t(stat.label_key) }</p>
                                <p class={classes!("stat-value", stat.highlight.then_some("text-gta-green"))}>
                                    { stat.value.clone() }
                                </p>
                            </div>
                        }) }
                    </div>
                    { thumbs }
                    <div class="hero-actions">
                        <button type="button" class="btn-gta" onclick={copy_ip.clone()}>
                            { t("hero.connect") }
                        </button>
                        <a href={server.discord.clone()} target="_blank" rel="noopener noreferrer"
                            class="btn-gta-outline">
                            { t("hero.join_discord") }
                        </a>
                        { whitelist }
                    </div>
                    <div class="hero-address">
                        <div>
                            <p class="text-gta-light">{ t("hero.address") }</p>
                            <p class="server-ip">{ server.ip.clone() }</p>
                        </div>
                        <button type="button" id="copy-ip-btn" onclick={copy_ip}>
                            { t("hero.copy_ip") }
                        </button>
                    </div>
                </div>
            </div>
            <div class="scroll-indicator">
                <p>{ t("hero.scroll") }</p>
            </div>
        </section>
    }
}
