use crate::i18n::{t, tr, use_locale};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub server_name: AttrValue,
    pub percent: u8,
    /// Fired on any key press or click over the screen.
    #[prop_or_default]
    pub on_skip: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(p: &Props) -> Html {
    let _locale = use_locale();
    let screen_ref = use_node_ref();
    {
        let screen_ref = screen_ref.clone();
        // Key presses only reach the screen once it holds focus.
        use_effect_with((), move |_| {
            if let Some(el) = screen_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || ()
        });
    }
    let percent = p.percent.min(100).to_string();
    let mut vars = BTreeMap::new();
    vars.insert("percent", percent.as_str());
    let on_key = {
        let skip = p.on_skip.clone();
        Callback::from(move |_: KeyboardEvent| skip.emit(()))
    };
    let on_click = {
        let skip = p.on_skip.clone();
        Callback::from(move |_: MouseEvent| skip.emit(()))
    };

    html! {
        <div ref={screen_ref} class="loading-screen" role="status" aria-live="polite" tabindex="0"
            onkeydown={on_key} onclick={on_click}>
            <div class="loading-content">
                <h1 class="font-bebas">{ p.server_name.clone() }</h1>
                <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                    aria-valuenow={percent.clone()}>
                    <div class="progress-fill" style={format!("width: {percent}%")}></div>
                </div>
                <p class="loading-percent">{ tr("loading.progress", Some(&vars)) }</p>
                <p class="animate-pulse">{ t("loading.press_any_key") }</p>
            </div>
        </div>
    }
}
