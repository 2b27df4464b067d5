use crate::i18n::{t, use_locale};
use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let _locale = use_locale();
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.body") }</p>
            <button type="button" onclick={go_home}>
                { t("ui.back_home") }
            </button>
        </section>
    }
}
