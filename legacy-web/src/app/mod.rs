#[cfg(target_arch = "wasm32")]
use crate::i18n::LocaleContext;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod view;

pub use view::{ShellProps, SiteShell};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let content = use_memo((), |_| bootstrap::load_content());
    let lang = use_state(|| AttrValue::from(crate::i18n::current_lang()));
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| {
            crate::i18n::set_lang(&code);
            lang.set(AttrValue::from(crate::i18n::current_lang()));
        })
    };
    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });

    html! {
        <ContextProvider<LocaleContext> context={(*lang).clone()}>
            <SiteShell
                content={content}
                route={route}
                current_lang={(*lang).clone()}
                on_lang_change={on_lang_change}
                on_navigate={on_navigate}
            />
        </ContextProvider<LocaleContext>>
    }
}
