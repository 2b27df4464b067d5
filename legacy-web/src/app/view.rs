use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::HomePage;
use crate::pages::normativas::NormativasPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use crate::site::SiteContent;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub content: Rc<SiteContent>,
    /// `None` before the router has resolved the location; treated as home.
    #[prop_or_default]
    pub route: Option<Route>,
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
    pub on_navigate: Callback<Route>,
}

/// Header, routed main view and footer.
#[function_component(SiteShell)]
pub fn site_shell(props: &ShellProps) -> Html {
    let route = props.route.clone().unwrap_or(Route::Home);
    let content = props.content.clone();

    let main_view = match &route {
        Route::Home => html! { <HomePage content={content} /> },
        Route::Normativas => html! { <NormativasPage content={content} /> },
        Route::NotFound => {
            let go_home = {
                let navigate = props.on_navigate.clone();
                Callback::from(move |()| navigate.emit(Route::Home))
            };
            html! { <NotFound on_go_home={go_home} /> }
        }
    };

    html! {
        <>
            <Header
                server_name={AttrValue::from(props.content.config.server.name.clone())}
                on_landing={route.is_landing()}
                current_lang={props.current_lang.clone()}
                on_lang_change={props.on_lang_change.clone()}
                on_navigate={props.on_navigate.clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <Footer server_name={AttrValue::from(props.content.config.server.name.clone())} />
        </>
    }
}
