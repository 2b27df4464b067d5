use crate::components::hero::Hero;
use crate::components::rules::Rules;
use crate::components::team::Team;
use crate::site::SiteContent;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub content: Rc<SiteContent>,
}

/// Landing page sections in scroll order.
#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    html! {
        <>
            <Hero content={p.content.clone()} />
            <Rules content={p.content.clone()} />
            <Team content={p.content.clone()} />
        </>
    }
}
