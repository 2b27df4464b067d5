use crate::i18n::{tr, use_locale};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub server_name: AttrValue,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let _locale = use_locale();
    let mut vars = BTreeMap::new();
    vars.insert("server", p.server_name.as_str());
    html! {
        <footer>{ tr("footer.copyright", Some(&vars)) }</footer>
    }
}
