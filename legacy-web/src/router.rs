use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/normativas")]
    Normativas,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Whether the route is served by the landing page sections.
    #[must_use]
    pub const fn is_landing(&self) -> bool {
        matches!(self, Self::Home)
    }
}
