//! Wonderful Indonesia gallery: a browser client for exploring Indonesian
//! destinations by province, category and natural-language search.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod pages;
mod router;
mod search_context;
mod utils;

use yew::prelude::*;

use crate::search_context::SearchModalProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <SearchModalProvider>
            <router::AppRouter />
        </SearchModalProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
