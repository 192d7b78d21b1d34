use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::current::{common as common_text, not_found as t},
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex flex-col items-center gap-4 py-24 text-center">
            <p class="m-0 text-5xl font-bold text-[var(--primary)]">{ "404" }</p>
            <h1 class="m-0 text-2xl">{ t::TITLE }</h1>
            <p class="m-0 text-[var(--muted)]">{ t::DESC }</p>
            <Link<Route> to={Route::Home} classes={classes!("text-[var(--primary)]", "font-semibold")}>
                { common_text::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
