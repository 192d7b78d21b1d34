use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header, search_modal::SearchModal},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/gallery")]
    Gallery,
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/gallery")]
    Gallery,

    #[cfg(not(feature = "mock"))]
    #[at("/videos")]
    Videos,
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/videos")]
    Videos,

    #[cfg(not(feature = "mock"))]
    #[at("/detail/:id")]
    Detail { id: String },
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/detail/:id")]
    Detail { id: String },

    #[cfg(not(feature = "mock"))]
    #[at("/stats")]
    Stats,
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/stats")]
    Stats,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/wonderful-gallery/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Gallery => html! { <pages::gallery::GalleryPage /> },
        Route::Videos => html! { <pages::gallery::GalleryPage videos_only={true} /> },
        Route::Detail {
            id,
        } => {
            html! { <pages::detail::DetailPage id={id} /> }
        },
        Route::Stats => html! { <pages::stats::StatsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
                <SearchModal />
            </div>
        </BrowserRouter>
    }
}
