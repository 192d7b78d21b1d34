use wonderful_gallery_shared::SiteStats;
use yew::prelude::*;

use crate::{
    components::{
        icons::IconName,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        stats_card::StatsCard,
    },
    hooks::use_scroll_to_top,
    i18n::current::stats as t,
};

#[function_component(StatsPage)]
pub fn stats_page() -> Html {
    use_scroll_to_top();
    let stats = use_state(|| None::<SiteStats>);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_site_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into());
                        stats.set(Some(SiteStats::default()));
                    },
                }
            });
            || ()
        });
    }

    let body = match (*stats).clone() {
        None => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        Some(stats) => {
            let cards = [
                (IconName::BarChart, stats.total_articles, t::TOTAL_ARTICLES),
                (IconName::Camera, stats.total_photos, t::TOTAL_PHOTOS),
                (IconName::Video, stats.total_videos, t::TOTAL_VIDEOS),
                (IconName::MapPin, stats.total_provinces, t::TOTAL_PROVINCES),
                (IconName::Image, stats.total_images, t::TOTAL_IMAGES),
                (IconName::Eye, stats.total_views, t::TOTAL_VIEWS),
                (IconName::Download, stats.total_downloads, t::TOTAL_DOWNLOADS),
            ];
            html! {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for cards.iter().map(|(icon, value, label)| html! {
                        <StatsCard icon={*icon} value={*value} label={*label} />
                    }) }
                </div>
            }
        },
    };

    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "mt-6")}>
            <h1 class="m-0 text-3xl font-bold text-[var(--text)]">{ t::TITLE }</h1>
            <p class="m-0 mt-1 mb-8 text-[var(--muted)]">{ t::SUBTITLE }</p>
            { body }
        </main>
    }
}
