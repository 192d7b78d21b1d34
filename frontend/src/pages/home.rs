use web_sys::console;
use wonderful_gallery_shared::{filter::DEFAULT_LIST_LIMIT, map::MapFocus, ArticleFilter};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        category_strip::CategoryStrip,
        filter_bar::FilterBar,
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        province_map::ProvinceMap,
        province_panel::ProvincePanel,
        stats_card::StatsCard,
    },
    hooks::{use_article_list, use_scroll_to_top, ListEndpoint},
    i18n::current::{common as common_text, home as t},
    models::{CategoryInfo, Province, SiteStats},
    search_context::use_open_search,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let open_search = use_open_search();

    let provinces = use_state(Vec::<Province>::new);
    let stats = use_state(SiteStats::default);
    let categories = use_state(Vec::<CategoryInfo>::new);

    {
        let provinces = provinces.clone();
        let stats = stats.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let (province_result, stats_result, category_result) = futures::join!(
                    crate::api::fetch_provinces(),
                    crate::api::fetch_site_stats(),
                    crate::api::fetch_categories()
                );

                match province_result {
                    Ok(data) => provinces.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch provinces: {}", e).into());
                    },
                }
                match stats_result {
                    Ok(data) => stats.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch stats: {}", e).into());
                    },
                }
                match category_result {
                    Ok(data) => categories.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    },
                }
            });
            || ()
        });
    }

    let focus = use_state(MapFocus::default);
    let selected_province = use_state(|| None::<Province>);
    let filter = use_state(ArticleFilter::default);
    let articles = use_article_list((*filter).clone(), DEFAULT_LIST_LIMIT, ListEndpoint::Plain);

    let on_select_province = {
        let focus = focus.clone();
        let selected_province = selected_province.clone();
        Callback::from(move |province: Province| {
            if let Some(next) = MapFocus::on_province(&province) {
                focus.set(next);
            }
            selected_province.set(Some(province));
        })
    };

    let on_reset_map = {
        let focus = focus.clone();
        let selected_province = selected_province.clone();
        Callback::from(move |_: ()| {
            focus.set(MapFocus::default());
            selected_province.set(None);
        })
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ArticleFilter| filter.set(next))
    };

    let on_show_province_articles = {
        let filter = filter.clone();
        Callback::from(move |province_id: i64| filter.set(filter.with_province(Some(province_id))))
    };

    let on_select_category = {
        let filter = filter.clone();
        Callback::from(move |category_id: Option<i64>| filter.set(filter.with_category(category_id)))
    };

    let province_name = filter.province_id.and_then(|id| {
        provinces
            .iter()
            .find(|p| p.id == id)
            .map(|p| AttrValue::from(p.name.clone()))
    });

    let list = &articles.list;
    let grid = if list.is_resetting() && list.items().is_empty() {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if list.items().is_empty() {
        html! { <p class="py-16 text-center text-[var(--muted)]">{ t::EMPTY }</p> }
    } else {
        html! {
            <div class={classes!(
                "grid", "grid-cols-1", "sm:grid-cols-2", "lg:grid-cols-3", "xl:grid-cols-4", "gap-6",
                if list.is_resetting() { "opacity-60" } else { "" }
            )}>
                { for list.items().iter().map(|article| html! {
                    <ArticleCard key={article.id} article={article.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
            <section class={classes!("relative", "mt-4")}>
                <div class={classes!("mb-4", "flex", "flex-col", "gap-1")}>
                    <h1 class="m-0 text-3xl font-bold text-[var(--text)]">{ t::HERO_TITLE }</h1>
                    <p class="m-0 text-[var(--muted)]">{ t::HERO_SUBTITLE }</p>
                </div>
                <div class="relative">
                    <ProvinceMap
                        provinces={(*provinces).clone()}
                        focus={*focus}
                        selected={selected_province.as_ref().map(|p| p.id)}
                        on_select={on_select_province}
                        on_reset={on_reset_map.clone()}
                    />
                    <div class={classes!(
                        "absolute", "left-3", "bottom-3",
                        "hidden", "sm:flex", "gap-2"
                    )}>
                        <StatsCard icon={IconName::Camera} value={stats.total_photos} label={t::STATS_PHOTOS} overlay={true} />
                        <StatsCard icon={IconName::Video} value={stats.total_videos} label={t::STATS_VIDEOS} overlay={true} />
                        <StatsCard icon={IconName::MapPin} value={stats.total_provinces} label={t::STATS_PROVINCES} overlay={true} />
                    </div>
                    if let Some(province) = (*selected_province).clone() {
                        <ProvincePanel
                            province={province}
                            on_close={on_reset_map}
                            on_show_articles={on_show_province_articles}
                        />
                    }
                </div>
            </section>

            <section class="mt-10">
                <h2 class="m-0 text-2xl font-bold text-[var(--text)]">{ t::SECTION_TITLE }</h2>
                <CategoryStrip
                    categories={(*categories).clone()}
                    selected={filter.category_id}
                    on_select={on_select_category}
                />
                <FilterBar
                    filter={(*filter).clone()}
                    on_change={on_filter_change}
                    province_name={province_name}
                />
                { grid }
                if list.has_more() && !list.items().is_empty() {
                    <div class="mt-8 flex justify-center">
                        <button
                            type="button"
                            onclick={articles.load_more.clone()}
                            disabled={list.is_loading()}
                            class={classes!(
                                "inline-flex", "items-center", "gap-2",
                                "rounded-xl", "px-6", "py-3", "font-semibold",
                                "border", "border-[var(--primary)]", "text-[var(--primary)]",
                                "hover:bg-[var(--primary)]", "hover:text-white",
                                "disabled:opacity-60"
                            )}
                        >
                            { if list.is_loading() { common_text::LOADING } else { common_text::LOAD_MORE } }
                        </button>
                    </div>
                }
            </section>

            <button
                type="button"
                onclick={open_search}
                aria-label={t::FLOATING_SEARCH_ARIA}
                class={classes!(
                    "md:hidden", "fixed", "right-5", "bottom-5", "z-[85]",
                    "w-14", "h-14", "rounded-full",
                    "inline-flex", "items-center", "justify-center",
                    "bg-[var(--primary)]", "text-white", "shadow-[var(--shadow-16)]"
                )}
            >
                <Icon name={IconName::Sparkles} size={24} />
            </button>
        </main>
    }
}
