use web_sys::{console, HtmlSelectElement};
use wonderful_gallery_shared::{filter::GALLERY_PAGE_SIZE, format::format_count, ArticleFilter};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        category_strip::CategoryStrip,
        filter_bar::FilterBar,
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_article_list, use_scroll_to_top, ListEndpoint},
    i18n::{
        current::{common as common_text, gallery as t},
        fill_one,
    },
    models::{CategoryInfo, PopularTag, Province},
};

#[derive(Properties, Clone, PartialEq)]
pub struct GalleryPageProps {
    /// `/videos` shows video articles only.
    #[prop_or_default]
    pub videos_only: bool,
}

fn initial_filter(videos_only: bool) -> ArticleFilter {
    ArticleFilter::default().with_media(videos_only.then_some(true))
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    use_scroll_to_top();

    let provinces = use_state(Vec::<Province>::new);
    let categories = use_state(Vec::<CategoryInfo>::new);
    let tags = use_state(Vec::<PopularTag>::new);

    {
        let provinces = provinces.clone();
        let categories = categories.clone();
        let tags = tags.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let (province_result, category_result, tag_result) = futures::join!(
                    crate::api::fetch_provinces(),
                    crate::api::fetch_categories(),
                    crate::api::fetch_popular_tags()
                );

                match province_result {
                    Ok(data) => provinces.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch provinces: {}", e).into());
                    },
                }
                match category_result {
                    Ok(data) => categories.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    },
                }
                match tag_result {
                    Ok(data) => tags.set(data),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch popular tags: {}", e).into());
                    },
                }
            });
            || ()
        });
    }

    let filter = use_state(|| initial_filter(props.videos_only));

    {
        // `/gallery` and `/videos` share this component instance
        let filter = filter.clone();
        use_effect_with(props.videos_only, move |videos_only| {
            let next = initial_filter(*videos_only);
            if *filter != next {
                filter.set(next);
            }
            || ()
        });
    }

    let articles = use_article_list((*filter).clone(), GALLERY_PAGE_SIZE, ListEndpoint::Paginated);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ArticleFilter| filter.set(next))
    };

    let on_select_category = {
        let filter = filter.clone();
        Callback::from(move |category_id: Option<i64>| filter.set(filter.with_category(category_id)))
    };

    let on_select_province = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let province_id = select.value().parse::<i64>().ok();
                filter.set(filter.with_province(province_id));
            }
        })
    };

    let list = &articles.list;
    let title = if props.videos_only { t::VIDEO_TITLE } else { t::PHOTO_TITLE };

    let tag_chips = html! {
        <div class="flex flex-wrap items-center gap-2 py-2">
            <span class="inline-flex items-center gap-1 text-sm text-[var(--muted)]">
                <Icon name={IconName::Tag} size={14} />
                { t::TAGS }
            </span>
            { for tags.iter().map(|tag| {
                let active = filter.search.as_deref() == Some(tag.tag.as_str());
                let onclick = {
                    let filter = filter.clone();
                    let value = tag.tag.clone();
                    Callback::from(move |_: MouseEvent| {
                        let next = if active { None } else { Some(value.as_str()) };
                        filter.set(filter.with_search(next));
                    })
                };
                html! {
                    <button
                        key={tag.tag.clone()}
                        type="button"
                        {onclick}
                        class={classes!(
                            "rounded-full", "px-3", "py-1", "text-sm",
                            if active {
                                "bg-[var(--primary)] text-white"
                            } else {
                                "bg-[var(--surface)] text-[var(--muted)] hover:text-[var(--primary)]"
                            }
                        )}
                    >
                        { format!("#{}", tag.tag) }
                    </button>
                }
            }) }
        </div>
    };

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
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "mt-6")}>
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="m-0 text-3xl font-bold text-[var(--text)]">{ title }</h1>
                    if let Some(total) = list.total() {
                        <p class="m-0 mt-1 text-sm text-[var(--muted)]">
                            { fill_one(t::TOTAL_TEMPLATE, format_count(total)) }
                        </p>
                    }
                </div>
                <select
                    aria-label={t::PROVINCE_ARIA}
                    onchange={on_select_province}
                    class={classes!(
                        "h-10", "rounded-lg", "border", "border-[var(--border)]",
                        "bg-[var(--surface)]", "px-3", "text-sm", "text-[var(--text)]"
                    )}
                >
                    <option value="" selected={filter.province_id.is_none()}>{ t::ALL_PROVINCES }</option>
                    { for provinces.iter().map(|p| html! {
                        <option
                            key={p.id}
                            value={p.id.to_string()}
                            selected={filter.province_id == Some(p.id)}
                        >
                            { &p.name }
                        </option>
                    }) }
                </select>
            </div>

            <CategoryStrip
                categories={(*categories).clone()}
                selected={filter.category_id}
                on_select={on_select_category}
                label={t::CATEGORIES}
            />
            if !tags.is_empty() {
                { tag_chips }
            }
            <FilterBar
                filter={(*filter).clone()}
                on_change={on_filter_change}
                show_media={!props.videos_only}
            />
            { grid }
            if list.has_more() && !list.items().is_empty() {
                <div class="mt-8 flex justify-center">
                    <button
                        type="button"
                        onclick={articles.load_more.clone()}
                        disabled={list.is_loading()}
                        class={classes!(
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
        </main>
    }
}
