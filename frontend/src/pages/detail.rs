use web_sys::window;
use wonderful_gallery_shared::{format::format_count, DetailOutcome, RequestSequencer};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_loading::ImageWithLoading,
        lightbox::{LightboxAction, LightboxState, LightboxViewer},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
    },
    hooks::use_scroll_to_top,
    i18n::{
        current::{common as common_text, detail as t},
        fill_one,
    },
    models::ArticleDetail,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct DetailProps {
    pub id: String,
}

#[function_component(DetailPage)]
pub fn detail_page(props: &DetailProps) -> Html {
    use_scroll_to_top();
    let navigator = use_navigator();
    // `None` while the fetch for the current id is in flight
    let detail = use_state(|| None::<DetailOutcome>);
    let sequencer = use_mut_ref(RequestSequencer::default);
    let lightbox = use_reducer(LightboxState::default);

    {
        let detail = detail.clone();
        let sequencer = sequencer.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let ticket = sequencer.borrow_mut().begin();
            detail.set(None);

            {
                let sequencer = sequencer.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = crate::api::fetch_article_detail(&id).await;
                    if !sequencer.borrow().is_current(ticket) {
                        return;
                    }
                    if let Err(e) = &result {
                        web_sys::console::error_1(
                            &format!("Failed to fetch article {}: {}", id, e).into(),
                        );
                    }
                    detail.set(Some(DetailOutcome::from(result)));
                });
            }

            move || sequencer.borrow_mut().invalidate()
        });
    }

    let image_count = match &*detail {
        Some(DetailOutcome::Found(article)) => article.images.len(),
        _ => 0,
    };

    {
        let lightbox = lightbox.clone();
        use_effect_with(image_count, move |len| {
            lightbox.dispatch(LightboxAction::Resize(*len));
            || ()
        });
    }

    let handle_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(win) = window() {
                if let Ok(history) = win.history() {
                    if history.length().is_ok_and(|length| length > 1) {
                        let _ = history.back();
                        return;
                    }
                }
            }

            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    let body = match &*detail {
        None => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        Some(DetailOutcome::NotFound) => html! {
            <section class="flex flex-col items-center gap-4 py-24 text-center">
                <p class="m-0 text-5xl font-bold text-[var(--primary)]">{ "404" }</p>
                <h1 class="m-0 text-2xl">{ t::NOT_FOUND_TITLE }</h1>
                <p class="m-0 text-[var(--muted)]">{ t::NOT_FOUND_DESC }</p>
                <Link<Route> to={Route::Home} classes={classes!("text-[var(--primary)]", "font-semibold")}>
                    { common_text::BACK_HOME }
                </Link<Route>>
            </section>
        },
        Some(DetailOutcome::Found(article)) => render_article(article, &lightbox),
    };

    html! {
        <main class={classes!("max-w-5xl", "mx-auto", "px-4", "sm:px-6", "mt-6")}>
            <button
                type="button"
                onclick={handle_back}
                class="mb-4 inline-flex items-center gap-2 text-sm text-[var(--muted)] hover:text-[var(--primary)]"
            >
                <Icon name={IconName::ArrowLeft} size={16} />
                { t::BACK }
            </button>
            { body }
            if let Some(DetailOutcome::Found(article)) = &*detail {
                <LightboxViewer
                    images={article.images.clone()}
                    title={article.title.clone()}
                    handle={lightbox.clone()}
                />
            }
        </main>
    }
}

fn render_article(article: &ArticleDetail, lightbox: &UseReducerHandle<LightboxState>) -> Html {
    let hero = match article.embed_url() {
        Some(url) => html! {
            <div class="relative w-full overflow-hidden rounded-2xl pt-[56.25%] bg-black">
                <iframe
                    class="absolute inset-0 h-full w-full"
                    src={url.to_string()}
                    title={article.title.clone()}
                    allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen={true}
                />
            </div>
        },
        None => html! {
            <ImageWithLoading
                src={article.thumbnail.clone()}
                alt={article.title.clone()}
                container_class={classes!("w-full", "h-[420px]", "max-sm:h-[240px]", "rounded-2xl")}
                class={classes!("w-full", "h-full", "object-cover")}
            />
        },
    };

    let tags = article.tag_list();

    html! {
        <article class="flex flex-col gap-6">
            { hero }
            <header class="flex flex-col gap-3">
                if let Some(category) = article.category.as_deref() {
                    <span class="self-start rounded-full bg-[var(--primary)] px-3 py-1 text-xs font-semibold text-white">
                        { category }
                    </span>
                }
                <h1 class="m-0 text-3xl font-bold text-[var(--text)]">{ &article.title }</h1>
                <div class="flex flex-wrap items-center gap-4 text-sm text-[var(--muted)]">
                    <span class="inline-flex items-center gap-1">
                        <Icon name={IconName::MapPin} size={14} />
                        { article.location_label() }
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <Icon name={IconName::Eye} size={14} />
                        { fill_one(common_text::VIEWS_TEMPLATE, format_count(article.total_view)) }
                    </span>
                    <span class="inline-flex items-center gap-1">
                        <Icon name={IconName::Download} size={14} />
                        { fill_one(common_text::DOWNLOADS_TEMPLATE, format_count(article.total_download)) }
                    </span>
                    if let Some(date) = article.posting_date.as_deref() {
                        <span class="inline-flex items-center gap-1">
                            <Icon name={IconName::Clock} size={14} />
                            { date }
                        </span>
                    }
                </div>
            </header>

            if let Some(content) = article.content.clone() {
                <RawHtml html={content} class={classes!("article-content", "leading-relaxed", "text-[var(--text)]")} />
            }

            if !article.images.is_empty() {
                <section class="flex flex-col gap-3">
                    <h2 class="m-0 inline-flex items-center gap-2 text-xl font-bold">
                        <Icon name={IconName::Image} size={20} />
                        { t::GALLERY_TITLE }
                        <span class="text-sm font-normal text-[var(--muted)]">
                            { fill_one(t::PHOTO_COUNT_TEMPLATE, article.images.len()) }
                        </span>
                    </h2>
                    <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3">
                        { for article.images.iter().enumerate().map(|(index, image)| {
                            let onclick = {
                                let lightbox = lightbox.clone();
                                Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(index)))
                            };
                            html! {
                                <button
                                    key={image.id}
                                    type="button"
                                    {onclick}
                                    aria-label={fill_one(t::OPEN_IMAGE_ARIA_TEMPLATE, index + 1)}
                                    class="group overflow-hidden rounded-xl"
                                >
                                    <ImageWithLoading
                                        src={image.thumbnail.clone()}
                                        alt={article.title.clone()}
                                        container_class={classes!("w-full", "h-40")}
                                        class={classes!(
                                            "w-full", "h-full", "object-cover",
                                            "transition-transform", "duration-300", "group-hover:scale-105"
                                        )}
                                    />
                                </button>
                            }
                        }) }
                    </div>
                </section>
            }

            if !tags.is_empty() {
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-[var(--muted)]">{ t::TAGS }</span>
                    { for tags.iter().map(|tag| html! {
                        <span key={tag.clone()} class="rounded-full bg-[var(--surface-alt)] px-3 py-1 text-sm">
                            { format!("#{}", tag) }
                        </span>
                    }) }
                </div>
            }
        </article>
    }
}
