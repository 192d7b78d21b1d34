use wonderful_gallery_shared::format::format_count;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_loading::ImageWithLoading,
    },
    i18n::{current::common as t, fill_one},
    models::ArticleSummary,
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleSummary,
    /// Smaller layout used inside the province panel and search results.
    #[prop_or_default]
    pub compact: bool,
    /// Fired before navigation, e.g. to close the modal hosting the card.
    #[prop_or_default]
    pub on_open: Option<Callback<()>>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::Detail {
        id: article.id.to_string(),
    };

    let on_click = props.on_open.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let card_class = classes!(
        "group",
        "block",
        "overflow-hidden",
        "rounded-2xl",
        "bg-[var(--surface)]",
        "shadow-[var(--shadow-sm)]",
        "transition-all",
        "duration-300",
        "hover:-translate-y-1",
        "hover:shadow-[var(--shadow-8)]"
    );

    let image_height = if props.compact { "h-28" } else { "h-52" };

    html! {
        <article class={card_class} onclick={on_click}>
            <Link<Route> to={detail_route} classes={classes!("block")}>
                <div class="relative">
                    <ImageWithLoading
                        src={article.thumbnail.clone()}
                        alt={article.title.clone()}
                        container_class={classes!("w-full", image_height)}
                        class={classes!(
                            "w-full", "h-full", "object-cover",
                            "transition-transform", "duration-500", "group-hover:scale-105"
                        )}
                    />
                    if article.is_video {
                        <span class={classes!(
                            "absolute", "left-3", "top-3",
                            "inline-flex", "items-center", "gap-1",
                            "rounded-full", "bg-black/70", "px-2", "py-1",
                            "text-xs", "font-semibold", "text-white"
                        )}>
                            <Icon name={IconName::Play} size={12} />
                            { t::VIDEO_BADGE }
                        </span>
                    }
                    if let Some(category) = article.category.as_deref() {
                        <span class={classes!(
                            "absolute", "right-3", "top-3",
                            "rounded-full", "bg-[var(--primary)]", "px-2", "py-1",
                            "text-xs", "font-semibold", "text-white"
                        )}>
                            { category }
                        </span>
                    }
                </div>
                <div class={classes!("flex", "flex-col", "gap-2", if props.compact { "p-3" } else { "p-4" })}>
                    <h3 class={classes!(
                        "m-0", "font-semibold", "text-[var(--text)]", "line-clamp-2",
                        if props.compact { "text-sm" } else { "text-base" }
                    )}>
                        { &article.title }
                    </h3>
                    <p class={classes!("m-0", "inline-flex", "items-center", "gap-1", "text-xs", "text-[var(--muted)]")}>
                        <Icon name={IconName::MapPin} size={12} />
                        { article.province_label() }
                    </p>
                    if !props.compact {
                        <div class={classes!("flex", "items-center", "gap-4", "text-xs", "text-[var(--muted)]")}>
                            <span class="inline-flex items-center gap-1">
                                <Icon name={IconName::Eye} size={12} />
                                { fill_one(t::VIEWS_TEMPLATE, format_count(article.total_view)) }
                            </span>
                            <span class="inline-flex items-center gap-1">
                                <Icon name={IconName::Download} size={12} />
                                { fill_one(t::DOWNLOADS_TEMPLATE, format_count(article.total_download)) }
                            </span>
                        </div>
                    }
                </div>
            </Link<Route>>
        </article>
    }
}
