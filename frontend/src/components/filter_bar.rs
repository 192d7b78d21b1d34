use web_sys::HtmlInputElement;
use wonderful_gallery_shared::{ArticleFilter, SortBy};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{
        current::{common as common_text, filter_bar as t},
        fill_one,
    },
};

fn sort_label(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Recent => t::SORT_RECENT,
        SortBy::Popular => t::SORT_POPULAR,
        SortBy::Downloads => t::SORT_DOWNLOADS,
    }
}

fn sort_icon(sort_by: SortBy) -> IconName {
    match sort_by {
        SortBy::Recent => IconName::Clock,
        SortBy::Popular => IconName::TrendingUp,
        SortBy::Downloads => IconName::Download,
    }
}

const MEDIA_OPTIONS: [(Option<bool>, &str); 3] = [
    (None, common_text::ALL),
    (Some(false), t::MEDIA_PHOTO),
    (Some(true), t::MEDIA_VIDEO),
];

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: ArticleFilter,
    pub on_change: Callback<ArticleFilter>,
    /// Hide the media toggle on pages that fix the media type.
    #[prop_or(true)]
    pub show_media: bool,
    /// Name of the active province filter, shown as a removable chip.
    #[prop_or_default]
    pub province_name: Option<AttrValue>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let search_text = use_state(|| props.filter.search.clone().unwrap_or_default());

    {
        let search_text = search_text.clone();
        use_effect_with(props.filter.search.clone(), move |search| {
            search_text.set(search.clone().unwrap_or_default());
            || ()
        });
    }

    let on_search_input = {
        let search_text = search_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_text.set(target.value());
            }
        })
    };

    let submit_search = {
        let search_text = search_text.clone();
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: ()| {
            let next = filter.with_search(Some(search_text.as_str()));
            if next != filter {
                on_change.emit(next);
            }
        })
    };

    let on_search_keydown = {
        let submit_search = submit_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit_search.emit(());
            }
        })
    };

    let clear_province = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(filter.with_province(None)))
    };

    let chip_class = |active: bool| {
        classes!(
            "inline-flex",
            "items-center",
            "gap-1.5",
            "rounded-full",
            "px-3",
            "py-1.5",
            "text-sm",
            "transition-colors",
            "duration-200",
            if active {
                "bg-[var(--primary)] text-white"
            } else {
                "bg-[var(--surface)] text-[var(--muted)] hover:text-[var(--primary)]"
            }
        )
    };

    html! {
        <div class={classes!("flex", "flex-wrap", "items-center", "gap-3", "py-4")}>
            <div class="flex flex-wrap gap-2" role="group" aria-label={t::SORT_ARIA}>
                { for SortBy::ALL.iter().map(|sort_by| {
                    let sort_by = *sort_by;
                    let active = props.filter.sort_by == sort_by;
                    let onclick = {
                        let filter = props.filter.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            if filter.sort_by != sort_by {
                                on_change.emit(filter.with_sort(sort_by));
                            }
                        })
                    };
                    html! {
                        <button type="button" class={chip_class(active)} {onclick}>
                            <Icon name={sort_icon(sort_by)} size={14} />
                            { sort_label(sort_by) }
                        </button>
                    }
                }) }
            </div>

            if props.show_media {
                <div class="flex flex-wrap gap-2" role="group" aria-label={t::MEDIA_ARIA}>
                    { for MEDIA_OPTIONS.iter().map(|(is_video, label)| {
                        let is_video = *is_video;
                        let active = props.filter.is_video == is_video;
                        let onclick = {
                            let filter = props.filter.clone();
                            let on_change = props.on_change.clone();
                            Callback::from(move |_: MouseEvent| {
                                if filter.is_video != is_video {
                                    on_change.emit(filter.with_media(is_video));
                                }
                            })
                        };
                        html! {
                            <button type="button" class={chip_class(active)} {onclick}>
                                { *label }
                            </button>
                        }
                    }) }
                </div>
            }

            if let Some(name) = props.province_name.clone() {
                <button
                    type="button"
                    class={chip_class(true)}
                    aria-label={t::CLEAR_PROVINCE_ARIA}
                    onclick={clear_province}
                >
                    <Icon name={IconName::MapPin} size={14} />
                    { fill_one(t::PROVINCE_FILTER_TEMPLATE, name) }
                    <Icon name={IconName::X} size={14} />
                </button>
            }

            <div class={classes!("ml-auto", "flex", "items-center", "gap-1")}>
                <input
                    type="search"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    onkeydown={on_search_keydown}
                    class={classes!(
                        "w-[200px]", "h-10", "px-3",
                        "rounded-lg", "border", "border-[var(--border)]",
                        "bg-[var(--surface)]", "text-[var(--text)]", "text-sm",
                        "focus:outline-none", "focus:border-[var(--primary)]"
                    )}
                />
                <button
                    type="button"
                    class={classes!("w-10", "h-10", "inline-flex", "items-center", "justify-center", "text-[var(--muted)]")}
                    aria-label={t::SEARCH_PLACEHOLDER}
                    onclick={submit_search.reform(|_: MouseEvent| ())}
                >
                    <Icon name={IconName::Search} size={18} />
                </button>
            </div>
        </div>
    }
}
