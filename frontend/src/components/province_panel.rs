use wonderful_gallery_shared::{ProvinceRecommendation, RequestSequencer};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        icons::{Icon, IconButton, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::{
        current::{common as common_text, province_panel as t},
        fill_one,
    },
    models::Province,
};

#[derive(Clone, PartialEq)]
enum Recommendation {
    Loading,
    Ready(ProvinceRecommendation),
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ProvincePanelProps {
    pub province: Province,
    pub on_close: Callback<()>,
    /// Narrow the landing grid to this province.
    pub on_show_articles: Callback<i64>,
}

/// Side panel (bottom sheet on phones) with the recommendation for the
/// selected province.
///
/// Clicking pins in quick succession fires overlapping requests; only the
/// response for the latest click is shown.
#[function_component(ProvincePanel)]
pub fn province_panel(props: &ProvincePanelProps) -> Html {
    let sequencer = use_mut_ref(RequestSequencer::default);
    let recommendation = use_state(|| Recommendation::Loading);

    {
        let sequencer = sequencer.clone();
        let recommendation = recommendation.clone();
        use_effect_with(props.province.id, move |province_id| {
            let province_id = *province_id;
            let ticket = sequencer.borrow_mut().begin();
            recommendation.set(Recommendation::Loading);

            {
                let sequencer = sequencer.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = crate::api::fetch_province_recommendation(province_id).await;
                    if !sequencer.borrow().is_current(ticket) {
                        return;
                    }
                    match result {
                        Ok(data) => recommendation.set(Recommendation::Ready(data)),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch recommendation: {}", e).into(),
                            );
                            recommendation.set(Recommendation::Failed);
                        },
                    }
                });
            }

            move || sequencer.borrow_mut().invalidate()
        });
    }

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let show_articles = {
        let on_show_articles = props.on_show_articles.clone();
        let province_id = props.province.id;
        Callback::from(move |_: MouseEvent| on_show_articles.emit(province_id))
    };

    let body = match &*recommendation {
        Recommendation::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Small} label={t::LOADING} />
        },
        Recommendation::Failed => html! {
            <p class="m-0 text-sm text-[var(--muted)]">{ t::FAILED }</p>
        },
        Recommendation::Ready(data) => html! {
            <>
                <p class="m-0 text-sm leading-relaxed">{ &data.recommendation }</p>
                if !data.previews().is_empty() {
                    <div class="grid grid-cols-2 gap-3">
                        { for data.previews().iter().map(|article| html! {
                            <ArticleCard key={article.id} article={article.clone()} compact={true} />
                        }) }
                    </div>
                }
            </>
        },
    };

    html! {
        <aside class={classes!(
            "fixed", "inset-x-0", "bottom-0", "z-[90]", "max-h-[70vh]",
            "md:absolute", "md:inset-x-auto", "md:right-4", "md:top-4", "md:bottom-auto",
            "md:w-[360px]", "md:max-h-[calc(100%-2rem)]",
            "flex", "flex-col", "gap-4", "overflow-y-auto",
            "rounded-t-2xl", "md:rounded-2xl", "p-5",
            "bg-[var(--surface)]", "text-[var(--text)]", "shadow-[var(--shadow-16)]"
        )}>
            <div class="flex items-start justify-between gap-3">
                <div class="flex flex-col gap-1">
                    <h2 class="m-0 inline-flex items-center gap-2 text-lg font-bold">
                        <Icon name={IconName::MapPin} size={18} />
                        { &props.province.name }
                    </h2>
                    <span class="text-xs text-[var(--muted)]">
                        { fill_one(common_text::ARTICLE_COUNT_TEMPLATE, props.province.article_count) }
                    </span>
                </div>
                <IconButton icon={IconName::X} label={t::CLOSE_ARIA} size={18} onclick={on_close} />
            </div>
            { body }
            <button
                type="button"
                onclick={show_articles}
                class={classes!(
                    "rounded-xl", "px-4", "py-2", "text-sm", "font-semibold",
                    "bg-[var(--primary)]", "text-white", "hover:opacity-90"
                )}
            >
                { t::SHOW_ARTICLES }
            </button>
        </aside>
    }
}
