use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, KeyboardEvent};
use wonderful_gallery_shared::{AiSearchResponse, RequestSequencer};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::{
    components::{
        article_card::ArticleCard,
        icons::{Icon, IconButton, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::current::search_modal as t,
    search_context::{SearchModalAction, SearchModalContext},
};

#[derive(Clone, PartialEq)]
enum SearchState {
    Idle,
    Searching,
    Done(AiSearchResponse),
}

/// Natural-language search overlay. Mounted once by the router; visibility
/// comes from [`SearchModalContext`].
#[function_component(SearchModal)]
pub fn search_modal() -> Html {
    let ctx = use_context::<SearchModalContext>();
    let is_open = ctx.as_ref().is_some_and(|ctx| ctx.open);
    let query = use_state(String::new);
    let state = use_state(|| SearchState::Idle);
    let sequencer = use_mut_ref(RequestSequencer::default);
    let input_ref = use_node_ref();

    let close = {
        let ctx = ctx.clone();
        Callback::from(move |_: ()| {
            if let Some(ctx) = ctx.as_ref() {
                ctx.dispatch(SearchModalAction::Close);
            }
        })
    };

    {
        let close = close.clone();
        use_event_with_window("keydown", move |event: KeyboardEvent| {
            if is_open && event.key() == "Escape" {
                close.emit(());
            }
        });
    }

    {
        let input_ref = input_ref.clone();
        use_effect_with(is_open, move |is_open| {
            if *is_open {
                // wait for the dialog to be laid out before moving focus
                Timeout::new(50, move || {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                })
                .forget();
            }
            || ()
        });
    }

    let run_search = {
        let state = state.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }
            let ticket = sequencer.borrow_mut().begin();
            state.set(SearchState::Searching);

            let state = state.clone();
            let sequencer = sequencer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::api::ai_search(&text).await;
                if !sequencer.borrow().is_current(ticket) {
                    return;
                }
                let response = result.unwrap_or_else(|e| {
                    web_sys::console::error_1(&format!("Failed to run search: {}", e).into());
                    AiSearchResponse::default()
                });
                state.set(SearchState::Done(response));
            });
        })
    };

    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
            }
        })
    };

    let on_keydown = {
        let query = query.clone();
        let run_search = run_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                run_search.emit((*query).clone());
            }
        })
    };

    let on_submit = {
        let query = query.clone();
        let run_search = run_search.clone();
        Callback::from(move |_: MouseEvent| run_search.emit((*query).clone()))
    };

    if !is_open {
        return Html::default();
    }

    let on_backdrop = close.reform(|_: MouseEvent| ());
    let on_close_button = close.reform(|_: MouseEvent| ());
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let results = match &*state {
        SearchState::Idle => html! {
            <div class="flex flex-col gap-2">
                <span class="text-sm text-[var(--muted)]">{ t::EXAMPLES_TITLE }</span>
                <div class="flex flex-wrap gap-2">
                    { for t::EXAMPLES.iter().map(|example| {
                        let example = *example;
                        let onclick = {
                            let query = query.clone();
                            let run_search = run_search.clone();
                            Callback::from(move |_: MouseEvent| {
                                query.set(example.to_string());
                                run_search.emit(example.to_string());
                            })
                        };
                        html! {
                            <button
                                type="button"
                                {onclick}
                                class={classes!(
                                    "rounded-full", "border", "border-[var(--border)]",
                                    "px-3", "py-1.5", "text-sm", "hover:border-[var(--primary)]"
                                )}
                            >
                                { example }
                            </button>
                        }
                    }) }
                </div>
            </div>
        },
        SearchState::Searching => html! {
            <LoadingSpinner size={SpinnerSize::Medium} label={t::SEARCHING} />
        },
        SearchState::Done(response) => {
            let headline = response
                .interpreted_query
                .as_ref()
                .and_then(|q| q.headline())
                .map(str::to_string);
            let on_open = close.clone();
            html! {
                <div class="flex flex-col gap-4">
                    if let Some(headline) = headline {
                        <p class="m-0 text-sm">
                            <span class="text-[var(--muted)]">{ t::INTERPRETED_PREFIX }</span>
                            { " " }
                            <strong>{ headline }</strong>
                        </p>
                    }
                    if response.articles.is_empty() {
                        <p class="m-0 py-8 text-center text-[var(--muted)]">{ t::NO_RESULTS }</p>
                    } else {
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                            { for response.articles.iter().map(|article| html! {
                                <ArticleCard
                                    key={article.id}
                                    article={article.clone()}
                                    compact={true}
                                    on_open={on_open.clone()}
                                />
                            }) }
                        </div>
                    }
                </div>
            }
        },
    };

    html! {
        <div
            class={classes!(
                "fixed", "inset-0", "z-[100]",
                "flex", "items-start", "justify-center",
                "bg-black/60", "backdrop-blur-sm", "p-4", "pt-[10vh]"
            )}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop}
        >
            <div
                class={classes!(
                    "w-full", "max-w-3xl", "max-h-[80vh]", "overflow-y-auto",
                    "flex", "flex-col", "gap-5", "rounded-2xl", "p-6",
                    "bg-[var(--surface)]", "text-[var(--text)]", "shadow-[var(--shadow-16)]"
                )}
                onclick={stop_propagation}
            >
                <div class="flex items-start justify-between gap-3">
                    <div>
                        <h2 class="m-0 inline-flex items-center gap-2 text-xl font-bold">
                            <Icon name={IconName::Sparkles} size={20} />
                            { t::TITLE }
                        </h2>
                        <p class="m-0 mt-1 text-sm text-[var(--muted)]">{ t::SUBTITLE }</p>
                    </div>
                    <IconButton icon={IconName::X} label={t::CLOSE_ARIA} size={18} onclick={on_close_button} />
                </div>
                <div class="flex gap-2">
                    <input
                        ref={input_ref}
                        type="search"
                        placeholder={t::PLACEHOLDER}
                        value={(*query).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        class={classes!(
                            "flex-1", "h-12", "px-4", "rounded-xl",
                            "border", "border-[var(--border)]", "bg-[var(--bg)]",
                            "focus:outline-none", "focus:border-[var(--primary)]"
                        )}
                    />
                    <button
                        type="button"
                        onclick={on_submit}
                        disabled={matches!(*state, SearchState::Searching)}
                        class={classes!(
                            "inline-flex", "items-center", "gap-2", "h-12", "px-5",
                            "rounded-xl", "bg-[var(--primary)]", "text-white", "font-semibold",
                            "disabled:opacity-60"
                        )}
                    >
                        <Icon name={IconName::Search} size={18} />
                        { t::SUBMIT }
                    </button>
                </div>
                { results }
            </div>
        </div>
    }
}
