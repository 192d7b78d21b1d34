use std::{collections::HashMap, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, KeyboardEvent};
use wonderful_gallery_shared::{format::format_count, Lightbox};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconButton, IconName},
    i18n::{
        current::{common as common_text, lightbox as t},
        fill_one,
    },
    models::ArticleImage,
};

/// Reducer state for the image viewer of the detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxState(pub Lightbox);

pub enum LightboxAction {
    Open(usize),
    Select(usize),
    Next,
    Prev,
    Close,
    /// The image list was replaced, e.g. after navigating to another article.
    Resize(usize),
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut lightbox = self.0;
        match action {
            LightboxAction::Open(index) => {
                lightbox.open(index);
            },
            LightboxAction::Select(index) => {
                lightbox.select(index);
            },
            LightboxAction::Next => {
                lightbox.next();
            },
            LightboxAction::Prev => {
                lightbox.prev();
            },
            LightboxAction::Close => lightbox.close(),
            LightboxAction::Resize(len) => lightbox.set_len(len),
        }

        if lightbox == self.0 {
            self
        } else {
            Rc::new(LightboxState(lightbox))
        }
    }
}

pub type LightboxHandle = UseReducerHandle<LightboxState>;

#[derive(Properties, PartialEq)]
pub struct LightboxViewerProps {
    pub images: Vec<ArticleImage>,
    pub title: AttrValue,
    pub handle: LightboxHandle,
}

#[function_component(LightboxViewer)]
pub fn lightbox_viewer(props: &LightboxViewerProps) -> Html {
    let handle = props.handle.clone();
    let is_open = handle.0.is_open();
    let downloading = use_state(|| false);
    // counters returned by the backend after a download, keyed by image id
    let download_counts = use_state(HashMap::<i64, u64>::new);

    {
        let handle = handle.clone();
        use_effect_with(is_open, move |is_open| {
            let keydown_listener_opt = if *is_open {
                let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    match event.key().as_str() {
                        "ArrowLeft" => handle.dispatch(LightboxAction::Prev),
                        "ArrowRight" => handle.dispatch(LightboxAction::Next),
                        "Escape" => handle.dispatch(LightboxAction::Close),
                        _ => {},
                    }
                }) as Box<dyn FnMut(_)>);

                if let Some(win) = window() {
                    let _ = win.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                Some(listener)
            } else {
                None
            };

            move || {
                if let Some(listener) = keydown_listener_opt {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let Some(index) = handle.0.index() else {
        return Html::default();
    };
    let Some(image) = props.images.get(index).cloned() else {
        return Html::default();
    };

    let dispatch = |action: fn() -> LightboxAction| {
        let handle = handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            handle.dispatch(action());
        })
    };
    let on_close = dispatch(|| LightboxAction::Close);
    let on_prev = dispatch(|| LightboxAction::Prev);
    let on_next = dispatch(|| LightboxAction::Next);
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_download = {
        let downloading = downloading.clone();
        let download_counts = download_counts.clone();
        let image = image.clone();
        let title = props.title.to_string();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if *downloading {
                return;
            }
            downloading.set(true);

            let downloading = downloading.clone();
            let download_counts = download_counts.clone();
            let image = image.clone();
            let title = title.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(count) = crate::utils::download_image(&image, &title).await {
                    let mut counts = (*download_counts).clone();
                    counts.insert(image.id, count);
                    download_counts.set(counts);
                }
                downloading.set(false);
            });
        })
    };

    let download_count = download_counts
        .get(&image.id)
        .copied()
        .unwrap_or(image.total_download);
    let position = handle.0.position_label().unwrap_or_default();

    html! {
        <div
            class={classes!(
                "fixed", "inset-0", "z-[100]",
                "flex", "flex-col", "items-center", "justify-center", "gap-4",
                "bg-black/90", "p-4", "text-white", "backdrop-blur-sm"
            )}
            role="dialog"
            aria-modal="true"
            onclick={on_close.clone()}
        >
            <div class="absolute right-4 top-4 flex items-center gap-2" onclick={stop_propagation.clone()}>
                <button
                    type="button"
                    onclick={on_download}
                    disabled={*downloading}
                    class={classes!(
                        "inline-flex", "items-center", "gap-2", "rounded-full",
                        "bg-[var(--primary)]", "px-4", "py-2", "text-sm", "font-semibold",
                        "disabled:opacity-60"
                    )}
                >
                    <Icon name={IconName::Download} size={16} />
                    { if *downloading { t::DOWNLOADING } else { t::DOWNLOAD } }
                    <span class="text-xs opacity-80">
                        { fill_one(common_text::DOWNLOADS_TEMPLATE, format_count(download_count)) }
                    </span>
                </button>
                <IconButton icon={IconName::X} label={t::CLOSE_ARIA} size={20} onclick={on_close} />
            </div>

            <div class="relative flex w-full flex-1 items-center justify-center min-h-0">
                <IconButton
                    icon={IconName::ChevronLeft}
                    label={t::PREV_ARIA}
                    class={classes!("absolute", "left-2")}
                    disabled={!handle.0.has_prev()}
                    onclick={on_prev}
                />
                <img
                    src={image.image_url.clone()}
                    alt={props.title.clone()}
                    class={classes!("max-h-[75vh]", "max-w-[85vw]", "object-contain")}
                    onclick={stop_propagation.clone()}
                />
                <IconButton
                    icon={IconName::ChevronRight}
                    label={t::NEXT_ARIA}
                    class={classes!("absolute", "right-2")}
                    disabled={!handle.0.has_next()}
                    onclick={on_next}
                />
            </div>

            <span class="text-sm opacity-80">{ position }</span>

            <div
                class="flex max-w-full gap-2 overflow-x-auto pb-2"
                aria-label={t::THUMBNAILS_ARIA}
                onclick={stop_propagation}
            >
                { for props.images.iter().enumerate().map(|(i, thumb)| {
                    let onclick = {
                        let handle = handle.clone();
                        Callback::from(move |_: MouseEvent| handle.dispatch(LightboxAction::Select(i)))
                    };
                    html! {
                        <button
                            key={thumb.id}
                            type="button"
                            {onclick}
                            class={classes!(
                                "shrink-0", "h-16", "w-24", "overflow-hidden", "rounded-lg",
                                "border-2",
                                if i == index { "border-[var(--primary)]" } else { "border-transparent opacity-60" }
                            )}
                        >
                            <img src={thumb.thumbnail.clone()} alt="" class="h-full w-full object-cover" loading="lazy" />
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
