use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithLoadingProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Lazy image with a pulsing placeholder until it loads (or fails).
#[function_component(ImageWithLoading)]
pub fn image_with_loading(props: &ImageWithLoadingProps) -> Html {
    let image_loaded = use_state(|| false);

    {
        // a recycled card gets a new src; show the placeholder again
        let image_loaded = image_loaded.clone();
        use_effect_with(props.src.clone(), move |_| {
            image_loaded.set(false);
            || ()
        });
    }

    let on_settled = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if !*image_loaded { "bg-[var(--surface-alt)]" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        if *image_loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div class={container_classes} onclick={props.onclick.clone()}>
            if !*image_loaded {
                <div class={classes!(
                    "absolute",
                    "inset-0",
                    "bg-gradient-to-br",
                    "from-[var(--surface-alt)]",
                    "to-[var(--surface)]",
                    "animate-pulse",
                    "pointer-events-none"
                )} />
            }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={image_classes}
                loading="lazy"
                decoding="async"
                onload={on_settled.clone()}
                onerror={on_settled}
            />
        </div>
    }
}
