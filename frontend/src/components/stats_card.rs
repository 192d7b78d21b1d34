use wonderful_gallery_shared::format::format_count;
use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: IconName,
    pub value: u64,
    pub label: AttrValue,
    /// Translucent variant laid over the hero map.
    #[prop_or_default]
    pub overlay: bool,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let class = if props.overlay {
        classes!(
            "flex", "items-center", "gap-3", "rounded-xl", "px-4", "py-3",
            "bg-black/40", "text-white", "backdrop-blur-sm"
        )
    } else {
        classes!(
            "flex", "items-center", "gap-4", "rounded-2xl", "p-6",
            "bg-[var(--surface)]", "text-[var(--text)]", "shadow-[var(--shadow-sm)]"
        )
    };

    html! {
        <div {class} role="status">
            <span class="text-[var(--primary)]" aria-hidden="true">
                <Icon name={props.icon} size={if props.overlay { 20 } else { 28 }} />
            </span>
            <div class="flex flex-col">
                <strong class={if props.overlay { "text-lg" } else { "text-2xl" }}>
                    { format_count(props.value) }
                </strong>
                <span class="text-xs opacity-80">{ props.label.clone() }</span>
            </div>
        </div>
    }
}
