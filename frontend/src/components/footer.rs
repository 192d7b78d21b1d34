use yew::prelude::*;

use crate::i18n::current::{common as common_text, footer as t};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!(
            "mt-16",
            "border-t",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "text-[var(--muted)]"
        )}>
            <div class={classes!(
                "max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "py-8",
                "flex", "flex-col", "gap-2", "text-sm"
            )}>
                <strong class="text-[var(--text)]">{ common_text::BRAND_NAME }</strong>
                <p class="m-0">{ t::TAGLINE }</p>
                <p class="m-0 text-xs">{ t::COPYRIGHT }</p>
            </div>
        </footer>
    }
}
