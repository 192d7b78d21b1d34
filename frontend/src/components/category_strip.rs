use wonderful_gallery_shared::format::format_count;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::common as t,
    models::CategoryInfo,
};

#[derive(Properties, PartialEq)]
pub struct CategoryStripProps {
    pub categories: Vec<CategoryInfo>,
    pub selected: Option<i64>,
    /// Emits the clicked category, or `None` for "all". Clicking the
    /// selected category again clears it.
    pub on_select: Callback<Option<i64>>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(CategoryStrip)]
pub fn category_strip(props: &CategoryStripProps) -> Html {
    if props.categories.is_empty() {
        return Html::default();
    }

    let chip = |label: String, count: Option<u64>, target: Option<i64>| {
        let active = props.selected == target;
        let onclick = {
            let on_select = props.on_select.clone();
            let selected = props.selected;
            Callback::from(move |_: MouseEvent| {
                on_select.emit(if selected == target { None } else { target });
            })
        };
        html! {
            <button
                type="button"
                {onclick}
                aria-pressed={active.to_string()}
                class={classes!(
                    "shrink-0", "inline-flex", "items-center", "gap-2",
                    "rounded-xl", "px-4", "py-2", "text-sm", "font-medium",
                    "border", "transition-all", "duration-200",
                    if active {
                        "border-[var(--primary)] bg-[var(--primary)] text-white"
                    } else {
                        "border-[var(--border)] bg-[var(--surface)] text-[var(--text)] hover:border-[var(--primary)]"
                    }
                )}
            >
                { label }
                if let Some(count) = count {
                    <span class="text-xs opacity-70">{ format_count(count) }</span>
                }
            </button>
        }
    };

    html! {
        <div class={classes!("flex", "items-center", "gap-2", "overflow-x-auto", "py-2")}>
            if let Some(label) = props.label.clone() {
                <span class={classes!("shrink-0", "inline-flex", "items-center", "gap-1", "text-sm", "text-[var(--muted)]")}>
                    <Icon name={IconName::Folder} size={14} />
                    { label }
                </span>
            }
            { chip(t::ALL.to_string(), None, None) }
            { for props.categories.iter().map(|c| chip(c.label.clone(), Some(c.article_count), Some(c.id))) }
        </div>
    }
}
