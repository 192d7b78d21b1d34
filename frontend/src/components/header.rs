use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::{common as common_text, header as t},
    router::Route,
    search_context::use_open_search,
};

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let open_search = use_open_search();

    {
        // a navigation always closes the mobile menu
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(false))
    };

    let nav_items = [
        (t::NAV_HOME, Route::Home, IconName::Home),
        (t::NAV_GALLERY, Route::Gallery, IconName::Camera),
        (t::NAV_VIDEOS, Route::Videos, IconName::Video),
        (t::NAV_STATS, Route::Stats, IconName::BarChart),
    ];

    let nav_link_class = |active: bool| {
        classes!(
            "inline-flex",
            "items-center",
            "gap-2",
            "rounded-lg",
            "px-3",
            "h-10",
            "text-sm",
            "font-medium",
            "transition-all",
            "duration-200",
            "hover:text-[var(--primary)]",
            "hover:bg-[var(--surface-alt)]",
            if active { "text-[var(--primary)]" } else { "text-[var(--muted)]" }
        )
    };

    let mobile_menu_classes = classes!(
        "md:hidden",
        "fixed",
        "inset-0",
        "z-[120]",
        "transition-opacity",
        "duration-300",
        "ease-[var(--ease-spring)]",
        if *mobile_menu_open {
            "opacity-100 pointer-events-auto"
        } else {
            "opacity-0 pointer-events-none"
        }
    );

    let mobile_panel_classes = classes!(
        "absolute",
        "inset-x-0",
        "top-0",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "p-[4.5rem_1.5rem_2rem]",
        "flex",
        "flex-col",
        "gap-2",
        "shadow-[var(--shadow-16)]",
        "transition-all",
        "duration-[350ms]",
        "ease-[var(--ease-spring)]",
        if *mobile_menu_open { "translate-y-0 opacity-100" } else { "-translate-y-4 opacity-0" }
    );

    html! {
        <>
            <header class={classes!(
                "sticky", "top-0", "left-0", "right-0", "z-[80]", "w-full",
                "bg-[var(--surface)]",
                "shadow-[0_1px_0_rgba(var(--primary-rgb),0.08)]"
            )}>
                <div class={classes!(
                    "flex", "items-center", "gap-4",
                    "min-h-[var(--header-height-mobile)]", "md:min-h-[var(--header-height-desktop)]",
                    "max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8"
                )}>
                    <Link<Route> to={Route::Home} classes="brand-logo">
                        {common_text::BRAND_NAME}
                    </Link<Route>>

                    <nav
                        class={classes!("hidden", "md:flex", "ml-auto", "items-center", "gap-1")}
                        aria-label={t::NAV_MAIN_ARIA}
                    >
                        { for nav_items.iter().map(|(label, target, icon)| {
                            let active = route.as_ref() == Some(target);
                            html! {
                                <Link<Route> to={target.clone()} classes={nav_link_class(active)}>
                                    <Icon name={*icon} size={18} />
                                    <span>{ *label }</span>
                                </Link<Route>>
                            }
                        }) }
                    </nav>

                    <button
                        type="button"
                        onclick={open_search.clone()}
                        class={classes!(
                            "ml-auto", "md:ml-2",
                            "inline-flex", "items-center", "gap-2",
                            "rounded-full", "px-4", "h-10",
                            "bg-[var(--primary)]", "text-white", "text-sm", "font-semibold",
                            "transition-transform", "duration-200", "hover:scale-105"
                        )}
                    >
                        <Icon name={IconName::Sparkles} size={16} />
                        <span class="hidden sm:inline">{ t::SMART_SEARCH }</span>
                    </button>

                    <button
                        type="button"
                        class={classes!(
                            "md:hidden", "w-10", "h-10", "rounded-lg",
                            "inline-flex", "items-center", "justify-center",
                            "border", "border-[var(--border)]", "text-[var(--text)]"
                        )}
                        aria-label={if *mobile_menu_open { t::CLOSE_MENU_ARIA } else { t::OPEN_MENU_ARIA }}
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <Icon name={if *mobile_menu_open { IconName::X } else { IconName::Menu }} size={20} />
                    </button>
                </div>
            </header>

            <div class={mobile_menu_classes}>
                <div
                    class={classes!("absolute", "inset-0", "bg-black/40")}
                    onclick={close_mobile_menu.clone()}
                />
                <nav class={mobile_panel_classes} aria-label={t::MOBILE_NAV_ARIA}>
                    { for nav_items.iter().map(|(label, target, icon)| {
                        let active = route.as_ref() == Some(target);
                        html! {
                            <Link<Route> to={target.clone()} classes={nav_link_class(active)}>
                                <Icon name={*icon} size={20} />
                                <span>{ *label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </div>
        </>
    }
}
