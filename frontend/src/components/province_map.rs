use wonderful_gallery_shared::map::{self, MapFocus, CANVAS_HEIGHT, CANVAS_WIDTH};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::province_map as t,
    models::Province,
};

const PIN_RADIUS: f64 = 7.0;

#[derive(Properties, PartialEq)]
pub struct ProvinceMapProps {
    pub provinces: Vec<Province>,
    pub focus: MapFocus,
    #[prop_or_default]
    pub selected: Option<i64>,
    pub on_select: Callback<Province>,
    pub on_reset: Callback<()>,
}

/// Interactive archipelago map. Provinces without coordinates get no pin.
#[function_component(ProvinceMap)]
pub fn province_map(props: &ProvinceMapProps) -> Html {
    let pins = use_memo(props.provinces.clone(), |provinces| map::pins(provinces));
    let view_box = props.focus.view_box();
    let scale = view_box.pin_scale();
    let zoomed = props.focus != MapFocus::default();

    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("relative", "w-full", "overflow-hidden", "rounded-2xl", "bg-[#0b3d5c]")}>
            <svg
                class={classes!("block", "w-full", "h-auto", "transition-all", "duration-700")}
                viewBox={view_box.to_attr()}
                preserveAspectRatio="xMidYMid meet"
                role="img"
                aria-label={t::ARIA}
                xmlns="http://www.w3.org/2000/svg"
            >
                <rect
                    x="0"
                    y="0"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                    fill="#0b3d5c"
                />
                { for pins.iter().map(|pin| {
                    let active = props.selected == Some(pin.province.id);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let province = pin.province.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(province.clone()))
                    };
                    let radius = PIN_RADIUS * scale * if active { 1.6 } else { 1.0 };
                    html! {
                        <g class="cursor-pointer" {onclick}>
                            <title>{ &pin.province.name }</title>
                            <circle
                                cx={format!("{:.2}", pin.x)}
                                cy={format!("{:.2}", pin.y)}
                                r={format!("{:.2}", radius)}
                                fill={if active { "#f59e0b" } else { "#f43f5e" }}
                                stroke="#ffffff"
                                stroke-width={format!("{:.2}", 2.0 * scale)}
                            />
                        </g>
                    }
                }) }
            </svg>
            if zoomed {
                <button
                    type="button"
                    onclick={on_reset}
                    class={classes!(
                        "absolute", "right-3", "top-3",
                        "inline-flex", "items-center", "gap-1",
                        "rounded-full", "bg-black/60", "px-3", "py-1.5",
                        "text-xs", "text-white", "hover:bg-black/80"
                    )}
                >
                    <Icon name={IconName::MapPin} size={14} />
                    { t::RESET_VIEW }
                </button>
            }
        </div>
    }
}
