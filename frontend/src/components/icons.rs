use yew::prelude::*;

/// Lucide line icons used across the gallery.
/// SVG paths come from https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,
    ArrowLeft,
    Home,

    // Media
    Camera,
    Video,
    Image,
    Play,

    // Actions
    Search,
    Sparkles,
    Download,
    X,
    Menu,

    // Meta
    MapPin,
    Eye,
    Clock,
    TrendingUp,
    Folder,
    Tag,
    BarChart,
}

impl IconName {
    /// SVG path data of the icon on a 24x24 grid.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ArrowLeft => "M12 19l-7-7 7-7M5 12h14",
            IconName::Home => "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",

            IconName::Camera => {
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 \
                 0-2-2h-3zM12 16a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            },
            IconName::Video => {
                "m22 8-6 4 6 4V8zM4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 \
                 0 1 2-2z"
            },
            IconName::Image => {
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM9 11a2 \
                 2 0 1 0 0-4 2 2 0 0 0 0 4zM21 15l-5-5L5 21"
            },
            IconName::Play => "m6 3 14 9-14 9V3z",

            IconName::Search => "m21 21-6-6m2-5a7 7 0 1 1-14 0 7 7 0 0 1 14 0z",
            IconName::Sparkles => {
                "M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7zM5 3v4M3 5h4M19 \
                 17v4M17 19h4"
            },
            IconName::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",

            IconName::MapPin => {
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            },
            IconName::Eye => {
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7zM12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            },
            IconName::Clock => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
            IconName::TrendingUp => "m22 7-8.5 8.5-5-5L2 17M16 7h6v6",
            IconName::Folder => {
                "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 \
                 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2z"
            },
            IconName::Tag => "M12 2l8 8-10 10L2 12l10-10zM7 7h.01",
            IconName::BarChart => "M3 3v18h18M18 17V9M13 17V5M8 17v-3",
        }
    }

    /// Solid glyphs read better filled when drawn small over photos.
    pub fn filled(&self) -> bool {
        matches!(self, IconName::Play)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if name.filled() { color.as_str() } else { "none" };

    html! {
        <svg
            class={classes!("inline-flex", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill.to_string()}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Round icon-only button, used for overlay controls.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,
    pub label: AttrValue,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        label,
        size,
        onclick,
        class,
        disabled,
    } = props;

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[44px]",
        "min-h-[44px]",
        "rounded-full",
        "bg-black/60",
        "text-white",
        "transition-all",
        "duration-100",
        "hover:bg-black/80",
        "disabled:opacity-30",
        "disabled:cursor-not-allowed",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            disabled={*disabled}
            aria-label={label.clone()}
            type="button"
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
