// Reusable components live here.

pub mod article_card;
pub mod category_strip;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod icons;
pub mod image_with_loading;
pub mod lightbox;
pub mod loading_spinner;
pub mod province_map;
pub mod province_panel;
pub mod raw_html;
pub mod search_modal;
pub mod stats_card;
