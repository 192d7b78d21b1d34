// 重新导出 shared crate 的数据模型
pub use wonderful_gallery_shared::models::{
    ArticleDetail, ArticleImage, ArticleSummary, CategoryInfo, PopularTag, Province, SiteStats,
};
#[cfg(feature = "mock")]
use wonderful_gallery_shared::{
    AiSearchResponse, ArticlePage, ArticleQuery, InterpretedQuery, ProvinceRecommendation, SortBy,
};

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
const MOCK_PROVINCES: [(i64, &str, f64, f64); 8] = [
    (1, "ACEH", 4.6951, 96.7494),
    (2, "SUMATERA UTARA", 2.1154, 99.5451),
    (11, "DKI JAKARTA", -6.2088, 106.8456),
    (13, "JAWA TENGAH", -7.1510, 110.1403),
    (17, "BALI", -8.3405, 115.0920),
    (19, "NUSA TENGGARA TIMUR", -8.6574, 121.0794),
    (27, "SULAWESI SELATAN", -3.6688, 119.9741),
    (33, "PAPUA", -4.2699, 138.0804),
];

#[cfg(feature = "mock")]
const MOCK_CATEGORIES: [(i64, &str, &str); 5] = [
    (1, "Alam", "alam"),
    (2, "Budaya", "budaya"),
    (3, "Kuliner", "kuliner"),
    (4, "Pantai", "pantai"),
    (5, "Petualangan", "petualangan"),
];

#[cfg(feature = "mock")]
const MOCK_PLACES: [&str; 10] = [
    "Pantai",
    "Danau",
    "Gunung",
    "Pura",
    "Pasar Tradisional",
    "Air Terjun",
    "Desa Wisata",
    "Candi",
    "Taman Laut",
    "Festival Budaya",
];

#[cfg(feature = "mock")]
const MOCK_ARTICLE_COUNT: i64 = 40;

/// 省份列表，附带一个没有坐标的省份用于验证地图过滤。
#[cfg(feature = "mock")]
pub fn mock_provinces() -> Vec<Province> {
    let articles = mock_articles_full();
    let mut provinces: Vec<Province> = MOCK_PROVINCES
        .iter()
        .map(|(id, name, lat, lng)| Province {
            id: *id,
            name: name.to_string(),
            article_count: articles
                .iter()
                .filter(|a| a.province_name.as_deref() == Some(*name))
                .count() as u64,
            lat: *lat,
            lng: *lng,
        })
        .collect();
    provinces.push(Province {
        id: 38,
        name: "PAPUA BARAT DAYA".to_string(),
        article_count: 0,
        lat: 0.0,
        lng: 0.0,
    });
    provinces
}

#[cfg(feature = "mock")]
pub fn mock_categories() -> Vec<CategoryInfo> {
    let articles = mock_articles_full();
    MOCK_CATEGORIES
        .iter()
        .map(|(id, label, slug)| CategoryInfo {
            id: *id,
            label: label.to_string(),
            slug: Some(slug.to_string()),
            thumbnail: None,
            article_count: articles
                .iter()
                .filter(|a| a.category.as_deref() == Some(*label))
                .count() as u64,
        })
        .collect()
}

#[cfg(feature = "mock")]
pub fn mock_popular_tags() -> Vec<PopularTag> {
    ["pantai", "sunset", "budaya", "kuliner", "gunung", "snorkeling"]
        .iter()
        .enumerate()
        .map(|(i, tag)| PopularTag {
            tag: tag.to_string(),
            count: 120 - (i as u64) * 15,
        })
        .collect()
}

#[cfg(feature = "mock")]
pub fn mock_stats() -> SiteStats {
    let articles = mock_articles_full();
    let videos = articles.iter().filter(|a| a.is_video).count() as u64;
    SiteStats {
        total_articles: articles.len() as u64,
        total_photos: articles.len() as u64 - videos,
        total_videos: videos,
        total_provinces: mock_provinces().len() as u64,
        total_images: articles.iter().map(|a| a.images.len() as u64).sum(),
        total_views: articles.iter().map(|a| a.total_view).sum(),
        total_downloads: articles.iter().map(|a| a.total_download).sum(),
    }
}

/// 按筛选条件过滤、排序并分页，行为与后端 `/articles/paginated` 一致。
#[cfg(feature = "mock")]
pub fn mock_query(query: &ArticleQuery) -> ArticlePage {
    let filter = &query.filter;
    let category_label = filter.category_id.and_then(|id| {
        MOCK_CATEGORIES
            .iter()
            .find(|(cid, ..)| *cid == id)
            .map(|(_, label, _)| *label)
    });
    let province_name = filter.province_id.and_then(|id| {
        MOCK_PROVINCES
            .iter()
            .find(|(pid, ..)| *pid == id)
            .map(|(_, name, ..)| *name)
    });
    let search = filter.search.as_deref().map(str::to_lowercase);

    let mut matches: Vec<ArticleDetail> = mock_articles_full()
        .into_iter()
        .filter(|a| filter.is_video.map_or(true, |v| a.is_video == v))
        .filter(|a| {
            filter.province_id.is_none() || a.province_name.as_deref() == province_name
        })
        .filter(|a| filter.category_id.is_none() || a.category.as_deref() == category_label)
        .filter(|a| {
            search.as_deref().map_or(true, |needle| {
                a.title.to_lowercase().contains(needle)
                    || a.tags
                        .as_deref()
                        .is_some_and(|tags| tags.to_lowercase().contains(needle))
            })
        })
        .collect();

    match filter.sort_by {
        SortBy::Recent => matches.sort_by(|a, b| b.posting_date.cmp(&a.posting_date)),
        SortBy::Popular => matches.sort_by(|a, b| b.total_view.cmp(&a.total_view)),
        SortBy::Downloads => matches.sort_by(|a, b| b.total_download.cmp(&a.total_download)),
    }

    let total = matches.len();
    let offset = query.offset.unwrap_or(0).min(total);
    let end = (offset + query.limit).min(total);
    ArticlePage {
        articles: matches[offset..end]
            .iter()
            .cloned()
            .map(ArticleSummary::from)
            .collect(),
        total: total as u64,
        has_more: end < total,
    }
}

#[cfg(feature = "mock")]
pub fn mock_article_detail(id: &str) -> Option<ArticleDetail> {
    let id: i64 = id.parse().ok()?;
    mock_articles_full().into_iter().find(|a| a.id == id)
}

/// 简单关键词匹配，模拟 AI 搜索的解析结果。
#[cfg(feature = "mock")]
pub fn mock_ai_search(query: &str) -> AiSearchResponse {
    let lowered = query.to_lowercase();
    let province = MOCK_PROVINCES
        .iter()
        .find(|(_, name, ..)| lowered.contains(&name.to_lowercase()))
        .map(|(_, name, ..)| name.to_string());
    let keyword = MOCK_PLACES
        .iter()
        .find(|place| lowered.contains(&place.to_lowercase()))
        .map(|place| place.to_string());

    let articles = mock_articles_full()
        .into_iter()
        .filter(|a| province.is_none() || a.province_name == province)
        .filter(|a| {
            keyword
                .as_deref()
                .map_or(true, |k| a.title.to_lowercase().contains(&k.to_lowercase()))
        })
        .take(12)
        .map(ArticleSummary::from)
        .collect();

    AiSearchResponse {
        interpreted_query: Some(InterpretedQuery {
            province,
            category: None,
            keywords: keyword,
            is_video: lowered.contains("video").then_some(true),
        }),
        articles,
    }
}

#[cfg(feature = "mock")]
pub fn mock_recommendation(province_id: i64) -> Option<ProvinceRecommendation> {
    let (_, name, ..) = MOCK_PROVINCES.iter().find(|(id, ..)| *id == province_id)?;
    let mut articles: Vec<ArticleSummary> = mock_articles_full()
        .into_iter()
        .filter(|a| a.province_name.as_deref() == Some(*name))
        .map(ArticleSummary::from)
        .collect();
    articles.sort_by(|a, b| b.total_view.cmp(&a.total_view));
    articles.truncate(8);

    Some(ProvinceRecommendation {
        province_name: name.to_string(),
        recommendation: format!(
            "Jelajahi keindahan {}! Provinsi ini menyimpan banyak destinasi wisata menarik yang \
             menunggu untuk ditemukan.",
            name
        ),
        articles,
    })
}

// 内部函数：构建完整文章
#[cfg(feature = "mock")]
fn mock_articles_full() -> Vec<ArticleDetail> {
    (1..=MOCK_ARTICLE_COUNT)
        .map(|i| {
            let idx = i as usize;
            let (_, province, ..) = MOCK_PROVINCES[idx % MOCK_PROVINCES.len()];
            let (_, category, _) = MOCK_CATEGORIES[idx % MOCK_CATEGORIES.len()];
            let place = MOCK_PLACES[idx % MOCK_PLACES.len()];
            let is_video = i % 4 == 0;
            let title = format!("{} {}", place, title_case(province));
            let thumbnail = crate::config::asset_path(&format!("static/mock/{}.jpg", idx % 6 + 1));

            let images = if is_video {
                Vec::new()
            } else {
                (0..(i % 5 + 1))
                    .map(|n| ArticleImage {
                        id: i * 100 + n,
                        thumbnail: crate::config::asset_path(&format!(
                            "static/mock/{}.jpg",
                            (idx + n as usize) % 6 + 1
                        )),
                        image_url: crate::config::asset_path(&format!(
                            "static/mock/{}.jpg",
                            (idx + n as usize) % 6 + 1
                        )),
                        total_download: ((i * 7 + n * 3) % 50) as u64,
                    })
                    .collect()
            };

            ArticleDetail {
                id: i,
                title: title.clone(),
                thumbnail,
                is_video,
                video_url: is_video.then(|| "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()),
                total_view: ((i * 7919) % 5000) as u64,
                total_download: images.iter().map(|img| img.total_download).sum(),
                province_name: Some(province.to_string()),
                city_name: (i % 3 != 0).then(|| format!("Kota {}", i)),
                tags: Some(format!("{},{},{}", place.to_lowercase(), category.to_lowercase(), "wisata")),
                posting_date: Some(format!("2024-{:02}-{:02}", (i % 12) + 1, (i % 27) + 1)),
                category: Some(category.to_string()),
                content: Some(format!(
                    "<p><strong>{}</strong> adalah salah satu destinasi {} di {}.</p><p>Nikmati \
                     suasana dan keramahan warga setempat.</p>",
                    title,
                    category.to_lowercase(),
                    title_case(province)
                )),
                images,
            }
        })
        .collect()
}

#[cfg(feature = "mock")]
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                },
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
