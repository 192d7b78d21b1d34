//! End-to-end view flows driven through the public API of the shared crate.

#[cfg(test)]
mod tests {
    use wonderful_gallery_shared::{
        AiSearchResponse, ApiError, ArticleDetail, ArticleFilter, ArticleList, ArticlePage,
        DetailOutcome, Lightbox, ListPage, ProvinceRecommendation, RequestSequencer, SortBy,
    };

    const PAGE_ONE: &str = r#"{
        "articles": [
            {"id": 1, "title": "Danau Toba", "thumbnail": "1.jpg", "is_video": false,
             "total_view": 900, "province_name": "SUMATERA UTARA", "tags": "danau,alam"},
            {"id": 2, "title": "Pulau Samosir", "thumbnail": "2.jpg", "is_video": false,
             "total_view": 400, "province_name": "SUMATERA UTARA", "tags": null}
        ],
        "total": 3,
        "has_more": true
    }"#;

    const PAGE_TWO: &str = r#"{
        "articles": [
            {"id": 3, "title": "Air Terjun Sipiso-piso", "thumbnail": "3.jpg",
             "is_video": true, "total_view": 120, "province_name": null}
        ],
        "total": 3,
        "has_more": false
    }"#;

    #[test]
    fn gallery_filter_then_load_more_then_filter_again() {
        let mut list = ArticleList::new(2);
        let filter = ArticleFilter::default().with_province(Some(2));

        let (ticket, query) = list.begin_reset(filter);
        assert_eq!(query.to_query_string(), "sort_by=recent&limit=2&province_id=2");
        let page: ArticlePage = serde_json::from_str(PAGE_ONE).expect("page one");
        assert!(list.apply(ticket, page.into()));

        let (ticket, query) = list.begin_load_more().expect("has more");
        assert_eq!(query.to_query_string(), "sort_by=recent&limit=2&province_id=2&offset=2");
        let page: ArticlePage = serde_json::from_str(PAGE_TWO).expect("page two");
        assert!(list.apply(ticket, page.into()));

        let titles: Vec<_> = list.items().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Danau Toba", "Pulau Samosir", "Air Terjun Sipiso-piso"]);
        assert_eq!(list.items()[2].province_label(), "Indonesia");
        assert!(!list.has_more());

        let (ticket, query) = list.begin_reset(list.filter().with_sort(SortBy::Popular));
        assert_eq!(query.offset, None);
        assert!(list.apply(ticket, ListPage::from_plain(Vec::new(), 2)));
        assert!(list.items().is_empty());
    }

    #[test]
    fn rapid_province_clicks_show_latest_click() {
        let mut sequencer = RequestSequencer::default();
        let mut shown: Option<ProvinceRecommendation> = None;

        let first_click = sequencer.begin();
        let second_click = sequencer.begin();

        // 500ms response for the first click, 100ms for the second, in
        // either arrival order the second click's payload is what stays.
        let responses = [
            (second_click, r#"{"province_name": "BALI", "recommendation": "Pulau Dewata", "articles": []}"#),
            (first_click, r#"{"province_name": "ACEH", "recommendation": "Serambi Mekkah", "articles": []}"#),
        ];
        for (ticket, body) in responses {
            let payload: ProvinceRecommendation = serde_json::from_str(body).expect("recommend");
            if sequencer.is_current(ticket) {
                shown = Some(payload);
            }
        }

        assert_eq!(shown.map(|r| r.province_name).as_deref(), Some("BALI"));
    }

    #[test]
    fn detail_images_drive_lightbox() {
        let detail: ArticleDetail = serde_json::from_str(
            r#"{
                "id": 10, "title": "Candi Borobudur", "thumbnail": "b.jpg", "is_video": false,
                "total_view": 5000, "province_name": "JAWA TENGAH", "city_name": "Magelang",
                "images": [
                    {"id": 100, "thumbnail": "s1.jpg", "image_url": "1.jpg"},
                    {"id": 101, "thumbnail": "s2.jpg", "image_url": "2.jpg"}
                ]
            }"#,
        )
        .expect("detail");

        let mut lightbox = Lightbox::new(detail.images.len());
        assert!(lightbox.open(1));
        assert!(!lightbox.next());
        assert!(lightbox.prev());
        assert_eq!(lightbox.index(), Some(0));
        assert_eq!(detail.location_label(), "JAWA TENGAH, Magelang");
    }

    #[test]
    fn detail_fetch_failures_render_not_found() {
        let missing = DetailOutcome::from(Ok(None));
        let server_down = DetailOutcome::from(Err(ApiError::Http { status: 502 }));
        let garbled = DetailOutcome::from(Err(ApiError::Parse("trailing comma".to_string())));

        assert_eq!(missing, DetailOutcome::NotFound);
        assert_eq!(server_down, DetailOutcome::NotFound);
        assert_eq!(garbled, DetailOutcome::NotFound);
    }

    #[test]
    fn switching_articles_keeps_the_newer_detail() {
        let detail = |id: i64, title: &str| -> ArticleDetail {
            serde_json::from_str(&format!(
                r#"{{"id": {id}, "title": "{title}", "thumbnail": "t.jpg", "is_video": false,
                    "total_view": 1}}"#
            ))
            .expect("detail")
        };
        let mut sequencer = RequestSequencer::default();
        let mut shown: Option<DetailOutcome> = None;

        // /detail/1 then /detail/2; the cleanup of the first view invalidates
        let first = sequencer.begin();
        sequencer.invalidate();
        let second = sequencer.begin();

        for (ticket, article) in [(second, detail(2, "Bromo")), (first, detail(1, "Toba"))] {
            if sequencer.is_current(ticket) {
                shown = Some(DetailOutcome::from(Ok(Some(article))));
            }
        }

        match shown {
            Some(DetailOutcome::Found(article)) => assert_eq!(article.id, 2),
            other => panic!("unexpected detail state: {:?}", other),
        }
    }

    #[test]
    fn empty_search_result_decodes() {
        let response: AiSearchResponse = serde_json::from_str(
            r#"{"interpreted_query": {"province": null, "category": null, "keywords": "pantai", "is_video": null}, "articles": []}"#,
        )
        .expect("search");

        assert!(response.articles.is_empty());
        let headline = response.interpreted_query.as_ref().and_then(|q| q.headline());
        assert_eq!(headline, Some("pantai"));
    }
}
