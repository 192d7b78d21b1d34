//! Displayed article list with reset/append semantics.
//!
//! A filter change starts a new generation and its response replaces the
//! list. "Load more" requests the next window of the current generation and
//! its response is appended. Responses carrying an older generation are
//! dropped, so a slow page for a previous filter never leaks into the grid.

use crate::{
    filter::{ArticleFilter, ArticleQuery},
    models::{ArticlePage, ArticleSummary},
};

/// Whether a response replaces or extends the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// First page after a filter change.
    Reset,
    /// Next page of the current filter.
    LoadMore,
}

/// Receipt for an issued list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket {
    generation: u64,
    mode: ListMode,
}

/// One page of results, whatever endpoint produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    /// Articles of the page.
    pub items: Vec<ArticleSummary>,
    /// Whether another page may follow.
    pub has_more: bool,
    /// Total matches, when the endpoint reports it.
    pub total: Option<u64>,
}

impl ListPage {
    /// Page from the plain `/api/articles` endpoint, which reports neither a
    /// total nor a continuation flag. A full page is taken as a hint that
    /// more rows exist.
    pub fn from_plain(items: Vec<ArticleSummary>, limit: usize) -> Self {
        let has_more = limit > 0 && items.len() >= limit;
        Self {
            items,
            has_more,
            total: None,
        }
    }
}

impl From<ArticlePage> for ListPage {
    fn from(page: ArticlePage) -> Self {
        Self {
            items: page.articles,
            has_more: page.has_more,
            total: Some(page.total),
        }
    }
}

/// State behind a gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleList {
    items: Vec<ArticleSummary>,
    filter: ArticleFilter,
    limit: usize,
    has_more: bool,
    total: Option<u64>,
    loading: bool,
    pending_mode: Option<ListMode>,
    generation: u64,
}

impl ArticleList {
    /// Empty list paging `limit` rows at a time.
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: ArticleFilter::default(),
            limit: limit.max(1),
            has_more: false,
            total: None,
            loading: false,
            pending_mode: None,
            generation: 0,
        }
    }

    /// Articles currently shown.
    pub fn items(&self) -> &[ArticleSummary] {
        &self.items
    }

    /// Filter of the current generation.
    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    /// Whether a load-more button makes sense.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Total matches reported by the last paginated response.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Whether a request of the current generation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the in-flight request (if any) will replace the list.
    pub fn is_resetting(&self) -> bool {
        self.loading && self.pending_mode == Some(ListMode::Reset)
    }

    /// Start over with `filter`. The current items stay visible until the
    /// response arrives.
    pub fn begin_reset(&mut self, filter: ArticleFilter) -> (ListTicket, ArticleQuery) {
        self.generation += 1;
        self.loading = true;
        self.pending_mode = Some(ListMode::Reset);
        self.filter = filter;

        let query = self.filter.first_page(self.limit);
        (self.ticket(ListMode::Reset), query)
    }

    /// Request the window after the current items, or `None` when a request
    /// is already running or the backend reported no further rows.
    pub fn begin_load_more(&mut self) -> Option<(ListTicket, ArticleQuery)> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        self.pending_mode = Some(ListMode::LoadMore);

        let query = ArticleQuery {
            filter: self.filter.clone(),
            limit: self.limit,
            offset: Some(self.items.len()),
        };
        Some((self.ticket(ListMode::LoadMore), query))
    }

    /// Land a response. Returns `false` when the ticket is stale and the
    /// page was discarded.
    pub fn apply(&mut self, ticket: ListTicket, page: ListPage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match ticket.mode {
            ListMode::Reset => self.items = page.items,
            ListMode::LoadMore => self.items.extend(page.items),
        }
        self.has_more = page.has_more;
        if page.total.is_some() {
            self.total = page.total;
        }
        self.finish();
        true
    }

    /// Record a failed request. A failed reset empties the grid; a failed
    /// load-more keeps what is already shown. Returns `false` for stale
    /// tickets.
    pub fn fail(&mut self, ticket: ListTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        if ticket.mode == ListMode::Reset {
            self.items.clear();
            self.has_more = false;
            self.total = None;
        }
        self.finish();
        true
    }

    fn ticket(&self, mode: ListMode) -> ListTicket {
        ListTicket {
            generation: self.generation,
            mode,
        }
    }

    fn is_current(&self, ticket: ListTicket) -> bool {
        let current = ticket.generation == self.generation;
        if !current {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "dropping list response for superseded filter"
            );
        }
        current
    }

    fn finish(&mut self) {
        self.loading = false;
        self.pending_mode = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortBy;

    fn article(id: i64) -> ArticleSummary {
        ArticleSummary {
            id,
            title: format!("Artikel {id}"),
            thumbnail: format!("https://cdn.example/{id}.jpg"),
            is_video: false,
            total_view: 0,
            total_download: 0,
            province_name: None,
            city_name: None,
            tags: None,
            posting_date: None,
            category: None,
        }
    }

    fn page(ids: std::ops::RangeInclusive<i64>, has_more: bool) -> ListPage {
        ListPage {
            items: ids.map(article).collect(),
            has_more,
            total: None,
        }
    }

    fn ids(list: &ArticleList) -> Vec<i64> {
        list.items().iter().map(|a| a.id).collect()
    }

    #[test]
    fn load_more_appends_and_uses_current_length_as_offset() {
        let mut list = ArticleList::new(3);
        let (ticket, query) = list.begin_reset(ArticleFilter::default());
        assert_eq!(query.offset, None);
        assert!(list.apply(ticket, page(1..=3, true)));

        let (ticket, query) = list.begin_load_more().expect("more pages");
        assert_eq!(query.offset, Some(3));
        assert!(list.apply(ticket, page(4..=5, false)));

        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
        assert!(!list.has_more());
        assert!(list.begin_load_more().is_none());
    }

    #[test]
    fn filter_change_replaces_existing_items() {
        let mut list = ArticleList::new(3);
        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        list.apply(ticket, page(1..=3, true));

        let (ticket, query) = list.begin_reset(list.filter().with_sort(SortBy::Popular));
        assert_eq!(query.filter.sort_by, SortBy::Popular);
        assert_eq!(ids(&list), vec![1, 2, 3], "old items stay until the response lands");

        list.apply(ticket, page(10..=11, false));
        assert_eq!(ids(&list), vec![10, 11]);
    }

    #[test]
    fn stale_load_more_is_dropped_after_filter_change() {
        let mut list = ArticleList::new(2);
        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        list.apply(ticket, page(1..=2, true));

        let (stale, _) = list.begin_load_more().expect("more pages");
        let (fresh, _) = list.begin_reset(list.filter().with_media(Some(true)));

        assert!(list.apply(fresh, page(20..=21, true)));
        assert!(!list.apply(stale, page(3..=4, true)));
        assert_eq!(ids(&list), vec![20, 21]);
    }

    #[test]
    fn older_reset_resolving_last_does_not_win() {
        let mut list = ArticleList::new(2);
        let (first, _) = list.begin_reset(ArticleFilter::default());
        let (second, _) = list.begin_reset(ArticleFilter::default().with_province(Some(12)));

        assert!(list.apply(second, page(7..=7, false)));
        assert!(!list.apply(first, page(1..=2, true)));
        assert_eq!(ids(&list), vec![7]);
        assert_eq!(list.filter().province_id, Some(12));
    }

    #[test]
    fn failed_reset_empties_but_failed_load_more_keeps() {
        let mut list = ArticleList::new(2);
        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        list.apply(ticket, page(1..=2, true));

        let (ticket, _) = list.begin_load_more().expect("more pages");
        assert!(list.fail(ticket));
        assert_eq!(ids(&list), vec![1, 2]);
        assert!(!list.is_loading());

        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        assert!(list.fail(ticket));
        assert!(list.items().is_empty());
        assert!(!list.has_more());
    }

    #[test]
    fn load_more_is_refused_while_loading() {
        let mut list = ArticleList::new(2);
        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        assert!(list.is_resetting());
        assert!(list.begin_load_more().is_none());

        list.apply(ticket, page(1..=2, true));
        assert!(list.begin_load_more().is_some());
        assert!(list.begin_load_more().is_none());
    }

    #[test]
    fn plain_pages_infer_continuation_from_size() {
        assert!(ListPage::from_plain((1..=12).map(article).collect(), 12).has_more);
        assert!(!ListPage::from_plain((1..=5).map(article).collect(), 12).has_more);
    }

    #[test]
    fn paginated_total_is_tracked() {
        let mut list = ArticleList::new(24);
        let (ticket, _) = list.begin_reset(ArticleFilter::default());
        let page = ArticlePage {
            articles: (1..=24).map(article).collect(),
            total: 60,
            has_more: true,
        };
        list.apply(ticket, page.into());

        assert_eq!(list.total(), Some(60));
        assert!(list.has_more());
    }
}
