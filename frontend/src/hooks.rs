use web_sys::{console, ScrollBehavior, ScrollToOptions};
use wonderful_gallery_shared::{
    ApiError, ArticleFilter, ArticleList, ArticleQuery, ListPage, ListTicket,
};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Which list endpoint backs an [`ArticleList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEndpoint {
    /// `GET /articles`, continuation inferred from the page length.
    Plain,
    /// `GET /articles/paginated`, with a total count and `has_more`.
    Paginated,
}

async fn fetch_page(endpoint: ListEndpoint, query: ArticleQuery) -> Result<ListPage, ApiError> {
    match endpoint {
        ListEndpoint::Plain => crate::api::fetch_articles(&query)
            .await
            .map(|items| ListPage::from_plain(items, query.limit)),
        ListEndpoint::Paginated => crate::api::fetch_articles_page(&query)
            .await
            .map(ListPage::from),
    }
}

/// Current list state plus the load-more trigger.
pub struct UseArticleListHandle {
    /// Snapshot of the list as of this render.
    pub list: ArticleList,
    /// Append the next page; ignored while a request is running or when the
    /// backend reported the end of the list.
    pub load_more: Callback<MouseEvent>,
}

/// Drive an [`ArticleList`] from a filter value.
///
/// Every change of `filter` starts over from page one. Responses that
/// belong to a superseded filter are dropped by the list itself, so a slow
/// reply can never overwrite a newer one.
///
/// ```rust
/// #[function_component(Grid)]
/// fn grid() -> Html {
///     let filter = use_state(ArticleFilter::default);
///     let articles = use_article_list((*filter).clone(), 12, ListEndpoint::Plain);
///     html! { <p>{ articles.list.items().len() }</p> }
/// }
/// ```
#[hook]
pub fn use_article_list(
    filter: ArticleFilter,
    limit: usize,
    endpoint: ListEndpoint,
) -> UseArticleListHandle {
    let list = use_mut_ref(|| ArticleList::new(limit));
    let update = use_force_update();

    let run = {
        let list = list.clone();
        let update = update.clone();
        Callback::from(move |(ticket, query): (ListTicket, ArticleQuery)| {
            let list = list.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let changed = match fetch_page(endpoint, query).await {
                    Ok(page) => list.borrow_mut().apply(ticket, page),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch articles: {}", e).into());
                        list.borrow_mut().fail(ticket)
                    },
                };
                if changed {
                    update.force_update();
                }
            });
        })
    };

    {
        let list = list.clone();
        let update = update.clone();
        let run = run.clone();
        use_effect_with(filter, move |filter| {
            let request = list.borrow_mut().begin_reset(filter.clone());
            update.force_update();
            run.emit(request);
            || ()
        });
    }

    let load_more = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            let request = list.borrow_mut().begin_load_more();
            if let Some(request) = request {
                update.force_update();
                run.emit(request);
            }
        })
    };

    let snapshot = list.borrow().clone();
    UseArticleListHandle {
        list: snapshot,
        load_more,
    }
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
