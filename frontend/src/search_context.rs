use std::rc::Rc;

use yew::prelude::*;

/// Visibility of the natural-language search modal, shared by the header,
/// the landing page's floating button, and the modal itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchModalState {
    pub open: bool,
}

pub enum SearchModalAction {
    Open,
    Close,
}

impl Reducible for SearchModalState {
    type Action = SearchModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = matches!(action, SearchModalAction::Open);
        if open == self.open {
            return self;
        }
        Rc::new(SearchModalState {
            open,
        })
    }
}

pub type SearchModalContext = UseReducerHandle<SearchModalState>;

#[derive(Properties, PartialEq)]
pub struct SearchModalProviderProps {
    pub children: Html,
}

#[function_component(SearchModalProvider)]
pub fn search_modal_provider(props: &SearchModalProviderProps) -> Html {
    let state = use_reducer(SearchModalState::default);
    html! {
        <ContextProvider<SearchModalContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SearchModalContext>>
    }
}

/// Callback that opens the search modal; a no-op outside the provider.
#[hook]
pub fn use_open_search() -> Callback<MouseEvent> {
    let ctx = use_context::<SearchModalContext>();
    Callback::from(move |_: MouseEvent| {
        if let Some(ctx) = ctx.as_ref() {
            ctx.dispatch(SearchModalAction::Open);
        }
    })
}
