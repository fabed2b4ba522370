//! Diary list page state
//!
//! Holds the diaries read at mount time and the four list inputs. Raw
//! search text is stored immediately but only reaches the pipeline once
//! the debouncer settles. The page re-reads storage whenever a diary is
//! created, updated or deleted, and stops listening when dropped.

use super::cards::DiaryCard;
use super::debounce::Debouncer;
use super::view::{list_view, DerivedView, ListQuery};
use super::window::{PageNav, Paginator};
use crate::config::FILTER_ALL;
use crate::database::{DiaryRecord, Emotion, Repository};
use crate::services::{ChangeNotifier, DiariesService, ListSettings, SubscriptionId};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Inputs of the list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub filter_value: String,
    /// What the search box shows right now
    pub search_value: String,
    /// What the pipeline searches for
    pub debounced_search_value: String,
    pub current_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            filter_value: FILTER_ALL.to_string(),
            search_value: String::new(),
            debounced_search_value: String::new(),
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetFilter(String),
    SetSearch(String),
    SetDebouncedSearch(String),
    SetPage(usize),
}

/// Apply one action to the list state.
///
/// A new filter or a new debounced query starts over at page 1.
pub fn reduce(state: &ListState, action: ListAction) -> ListState {
    let mut next = state.clone();

    match action {
        ListAction::SetFilter(value) => {
            if value != next.filter_value {
                next.filter_value = value;
                next.current_page = 1;
            }
        }
        ListAction::SetSearch(value) => next.search_value = value,
        ListAction::SetDebouncedSearch(value) => {
            if value != next.debounced_search_value {
                next.debounced_search_value = value;
                next.current_page = 1;
            }
        }
        ListAction::SetPage(page) => next.current_page = page.max(1),
    }

    next
}

/// Entry of the emotion select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

struct PageInner {
    diaries: Vec<DiaryRecord>,
    state: ListState,
}

fn lock(inner: &Mutex<PageInner>) -> MutexGuard<'_, PageInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The mounted diary list
pub struct DiaryListPage {
    inner: Arc<Mutex<PageInner>>,
    settings: ListSettings,
    debouncer: Debouncer<String>,
    notifier: ChangeNotifier,
    subscription: SubscriptionId,
}

impl DiaryListPage {
    /// Read the diaries once and start listening for changes
    pub fn mount(diaries: &DiariesService, settings: ListSettings) -> Self {
        let inner = Arc::new(Mutex::new(PageInner {
            diaries: diaries.list_diaries(),
            state: ListState::default(),
        }));

        let debouncer = {
            let weak = Arc::downgrade(&inner);
            Debouncer::new(settings.search_debounce(), move |query: String| {
                if let Some(inner) = weak.upgrade() {
                    tracing::debug!("Applying search query: {:?}", query);
                    let mut page = lock(&inner);
                    page.state = reduce(&page.state, ListAction::SetDebouncedSearch(query));
                }
            })
        };

        let notifier = diaries.notifier().clone();
        let subscription = {
            let weak: Weak<Mutex<PageInner>> = Arc::downgrade(&inner);
            let repo: Repository = diaries.repository().clone();
            notifier.subscribe(move |event| {
                if !event.touches_diaries() {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).diaries = repo.load_diaries();
                }
            })
        };

        tracing::debug!("Diary list mounted with {} diaries", lock(&inner).diaries.len());

        Self {
            inner,
            settings,
            debouncer,
            notifier,
            subscription,
        }
    }

    pub fn state(&self) -> ListState {
        lock(&self.inner).state.clone()
    }

    pub fn dispatch(&self, action: ListAction) {
        let mut page = lock(&self.inner);
        page.state = reduce(&page.state, action);
    }

    /// Record search box input; the list follows once typing pauses.
    ///
    /// Outside a tokio runtime there is no timer and the query applies at once.
    pub fn set_search_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.dispatch(ListAction::SetSearch(value.clone()));
        self.debouncer.push(value);
    }

    pub fn set_filter(&self, value: impl Into<String>) {
        self.dispatch(ListAction::SetFilter(value.into()));
    }

    pub fn set_page(&self, page: usize) {
        self.dispatch(ListAction::SetPage(page));
    }

    /// Apply a paginator control; returns the new page when it changed
    pub fn navigate(&self, nav: PageNav) -> Option<usize> {
        let target = self.paginator().navigate(nav)?;
        self.set_page(target);
        Some(target)
    }

    /// Current derived view
    pub fn view(&self) -> DerivedView {
        let page = lock(&self.inner);
        let query = ListQuery {
            query: page.state.debounced_search_value.clone(),
            tag: page.state.filter_value.clone(),
            page: page.state.current_page,
            page_size: self.settings.page_size,
        };
        list_view(&page.diaries, &query)
    }

    /// Cards for the visible diaries
    pub fn cards(&self) -> Vec<DiaryCard> {
        self.view()
            .visible_records
            .iter()
            .map(DiaryCard::from_record)
            .collect()
    }

    pub fn paginator(&self) -> Paginator {
        let view = self.view();
        Paginator::new(
            view.current_page,
            view.total_pages,
            self.settings.max_visible_pages,
        )
    }

    /// Re-read the diaries from storage
    pub fn reload(&self, diaries: &DiariesService) {
        lock(&self.inner).diaries = diaries.list_diaries();
    }

    /// Options of the emotion select box, "all" first
    pub fn filter_options() -> Vec<FilterOption> {
        std::iter::once(FilterOption {
            label: "전체",
            value: FILTER_ALL,
        })
        .chain(Emotion::ALL.into_iter().map(|e| FilterOption {
            label: e.label(),
            value: e.as_str(),
        }))
        .collect()
    }
}

impl Drop for DiaryListPage {
    fn drop(&mut self) {
        self.notifier.unsubscribe(self.subscription);
    }
}
