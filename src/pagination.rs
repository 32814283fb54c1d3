//! Page state for catalog listings, mirrored into the `page` url parameter.
//!
//! The url is the source of truth: a paginator is built from the url it is
//! shown under and every page change writes the url back in canonical form
//! (page 1 carries no `page` parameter). Data preloaded for the initial page
//! is reused when the user comes back to it; every other page is fetched
//! from a [`PageSource`].

use axum::async_trait;
use reqwest::Url;

#[cfg(test)]
use mockall::automock;

use crate::{
    constants::*,
    models::{Movie, MovieCategory, MoviePage},
};

/// The collection being paged through
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Category(MovieCategory),
    Search(String),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, listing: &Listing, page: u32) -> anyhow::Result<MoviePage>;
}

/// Outcome of asking for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// already on that page
    Unchanged,
    /// outside `1..=total_pages`
    Ignored,
    /// preloaded data was put back on display
    Reused,
    /// the page has to be fetched
    Fetch(u32),
}

/// Entry of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Catalog page counts are capped, whatever upstream reports
pub fn cap_total_pages(upstream: u32) -> u32 {
    upstream.clamp(1, MAX_CATALOG_PAGE)
}

/// Page encoded in the url; missing or malformed means page 1
pub fn page_from_url(url: &Url) -> u32 {
    url.query_pairs()
        .find(|(key, _)| key == PAGE_QUERY_PARAM)
        .and_then(|(_, val)| val.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Same url pointing at `page`. Other parameters are kept in order and
/// page 1 drops the parameter altogether.
pub fn url_with_page(url: &Url, page: u32) -> Url {
    let pairs = url
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, val)| (key.into_owned(), val.into_owned()))
        .collect::<Vec<_>>();
    let mut url = url.clone();
    if pairs.is_empty() && page <= 1 {
        url.set_query(None);
        return url;
    }
    {
        let mut query = url.query_pairs_mut();
        query.clear().extend_pairs(pairs);
        if page > 1 {
            query.append_pair(PAGE_QUERY_PARAM, &page.to_string());
        }
    }
    url
}

/// Pages to show around `current`: first and last are always present,
/// gaps are collapsed into an ellipsis.
pub fn page_range(current: u32, total_pages: u32) -> Vec<PageItem> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let mut items = vec![PageItem::Page(1)];
    if total_pages == 1 {
        return items;
    }
    let start = current.saturating_sub(PAGE_RANGE_DELTA).max(2);
    let end = current.saturating_add(PAGE_RANGE_DELTA).min(total_pages - 1);
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

pub struct Paginator<S> {
    source: S,
    listing: Listing,
    url: Url,
    current_page: u32,
    total_pages: u32,
    initial_page: u32,
    initial_movies: Vec<Movie>,
    movies: Vec<Movie>,
    loading: bool,
    error: Option<String>,
}

impl<S: PageSource> Paginator<S> {
    /// Paginator for data that was already loaded for the page in `url`
    /// A url page past the last page is pulled back to the last page
    pub fn new(source: S, listing: Listing, url: Url, initial: MoviePage) -> Self {
        let total_pages = cap_total_pages(initial.total_pages);
        let initial_page = page_from_url(&url).min(total_pages);
        let url = url_with_page(&url, initial_page);
        Self {
            source,
            listing,
            url,
            current_page: initial_page,
            total_pages,
            initial_page,
            movies: initial.results.clone(),
            initial_movies: initial.results,
            loading: false,
            error: None,
        }
    }

    /// Reproduce the view a url describes by fetching its page
    pub async fn load(source: S, listing: Listing, url: Url) -> anyhow::Result<Self> {
        let page = page_from_url(&url).min(MAX_CATALOG_PAGE);
        let initial = source.fetch_page(&listing, page).await?;
        let url = url_with_page(&url, page);
        Ok(Self::new(source, listing, url, initial))
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page_range(&self) -> Vec<PageItem> {
        page_range(self.current_page, self.total_pages)
    }

    /// Move to `page` and report whether data has to be fetched.
    /// A `Fetch` must be followed by [`Paginator::complete`].
    pub fn begin_change(&mut self, page: u32) -> PageChange {
        if page == self.current_page {
            return PageChange::Unchanged;
        }
        if page < 1 || page > self.total_pages {
            tracing::debug!("Ignoring page {page} outside 1..={}", self.total_pages);
            return PageChange::Ignored;
        }
        self.current_page = page;
        self.url = url_with_page(&self.url, page);
        self.error = None;
        if page == self.initial_page {
            self.movies = self.initial_movies.clone();
            self.loading = false;
            return PageChange::Reused;
        }
        self.loading = true;
        PageChange::Fetch(page)
    }

    /// Apply a fetch result. Results are applied in arrival order, so with
    /// several fetches in flight the last one to complete wins.
    pub fn complete(&mut self, page: u32, result: anyhow::Result<MoviePage>) {
        self.loading = false;
        match result {
            Ok(data) => {
                // never drop below the page on display
                self.total_pages = cap_total_pages(data.total_pages).max(self.current_page);
                self.movies = data.results;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("Failed to fetch page {page} of {:?}: {err:?}", self.listing);
                self.error = Some(err.to_string());
            }
        }
    }

    pub async fn change_page(&mut self, page: u32) -> PageChange {
        let change = self.begin_change(page);
        if let PageChange::Fetch(page) = change {
            let result = self.source.fetch_page(&self.listing, page).await;
            self.complete(page, result);
        }
        change
    }
}
