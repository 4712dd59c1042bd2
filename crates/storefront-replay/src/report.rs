//! Per-domain summary of the cache after a replay

use chrono::{DateTime, Utc};
use std::fmt;

use storefront_cache::actions::action_type;
use storefront_cache::domain_models::FetchError;
use storefront_cache::selectors::{self, all_items, error, is_fetching, last_fetched};
use storefront_cache::{CollectionState, RootState};
use storefront_config::AppConfig;

/// What the selectors report for one collection
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSummary {
    pub name: &'static str,
    pub count: usize,
    pub fetching: bool,
    pub last_fetched: Option<DateTime<Utc>>,
    pub stale: bool,
    pub error: Option<FetchError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub domains: Vec<DomainSummary>,
}

fn summarize<T>(
    name: &'static str,
    state: &CollectionState<T>,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> DomainSummary {
    let fetched = last_fetched(state);
    DomainSummary {
        name,
        count: all_items(state).len(),
        fetching: is_fetching(state),
        last_fetched: fetched,
        stale: config.is_stale(fetched, now),
        error: error(state),
    }
}

impl Report {
    pub fn build(state: &RootState, config: &AppConfig, now: DateTime<Utc>) -> Self {
        use selectors::{product, root};

        let products = root::products_of(state);
        let domains = vec![
            summarize(action_type::PRODUCTS, product::items_of(products), config, now),
            summarize(
                action_type::PRODUCT_CATEGORIES,
                product::categories_of(products),
                config,
                now,
            ),
            summarize(
                action_type::PRODUCT_ATTRIBUTES,
                product::attributes_of(products),
                config,
                now,
            ),
            summarize(action_type::CATEGORIES, root::categories_of(state), config, now),
            summarize(action_type::ATTRIBUTES, root::attributes_of(state), config, now),
            summarize(action_type::POSTS, root::posts_of(state), config, now),
            summarize(action_type::PAGES, root::pages_of(state), config, now),
            summarize(action_type::ACCOUNTS, root::accounts_of(state), config, now),
            summarize(action_type::ORDERS, root::orders_of(state), config, now),
            summarize(action_type::SALES, root::sales_of(state), config, now),
            summarize(action_type::COUNTRIES, root::countries_of(state), config, now),
        ];
        Self { domains }
    }
}

impl fmt::Display for DomainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<22}{:>5} items", self.name, self.count)?;
        match self.last_fetched {
            Some(at) => write!(f, "  fetched {}", at.format("%Y-%m-%d %H:%M:%S"))?,
            None => write!(f, "  never fetched")?,
        }
        if self.stale {
            write!(f, "  [stale]")?;
        }
        if self.fetching {
            write!(f, "  [fetching]")?;
        }
        if let Some(error) = &self.error {
            match error.status {
                Some(status) => write!(f, "  error {}: {}", status, error)?,
                None => write!(f, "  error: {}", error)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for domain in &self.domains {
            writeln!(f, "{}", domain)?;
        }
        Ok(())
    }
}
