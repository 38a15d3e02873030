//! Feed filters and page arithmetic.

/// Filters shared by the feed and explore pages. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilters {
    pub topic: String,
    pub source: String,
    pub q: String,
    pub from: String,
    pub to: String,
}

impl NewsFilters {
    pub fn is_empty(&self) -> bool {
        [&self.topic, &self.source, &self.q, &self.from, &self.to]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("topic", self.topic.trim().to_string()),
            ("source", self.source.trim().to_string()),
            ("q", self.q.trim().to_string()),
            ("from", self.from.trim().to_string()),
            ("to", self.to.trim().to_string()),
        ]
    }
}

/// One page request for a filtered feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub filters: NewsFilters,
    pub page: u32,
    pub page_size: u32,
}

impl FeedQuery {
    pub fn new(filters: NewsFilters, page_size: u32) -> Self {
        Self {
            filters,
            page: 1,
            page_size,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// New filters always start again from the first page.
    pub fn apply_filters(&mut self, filters: NewsFilters) {
        self.filters = filters;
        self.page = 1;
    }

    /// Query pairs, empty ones included; the client drops those.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<_> = self.filters.pairs().into_iter().collect();
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        pairs
    }
}

/// Position within a paged result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pager {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next(&self) -> u32 {
        if self.has_next() {
            self.page + 1
        } else {
            self.page
        }
    }

    pub fn prev(&self) -> u32 {
        if self.has_prev() {
            self.page - 1
        } else {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pager::new(1, 6, 0).total_pages(), 1);
        assert_eq!(Pager::new(1, 6, 6).total_pages(), 1);
        assert_eq!(Pager::new(1, 6, 7).total_pages(), 2);
        assert_eq!(Pager::new(1, 12, 25).total_pages(), 3);
    }

    #[test]
    fn test_bounds() {
        let first = Pager::new(1, 6, 13);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), 1);
        assert_eq!(first.next(), 2);

        let last = Pager::new(3, 6, 13);
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.next(), 3);

        let empty = Pager::new(1, 6, 0);
        assert!(!empty.has_prev() && !empty.has_next());
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let mut query = FeedQuery::new(NewsFilters::default(), 6).with_page(4);
        assert_eq!(query.page, 4);
        query.apply_filters(NewsFilters {
            topic: "cardio".into(),
            ..Default::default()
        });
        assert_eq!(query.page, 1);
        assert_eq!(query.filters.topic, "cardio");
    }

    #[test]
    fn test_query_pairs_trimmed() {
        let query = FeedQuery::new(
            NewsFilters {
                q: "  squat ".into(),
                ..Default::default()
            },
            6,
        );
        let pairs = query.to_query();
        assert!(pairs.contains(&("q", "squat".to_string())));
        assert!(pairs.contains(&("page", "1".to_string())));
        assert!(pairs.contains(&("page_size", "6".to_string())));
        assert!(!NewsFilters::default().pairs().iter().any(|(_, v)| !v.is_empty()));
    }
}
