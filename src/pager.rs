use foodiebaba_frontend_api::RestaurantQuery;

/// Query state of the restaurant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    limit: u32,
    name: String,
    category: String,
    /// Number of items of the last loaded page.
    loaded: Option<usize>,
    total_pages: Option<u32>,
}

impl Pager {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            name: String::new(),
            category: String::new(),
            loaded: None,
            total_pages: None,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Changing a filter starts again at the first page.
    pub fn set_filters(&mut self, name: &str, category: &str) {
        let name = name.trim();
        let category = category.trim();
        if name != self.name || category != self.category {
            self.name = name.to_string();
            self.category = category.to_string();
            self.page = 1;
            self.loaded = None;
            self.total_pages = None;
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// A page with less than `limit` items is the last one, unless
    /// the backend told us the number of pages.
    #[must_use]
    pub fn has_next(&self) -> bool {
        match (self.total_pages, self.loaded) {
            (Some(total), _) => self.page < total,
            (None, Some(count)) => count >= self.limit as usize,
            (None, None) => false,
        }
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        self.loaded = None;
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        self.loaded = None;
        true
    }

    pub fn loaded(&mut self, count: usize, total_pages: Option<u32>) {
        self.loaded = Some(count);
        self.total_pages = total_pages;
    }

    /// The query that fetches the current page.
    #[must_use]
    pub fn query(&self) -> RestaurantQuery {
        let non_empty = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
        RestaurantQuery {
            page: self.page,
            limit: self.limit,
            name: non_empty(&self.name),
            category: non_empty(&self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omit_empty_filters() {
        let mut pager = Pager::new(10);
        pager.set_filters(" ", "Indian");
        let query = pager.query();
        assert_eq!(query.name, None);
        assert_eq!(query.category.as_deref(), Some("Indian"));
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn short_page_is_the_last_one() {
        let mut pager = Pager::new(10);
        assert!(!pager.has_next());
        pager.loaded(10, None);
        assert!(pager.has_next());
        assert!(pager.next());
        assert_eq!(pager.page(), 2);
        pager.loaded(3, None);
        assert!(!pager.has_next());
        assert!(!pager.next());
        assert!(pager.has_previous());
    }

    #[test]
    fn total_pages_take_precedence() {
        let mut pager = Pager::new(10);
        pager.loaded(4, Some(2));
        assert!(pager.has_next());
        pager.next();
        pager.loaded(10, Some(2));
        assert!(!pager.has_next());
    }

    #[test]
    fn changing_filters_resets_page() {
        let mut pager = Pager::new(5);
        pager.loaded(5, None);
        pager.next();
        pager.loaded(5, None);
        pager.next();
        assert_eq!(pager.page(), 3);
        pager.set_filters("", "");
        assert_eq!(pager.page(), 3);
        pager.set_filters("curry", "");
        assert_eq!(pager.page(), 1);
        assert!(!pager.previous());
    }
}
