use std::{cell::RefCell, rc::Rc};

use foodiebaba_boundary::Restaurant;

use crate::{api::RestaurantQuery, context::AppContext, pager::Pager, Error};

use super::{messages, report};

/// The paged and filtered list of approved restaurants.
#[derive(Clone)]
pub struct Restaurants {
    ctx: AppContext,
    state: Rc<RefCell<State>>,
}

struct State {
    pager: Pager,
    restaurants: Vec<Restaurant>,
    last_query: Option<RestaurantQuery>,
    loading: bool,
    error: Option<String>,
    // Only the response to the latest request is applied.
    generation: u64,
}

impl Restaurants {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        let pager = Pager::new(ctx.config().restaurants.page_size);
        let state = State {
            pager,
            restaurants: vec![],
            last_query: None,
            loading: false,
            error: None,
            generation: 0,
        };
        Self {
            ctx,
            state: Rc::new(RefCell::new(state)),
        }
    }

    #[must_use]
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.state.borrow().restaurants.clone()
    }

    #[must_use]
    pub fn pager(&self) -> Pager {
        self.state.borrow().pager.clone()
    }

    #[must_use]
    pub fn last_query(&self) -> Option<RestaurantQuery> {
        self.state.borrow().last_query.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Loads the current page.
    pub async fn fetch(&self) -> Result<(), Error> {
        let query = self.state.borrow().pager.query();
        self.fetch_query(query).await
    }

    /// Repeats the last request.
    pub async fn refetch(&self) -> Result<(), Error> {
        let query = {
            let state = self.state.borrow();
            state
                .last_query
                .clone()
                .unwrap_or_else(|| state.pager.query())
        };
        self.fetch_query(query).await
    }

    /// Applies new filters and loads the first page.
    pub async fn search(&self, name: &str, category: &str) -> Result<(), Error> {
        self.state.borrow_mut().pager.set_filters(name, category);
        self.fetch().await
    }

    pub async fn next(&self) -> Result<(), Error> {
        self.turn_page(Pager::next).await
    }

    pub async fn previous(&self) -> Result<(), Error> {
        self.turn_page(Pager::previous).await
    }

    /// If the new page can't be loaded the pager stays on the
    /// page whose items are still shown.
    async fn turn_page(&self, turn: fn(&mut Pager) -> bool) -> Result<(), Error> {
        let shown = {
            let mut state = self.state.borrow_mut();
            let shown = state.pager.clone();
            if !turn(&mut state.pager) {
                return Ok(());
            }
            shown
        };
        if let Err(err) = self.fetch().await {
            self.state.borrow_mut().pager = shown;
            return Err(err);
        }
        Ok(())
    }

    async fn fetch_query(&self, query: RestaurantQuery) -> Result<(), Error> {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.loading = true;
            state.last_query = Some(query.clone());
            state.generation
        };
        let result = self.ctx.public_api().restaurants(&query).await;
        if self.state.borrow().generation != generation {
            log::debug!("Discard outdated restaurant list of page {}", query.page);
            return Ok(());
        }
        let result = report(&self.ctx, result, messages::FETCH_RESTAURANTS_FAILED);
        let mut state = self.state.borrow_mut();
        state.loading = false;
        match result {
            Ok(page) => {
                let (restaurants, total_pages) = page.into_parts();
                state.pager.loaded(restaurants.len(), total_pages);
                state.restaurants = restaurants;
                state.error = None;
                Ok(())
            }
            Err(err) => {
                if let Error::Api(api_err) = &err {
                    state.error = Some(api_err.user_message(messages::FETCH_RESTAURANTS_FAILED));
                }
                Err(err)
            }
        }
    }
}
