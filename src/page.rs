//! The pages of the application and how to reach them.

use std::fmt;

use foodiebaba_boundary::{Identity, RestaurantId, UserRole};

use crate::guard::{self, Capability, Decision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    RestaurantDetail(RestaurantId),
    AddRestaurant,
    Admin,
}

impl Page {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::RestaurantDetail(id) => format!("/restaurants/{id}"),
            Self::AddRestaurant => "/add-restaurant".to_string(),
            Self::Admin => "/admin".to_string(),
        }
    }

    #[must_use]
    pub const fn required_capability(&self) -> Capability {
        match self {
            Self::Home | Self::Login | Self::Register => Capability::None,
            Self::RestaurantDetail(_) | Self::AddRestaurant => Capability::Authenticated,
            Self::Admin => Capability::Admin,
        }
    }

    /// Resolves a path; unknown paths lead to [`Page::Home`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<_> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["add-restaurant"] => Self::AddRestaurant,
            ["admin"] => Self::Admin,
            ["restaurants", id] => id
                .parse()
                .map(Self::RestaurantDetail)
                .unwrap_or(Self::Home),
            _ => Self::Home,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Page),
    Redirect(Page),
}

impl Navigation {
    /// The page that ends up on screen.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Render(page) | Self::Redirect(page) => *page,
        }
    }
}

/// Evaluates the route guard for `path` against the current identity.
#[must_use]
pub fn navigate(path: &str, identity: Option<&Identity>) -> Navigation {
    let page = Page::from_path(path);
    match guard::decide(page.required_capability(), identity) {
        Decision::Allow => Navigation::Render(page),
        Decision::RedirectToLogin => {
            log::debug!("Redirect from {page} to the login page");
            Navigation::Redirect(Page::Login)
        }
        Decision::RedirectToHome => {
            log::debug!("Redirect from {page} to the home page");
            Navigation::Redirect(Page::Home)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Link { label: &'static str, page: Page },
    Greeting(String),
    Logout,
}

/// Entries of the navigation bar.
#[must_use]
pub fn menu(identity: Option<&Identity>) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Link {
        label: "FoodieBaba",
        page: Page::Home,
    }];
    let Some(identity) = identity else {
        items.push(MenuItem::Link {
            label: "Login",
            page: Page::Login,
        });
        items.push(MenuItem::Link {
            label: "Register",
            page: Page::Register,
        });
        return items;
    };
    items.push(MenuItem::Greeting(format!("Hello, {}", identity.username)));
    items.push(MenuItem::Link {
        label: "Add Restaurant",
        page: Page::AddRestaurant,
    });
    if identity.role == UserRole::Admin {
        items.push(MenuItem::Link {
            label: "Admin Panel",
            page: Page::Admin,
        });
    }
    items.push(MenuItem::Logout);
    items
}
