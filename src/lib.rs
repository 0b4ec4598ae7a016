//! FoodieBaba browser client: session handling, route protection
//! and the page flows on top of the backend API.

pub use foodiebaba_boundary as boundary;
pub use foodiebaba_frontend_api as api;

pub mod config;
pub mod context;
pub mod flows;
pub mod guard;
pub mod notify;
pub mod page;
pub mod pager;
pub mod session;
pub mod storage;
pub mod submission;
pub mod validate;

mod error;

pub use self::{
    context::AppContext,
    error::Error,
    guard::{decide, Capability, Decision},
    page::{navigate, Navigation, Page},
    session::{SessionManager, Subscription},
};
