mod field;
mod guard;
mod navbar;
mod notices;

pub use self::{field::*, guard::*, navbar::*, notices::*};
