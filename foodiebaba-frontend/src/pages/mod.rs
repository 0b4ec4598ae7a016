mod add_restaurant;
mod admin;
mod home;
mod login;
mod register;
mod restaurant;

pub use self::{add_restaurant::*, admin::*, home::*, login::*, register::*, restaurant::*};
