pub mod prelude;

pub mod champion;
pub mod comment;
pub mod favorite;
pub mod user;
