mod graphql;
mod health;

pub use graphql::{graphql_get, graphql_post, graphql_preflight};
pub use health::health;
