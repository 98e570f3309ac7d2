pub mod documents;
mod query;
mod schema;

pub use query::QueryRoot;
pub use schema::{build_schema, MovieSchema};
