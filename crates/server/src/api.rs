pub mod cors;
mod handlers;
mod router;

pub use router::{create_router, GRAPHQL_PATH};
