use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use yts::YtsClient;

use super::QueryRoot;

/// Read-only schema: two root queries, no mutations or subscriptions.
pub type MovieSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(yts: Arc<YtsClient>) -> MovieSchema {
    Schema::build(QueryRoot::new(yts), EmptyMutation, EmptySubscription).finish()
}
