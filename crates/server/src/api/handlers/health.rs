/// Liveness probe. Does not touch the upstream API.
pub async fn health() -> &'static str {
    "ok"
}
