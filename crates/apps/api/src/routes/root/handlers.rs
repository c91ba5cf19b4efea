#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and ready to accept traffic", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
