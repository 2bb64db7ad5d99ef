// End-to-end tests for the Newsdesk HTTP API.
//
// Each test builds the full router over in-memory repositories and
// temporary JSON stores, then drives it with `tower::ServiceExt::oneshot`.
// News tests point the aggregator at wiremock feed servers. The Postgres
// repository tests need Docker and are ignored by default.

mod helpers;
mod test_articles;
mod test_auth;
mod test_comments;
mod test_health;
mod test_news;
mod test_postgres;
mod test_youtube;
