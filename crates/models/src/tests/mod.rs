/// Row-level tests for the `beer` table; need a reachable Postgres.
pub mod beer_tests;
