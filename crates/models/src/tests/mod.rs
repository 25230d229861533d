/// Query behavior against a mocked Postgres connection
pub mod mock_tests;
