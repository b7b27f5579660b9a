pub mod digest_tests;
pub mod validate_tests;
