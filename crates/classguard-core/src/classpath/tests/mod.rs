pub mod version_tests;
pub mod inventory_tests;
