pub mod reporter_tests;
