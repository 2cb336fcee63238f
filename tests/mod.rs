mod common;
mod property_tests;
