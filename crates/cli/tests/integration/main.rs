mod common;
mod level_tests;
mod modinfo_tests;
