mod concurrency_tests;
mod modinfo_tests;
