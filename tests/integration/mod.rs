mod console_test;
mod headless_test;
mod persistence_test;
