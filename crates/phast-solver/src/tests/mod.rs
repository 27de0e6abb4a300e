mod combinator_tests;
mod format_tests;
mod offset_tests;
mod relation_tests;
