mod percentile_tests;
mod render_tests;
mod test_helpers;
