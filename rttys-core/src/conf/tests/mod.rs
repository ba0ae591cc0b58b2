mod flags_tests;
mod overlay_tests;
mod test_helpers;
