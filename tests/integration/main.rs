//! Integration tests for profile-reel

mod render_test;
