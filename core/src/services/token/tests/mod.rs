//! Tests for the token services

#[cfg(test)]
mod codec_tests;
