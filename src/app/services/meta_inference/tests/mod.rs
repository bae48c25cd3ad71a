//! Tests for metadata creation and type inference

mod inference_tests;
