//! Integration test suite for tfgen
//!
//! End-to-end tests that drive the full rendering pipeline: an example
//! declared in YAML, a template file on disk, and all three rendered
//! variants checked against expected output.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```

mod render_pipeline;
