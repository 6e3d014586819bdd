//! Integration tests for Layer 2: Parser
//!
//! Tests for command recognition, argument capture, and input history
//! against the public crate surface.
