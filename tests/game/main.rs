//! Integration tests for Layer 3: Runtime
//!
//! Drives whole sessions of the built-in demo dungeon through the
//! public surface: scripted editors, the game loop, and the win
//! condition.

mod walkthrough;
