//! Cross-crate integration tests for the GymPi dashboard live under `tests/`.
