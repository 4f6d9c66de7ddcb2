// src/tests/mod.rs

//! Unit tests for _vsllib_.

pub mod common;

pub mod entryreader_tests;
pub mod keys_tests;
