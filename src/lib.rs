//! Client core for browsing Marvel characters
//!
//! - [`catalog`]: fetches and normalizes the character list once per session
//! - [`favorites`]: favorite character ids, mirrored to the key-value store
//! - [`theme`]: light/dark flag, mirrored to the key-value store
//! - [`app`]: the explicitly constructed state root handed to the front end

#![forbid(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod favorites;
pub mod locations;
pub mod map;
pub mod marvel;
pub mod normalizer;
pub mod store;
pub mod theme;
pub mod types;
