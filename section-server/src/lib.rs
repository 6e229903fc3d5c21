//! Wagon section lookup server.
//!
//! Answers: "At this station, where along the platform will wagon N of
//! train T stop?" from a directory of per-station XML files.

pub mod cache;
pub mod config;
pub mod domain;
pub mod locator;
pub mod scanner;
pub mod service;
pub mod web;
