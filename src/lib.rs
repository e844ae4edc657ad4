//! Admin backend for GJPB content.
//!
//! Logos, websites, fill-in-the-blank questions, MCQs, users and roles are
//! owned by the upstream REST API; this crate validates and normalises admin
//! forms, forwards the caller's bearer token and interprets the upstream
//! status envelope. [`shared::crud`] holds the table and dialog state shared by
//! every resource, [`features::roles`] rebuilds the role hierarchy for display.

pub mod app;
pub mod core;
pub mod features;
pub mod modules;
pub mod shared;
