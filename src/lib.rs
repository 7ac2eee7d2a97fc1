//! Tradeworks ROI Estimator - Cost-Comparison and Savings Engine
//!
//! This crate converts a short survey about a prospect's current tooling
//! practices into a deterministic financial comparison against the tiered
//! Tradeworks subscription, producing a savings/ROI report with a staged,
//! animated reveal.

pub mod application;
pub mod config;
pub mod domain;
