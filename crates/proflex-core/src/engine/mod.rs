//! # Engine Module
//!
//! This module implements the prediction engine of ProFlex, providing the
//! computational framework that turns protein input into flexibility scores.
//!
//! ## Overview
//!
//! The engine module owns everything between the core data models and the
//! public workflows: feature extraction, random-forest inference, model
//! artifact management, prediction configuration, and progress reporting.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Feature Extraction** ([`features`]) - Sequence and structure feature matrices
//! - **Inference** ([`forest`]) - Decision-tree and random-forest evaluation
//! - **Model Artifacts** ([`artifact`]) - Loading and saving serialized models
//! - **Built-in Models** ([`baseline`]) - Deterministic default forests
//! - **Configuration** ([`config`]) - Prediction parameters and validation
//! - **Progress Monitoring** ([`progress`]) - Progress reporting for batch runs
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod artifact;
pub mod baseline;
pub mod config;
pub mod error;
pub mod features;
pub mod forest;
pub mod progress;
