//! CLI infrastructure for the riposte toolkit
//!
//! This module provides the command-line interface for playing against the
//! agent, simulating it against scripted opponents, and inspecting saved
//! models.

pub mod commands;
pub mod output;
