//! CLI module - Command-line interface for Sitedraft
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Sitedraft - Website Section Generator
/// Turns a one-line business description into a starter site outline
#[derive(Parser)]
#[command(name = "sitedraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the generation backend server
    #[command(alias = "server")]
    Serve,

    /// Run the public-facing relay server
    Relay,

    /// Generate sections for a prompt and store the result
    #[command(alias = "g")]
    Generate {
        /// Business description to classify
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// List recent generation records
    #[command(alias = "ls", alias = "l")]
    List,

    /// Show a stored record with its sections
    #[command(alias = "s")]
    Show {
        /// Record ID
        id: String,
    },

    /// Delete a stored record
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Record ID to delete
        id: String,
    },

    /// Check backend health over HTTP
    Health,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
