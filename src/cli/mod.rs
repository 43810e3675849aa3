// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the unicharmap command-line interface.
//!
//! Four subcommands: `build` turns a unicharset text file into a `.ucm`
//! snapshot, `inspect` summarizes a snapshot, and `lookup` / `tokenize` run
//! the table's queries against one.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unicharmap",
    about = "Unicode character and ligature id tables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a .ucm snapshot from a unicharset text file
    Build {
        /// Unicharset file (count line, then one representation per line)
        #[arg(short, long)]
        input: String,

        /// Output .ucm file
        #[arg(short, long)]
        output: String,
    },

    /// Inspect a .ucm snapshot
    Inspect {
        /// Path to .ucm file
        file: String,

        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up the id of a representation
    Lookup {
        /// Path to .ucm file
        file: String,

        /// Representation to look up
        repr: String,

        /// Only use the first N bytes of the representation
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Split text into unichar units (shortest match first)
    Tokenize {
        /// Path to .ucm file
        file: String,

        /// Text to scan
        text: String,
    },
}
