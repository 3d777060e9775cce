//! CLI definitions for the keittio command-line interface.
//!
//! Six subcommands: `search` to rank kitchens, `menu` and `today` to browse
//! a kitchen's food, and `star`/`unstar`/`favorites` to manage the local
//! favorites file. The catalog normally comes from the live menu service;
//! `--catalog` swaps in a JSON file (or stdin with `-`) for offline use.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "keittio",
    about = "Search cafeteria kitchens and browse their daily menus",
    version
)]
pub struct Cli {
    /// Read the kitchen catalog from a JSON file instead of the network
    /// ("-" reads stdin)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Path of the starred-kitchens file
    #[arg(
        long,
        global = true,
        env = "KEITTIO_FAVORITES",
        default_value = "favorites.json",
        value_name = "FILE"
    )]
    pub favorites_file: PathBuf,

    /// Override the menu service base URL (mainly for testing)
    #[arg(long, global = true, hide = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search kitchens by name
    Search {
        /// Free-text query; diacritics and case are ignored
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show upcoming menu days for a kitchen
    Menu {
        /// Customer id that owns the kitchen
        customer_id: String,

        /// Kitchen id
        kitchen_id: i64,

        /// Show only this day (YYYYMMDD)
        #[arg(long, value_name = "YYYYMMDD")]
        date: Option<u32>,

        /// Also print ingredient details for every item
        #[arg(long)]
        ingredients: bool,
    },

    /// One-line summary of today's food for a kitchen
    Today {
        customer_id: String,
        kitchen_id: i64,
    },

    /// Star the best-matching kitchen for a query
    Star {
        /// Free-text query; the top-ranked kitchen gets starred
        query: String,
    },

    /// Remove a kitchen from the favorites file
    Unstar {
        kitchen_id: i64,
    },

    /// List starred kitchens
    Favorites,
}
