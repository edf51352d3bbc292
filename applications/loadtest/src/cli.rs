use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Userbase server
    #[arg(short, long, global = true, default_value = "http://127.0.0.1:8080")]
    pub url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert users one request at a time, then verify the row count
    Insert {
        /// Number of users to insert
        #[arg(short, long, default_value_t = 100_000)]
        count: u64,
    },

    /// Concurrent range reads, one request per connection
    Range {
        /// Number of concurrent connections
        #[arg(short, long, default_value_t = 100)]
        connections: usize,

        /// Ids 1..records are read from
        #[arg(short, long, default_value_t = 100_000)]
        records: i64,

        /// Rows requested per range read
        #[arg(long, default_value_t = 10_000)]
        range: i64,

        /// Insert records - 1 users before measuring
        #[arg(long)]
        seed: bool,
    },

    /// Concurrent point reads, many requests per connection
    Point {
        /// Number of concurrent connections
        #[arg(short, long, default_value_t = 100)]
        connections: usize,

        /// Ids 1..records are read from
        #[arg(short, long, default_value_t = 100_000)]
        records: i64,

        /// Exact number of point reads issued by each connection
        #[arg(long, default_value_t = 10_000)]
        requests: usize,

        /// Insert records - 1 users before measuring
        #[arg(long)]
        seed: bool,
    },
}
