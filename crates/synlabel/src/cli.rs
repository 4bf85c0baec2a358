use std::path::PathBuf;

use clap::{Parser, Subcommand};

use synlabel_core::source::DEFAULT_LABELS_LOCATION;

/// synlabel — map ImageNet-style synset folders onto pretrained model class labels.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Model class-label list: http(s)://, s3://bucket/key (anonymous), file:// or a path.
    #[arg(long, global = true, default_value = DEFAULT_LABELS_LOCATION, env = "SYNLABEL_LABELS")]
    pub labels: String,

    /// Timeout for fetching a remote label list, in seconds.
    #[arg(long, global = true, default_value = "30", env = "SYNLABEL_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve dataset labels such as `n01560419-bulbul`.
    Match {
        /// Dataset labels or paths containing a synset folder name.
        #[arg(required = true)]
        dataset_labels: Vec<String>,

        /// Print every matching model label, not just the first.
        #[arg(long)]
        all: bool,
    },

    /// Resolve every synset folder inside a dataset directory.
    MapDir {
        /// Directory whose subfolders are named `n<digits>-<label>`.
        dir: PathBuf,

        /// Emit the mapping as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed model label list.
    List {
        /// Emit the list as JSON.
        #[arg(long)]
        json: bool,
    },
}
