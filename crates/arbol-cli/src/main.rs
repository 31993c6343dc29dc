//! arbol - decision tree learning from the command line
//!
//! Usage:
//!   arbol train train.arff                    # Learn, print tree, score on training data
//!   arbol train train.arff --test test.arff   # Score on a separate test set
//!   arbol train train.arff --model-out m.json # Save the model for later
//!   arbol evaluate m.json test.arff           # Score a saved model

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod logging;

use commands::{evaluate, train};

/// arbol - ID3 decision trees with chi-square pre-pruning
///
/// Learns decision trees from nominal ARFF data and scores them.
#[derive(Parser)]
#[command(name = "arbol")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a tree, print it and report its accuracy
    Train {
        /// Training data (ARFF)
        #[arg(value_name = "TRAIN")]
        train: PathBuf,

        /// Test data (ARFF); defaults to the training data
        #[arg(long, value_name = "TEST")]
        test: Option<PathBuf>,

        /// Name of the class attribute
        #[arg(long, default_value = "Class")]
        class: String,

        /// Split-stopping confidence in [0, 1] (default 0.99)
        #[arg(long)]
        confidence: Option<f64>,

        /// Treat unknown values as a value of their own
        #[arg(long)]
        unknown_as_value: bool,

        /// Rank attributes by gain ratio instead of information gain
        #[arg(long)]
        gain_ratio: bool,

        /// Learner configuration (TOML); flags override its values
        #[arg(long, value_name = "TOML")]
        config: Option<PathBuf>,

        /// Write the tree rendering to this file
        #[arg(long, value_name = "PATH")]
        tree_out: Option<PathBuf>,

        /// Save the model as JSON
        #[arg(long, value_name = "PATH")]
        model_out: Option<PathBuf>,

        /// Skip examples the model cannot classify instead of failing
        #[arg(long)]
        skip_incompatible: bool,
    },

    /// Score a saved model on labeled data
    Evaluate {
        /// Model file written by `train --model-out`
        #[arg(value_name = "MODEL_JSON")]
        model: PathBuf,

        /// Labeled data (ARFF)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Name of the class attribute; defaults to the one the model predicts
        #[arg(long)]
        class: Option<String>,

        /// Skip examples the model cannot classify instead of failing
        #[arg(long)]
        skip_incompatible: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Train {
            train,
            test,
            class,
            confidence,
            unknown_as_value,
            gain_ratio,
            config,
            tree_out,
            model_out,
            skip_incompatible,
        } => train::run(&train::TrainOptions {
            train,
            test,
            class,
            confidence,
            unknown_as_value,
            gain_ratio,
            config,
            tree_out,
            model_out,
            skip_incompatible,
        }),

        Commands::Evaluate {
            model,
            data,
            class,
            skip_incompatible,
        } => evaluate::run(&model, &data, class.as_deref(), skip_incompatible),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
