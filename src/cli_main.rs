use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kmerscope", version, about = "K-mer search, composition and function prediction for DNA sequences", long_about = None)]
pub struct Cli {
    /// Optional JSON config file (min_capacity, embedding_k)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a sequence and report its length
    Load {
        /// Input FASTA(.gz) or plain sequence file
        #[arg(short, long)]
        input: String,
    },

    /// Find every position of a k-mer (K = query length)
    Search {
        /// Input FASTA(.gz) or plain sequence file
        #[arg(short, long)]
        input: String,

        /// K-mer to look up
        #[arg(short, long)]
        kmer: String,
    },

    /// Predict a coarse functional category from k-mer composition
    Predict {
        /// Input FASTA(.gz) or plain sequence file
        #[arg(short, long)]
        input: String,

        /// K-mer size for the embedding (overrides config)
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Report GC content
    Gc {
        /// Input FASTA(.gz) or plain sequence file
        #[arg(short, long)]
        input: String,
    },
}
