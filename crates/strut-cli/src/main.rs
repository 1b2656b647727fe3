//! Strut CLI — rigidity verdicts, spectra, encoding, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "strut")]
#[command(version, about = "Strut — generic rigidity analysis for graphs")]
struct Cli {
    /// Emit analysis telemetry through tracing.
    #[arg(long, global = true)]
    telemetry: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the rigidity of a graph.
    Rigidity {
        /// Path to a graph description (JSON).
        #[arg(short, long)]
        input: Option<String>,

        /// Inline edge list, e.g. "0-1,1-2,0-2".
        #[arg(short, long)]
        edges: Option<String>,

        /// Vertex count for inline edges (defaults to max endpoint + 1).
        #[arg(short, long)]
        vertices: Option<usize>,

        /// Embedding dimension.
        #[arg(short, long, default_value_t = 2)]
        dimension: usize,

        /// RNG seed for reproducible queries.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of repeated queries (reruns for probabilistic verdicts).
        #[arg(short, long, default_value_t = 1)]
        trials: u32,
    },

    /// Classify the global rigidity of a graph.
    Global {
        /// Path to a graph description (JSON).
        #[arg(short, long)]
        input: Option<String>,

        /// Inline edge list, e.g. "0-1,1-2,0-2".
        #[arg(short, long)]
        edges: Option<String>,

        /// Vertex count for inline edges (defaults to max endpoint + 1).
        #[arg(short, long)]
        vertices: Option<usize>,

        /// Embedding dimension.
        #[arg(short, long, default_value_t = 2)]
        dimension: usize,

        /// RNG seed for reproducible queries.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of repeated queries (reruns for probabilistic verdicts).
        #[arg(short, long, default_value_t = 1)]
        trials: u32,
    },

    /// Print the eigenvalues of a graph matrix.
    Spectrum {
        /// Path to a graph description (JSON).
        #[arg(short, long)]
        input: Option<String>,

        /// Inline edge list, e.g. "0-1,1-2,0-2".
        #[arg(short, long)]
        edges: Option<String>,

        /// Vertex count for inline edges (defaults to max endpoint + 1).
        #[arg(short, long)]
        vertices: Option<usize>,

        /// Which matrix to decompose (adjacency, laplacian).
        #[arg(short, long, default_value = "laplacian")]
        matrix: String,
    },

    /// Print the integer encoding of a graph.
    Encode {
        /// Path to a graph description (JSON).
        #[arg(short, long)]
        input: Option<String>,

        /// Inline edge list, e.g. "0-1,1-2,0-2".
        #[arg(short, long)]
        edges: Option<String>,

        /// Vertex count for inline edges (defaults to max endpoint + 1).
        #[arg(short, long)]
        vertices: Option<usize>,
    },

    /// Validate an analysis input (.json) or a parameter file (.toml).
    Validate {
        /// Path to the file to validate.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.telemetry {
        tracing_subscriber::fmt().with_target(false).init();
    }

    let result = match cli.command {
        Commands::Rigidity {
            input,
            edges,
            vertices,
            dimension,
            seed,
            trials,
        } => commands::rigidity(
            &commands::GraphSource {
                input: input.as_deref(),
                edges: edges.as_deref(),
                vertices,
            },
            dimension,
            seed,
            trials,
            cli.telemetry,
        ),
        Commands::Global {
            input,
            edges,
            vertices,
            dimension,
            seed,
            trials,
        } => commands::global(
            &commands::GraphSource {
                input: input.as_deref(),
                edges: edges.as_deref(),
                vertices,
            },
            dimension,
            seed,
            trials,
            cli.telemetry,
        ),
        Commands::Spectrum {
            input,
            edges,
            vertices,
            matrix,
        } => commands::spectrum(
            &commands::GraphSource {
                input: input.as_deref(),
                edges: edges.as_deref(),
                vertices,
            },
            &matrix,
        ),
        Commands::Encode {
            input,
            edges,
            vertices,
        } => commands::encode(&commands::GraphSource {
            input: input.as_deref(),
            edges: edges.as_deref(),
            vertices,
        }),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
