//! CLI command implementations.

use strut_graph::{graph_number, matrices, Graph};
use strut_io::contract::{AnalysisInput, AnalysisParams, GraphInput};
use strut_io::validator::{validate_graph, validate_input, validate_params};
use strut_rigidity::{AnalysisConfig, Workbench};
use strut_telemetry::sinks::TracingSink;

/// Where a command gets its graph from: a JSON file or an inline list.
pub struct GraphSource<'a> {
    pub input: Option<&'a str>,
    pub edges: Option<&'a str>,
    pub vertices: Option<usize>,
}

fn load_graph(source: &GraphSource<'_>) -> Result<Graph, Box<dyn std::error::Error>> {
    if let Some(path) = source.input {
        let content = std::fs::read_to_string(path)?;
        let graph_input: GraphInput = serde_json::from_str(&content)?;
        validate_graph(&graph_input)?;
        Ok(graph_input.to_graph()?)
    } else if let Some(list) = source.edges {
        let pairs = parse_edge_list(list)?;
        let needed = pairs
            .iter()
            .map(|&(a, b)| a.max(b) + 1)
            .max()
            .unwrap_or(0);
        let n = source.vertices.unwrap_or(needed).max(needed);
        Ok(Graph::from_edges(n, &pairs)?)
    } else {
        Err("Provide a graph with --input <file.json> or --edges <list>".into())
    }
}

fn parse_edge_list(list: &str) -> Result<Vec<(usize, usize)>, Box<dyn std::error::Error>> {
    let mut pairs = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (a, b) = part
            .split_once('-')
            .ok_or_else(|| format!("Malformed edge '{part}', expected 'a-b'"))?;
        pairs.push((a.trim().parse()?, b.trim().parse()?));
    }
    Ok(pairs)
}

fn make_workbench(
    graph: Graph,
    dimension: usize,
    seed: Option<u64>,
    telemetry: bool,
) -> Result<Workbench, Box<dyn std::error::Error>> {
    let config = AnalysisConfig { dimension, seed };
    let mut bench = Workbench::with_graph(graph, &config)?;
    if telemetry {
        bench
            .telemetry_mut()
            .add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));
    }
    Ok(bench)
}

/// Run rigidity queries and print the verdicts.
pub fn rigidity(
    source: &GraphSource<'_>,
    dimension: usize,
    seed: Option<u64>,
    trials: u32,
    telemetry: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(source)?;
    let mut bench = make_workbench(graph, dimension, seed, telemetry)?;

    println!("Strut Rigidity Check");
    println!("────────────────────");
    println!("Vertices:  {}", bench.graph().vertex_count());
    println!("Edges:     {}", bench.graph().edge_count());
    println!("Dimension: {dimension}");
    println!();

    for trial in 0..trials {
        let report = bench.rigidity_check()?;
        if trials > 1 {
            println!("[{}] {report}", trial + 1);
        } else {
            println!("{report}");
        }
    }
    Ok(())
}

/// Run global-rigidity queries and print the verdicts.
pub fn global(
    source: &GraphSource<'_>,
    dimension: usize,
    seed: Option<u64>,
    trials: u32,
    telemetry: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(source)?;
    let mut bench = make_workbench(graph, dimension, seed, telemetry)?;

    println!("Strut Global Rigidity Check");
    println!("───────────────────────────");
    println!("Vertices:  {}", bench.graph().vertex_count());
    println!("Edges:     {}", bench.graph().edge_count());
    println!("Dimension: {dimension}");
    println!();

    for trial in 0..trials {
        let report = bench.global_rigidity_check()?;
        if trials > 1 {
            println!("[{}] {report}", trial + 1);
        } else {
            println!("{report}");
        }
    }
    Ok(())
}

/// Print the spectrum of a graph matrix.
pub fn spectrum(
    source: &GraphSource<'_>,
    matrix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(source)?;

    let values = match matrix {
        "adjacency" => matrices::adjacency_eigenvalues(&graph)?,
        "laplacian" => matrices::laplacian_eigenvalues(&graph)?,
        other => {
            eprintln!("Unknown matrix: {other}");
            eprintln!("Available: adjacency, laplacian");
            return Err("Unknown matrix".into());
        }
    };

    println!(
        "{matrix} spectrum ({} vertices, {} edges):",
        graph.vertex_count(),
        graph.edge_count()
    );
    for value in values {
        println!("  {value:.6}");
    }
    Ok(())
}

/// Print the integer encoding of a graph.
pub fn encode(source: &GraphSource<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(source)?;
    let number = graph_number(&graph)?;
    println!(
        "Graph number: {number} ({} vertices, {} edges)",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Validate an input file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Strut Validator");
    println!("───────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating params: {path}");
        let content = std::fs::read_to_string(path)?;
        let params: AnalysisParams = toml::from_str(&content)?;
        validate_params(&params)?;
        println!(
            "✅ Params are valid (dimension {}, trials {}).",
            params.dimension, params.trials
        );
    } else if path.ends_with(".json") {
        println!("Validating input: {path}");
        let content = std::fs::read_to_string(path)?;
        let input: AnalysisInput = serde_json::from_str(&content)?;
        match validate_input(&input) {
            Ok(()) => println!(
                "✅ Input is valid ({} vertices, {} edges).",
                input.graph.vertex_count,
                input.graph.edges.len()
            ),
            Err(e) => println!("❌ Validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .json (analysis input) or .toml (params).");
    }

    Ok(())
}
