use serde::Serialize;
use stationgraph::{
    DfsTraversal, Graph, Station, StationId, eulerian, ingest, is_connected,
    largest_hamiltonian_cycle, shortest_path_tree,
};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Graph(stationgraph::Error),
    Json(serde_json::Error),
    UnknownStation(StationId),
    NoStations,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::UnknownStation(id) => write!(f, "No station with id {id} in the graph"),
            CliError::NoStations => write!(f, "No stations loaded"),
        }
    }
}

impl From<stationgraph::Error> for CliError {
    fn from(value: stationgraph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    json: bool,
    pretty: bool,
    hamiltonian: bool,
    source: Option<StationId>,
    inputs: Vec<String>,
}

#[derive(Serialize)]
struct ShortestPathOut {
    source: StationId,
    tree_edges: usize,
    tree_total_distance: f64,
    path_to_southeast: Option<Vec<StationId>>,
}

#[derive(Serialize)]
struct HamiltonianOut {
    stations: usize,
    total_distance: f64,
}

#[derive(Serialize)]
struct ReportOut {
    stations: usize,
    edges: usize,
    total_distance: f64,
    connected: bool,
    eulerian: u8,
    connected_components: usize,
    traversal: Vec<StationId>,
    northwest: Option<Station>,
    southeast: Option<Station>,
    shortest_path: Option<ShortestPathOut>,
    hamiltonian: Option<HamiltonianOut>,
}

fn usage() -> &'static str {
    "stationgraph-cli\n\
\n\
USAGE:\n\
  stationgraph-cli [report] [--json] [--pretty] [--hamiltonian] [--source <station-id>] <trips.csv>...\n\
\n\
NOTES:\n\
  - Every input file is loaded into a single graph before reporting.\n\
  - The shortest-path tree is rooted at --source, or at the northwest-most station.\n\
  - --hamiltonian runs the exhaustive cycle search; it is exponential in the\n\
    station count and only sensible on small graphs.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "report" => {}
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--hamiltonian" => args.hamiltonian = true,
            "--source" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.source = Some(
                    id.parse::<StationId>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => args.inputs.push(path.to_string()),
        }
    }

    if args.inputs.is_empty() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn build_report(graph: &Graph, args: &Args) -> Result<ReportOut, CliError> {
    let connected = is_connected(graph);
    let eulerian_class = eulerian(graph);

    let start = graph
        .station_ids()
        .next()
        .expect("report requires a non-empty graph");
    let mut traversal_iter = DfsTraversal::new(graph, start);
    let traversal: Vec<StationId> = traversal_iter.by_ref().collect();
    let connected_components = traversal_iter.connected_components();

    let northwest = graph.northwest_most().map(|v| *v.station());
    let southeast = graph.southeast_most().map(|v| *v.station());

    let source = match args.source {
        Some(id) => {
            if graph.vertex(id).is_none() {
                return Err(CliError::UnknownStation(id));
            }
            id
        }
        None => {
            northwest
                .expect("non-empty graph has a northwest-most station")
                .id
        }
    };
    let shortest = shortest_path_tree(graph, source);
    let shortest_path = Some(ShortestPathOut {
        source,
        tree_edges: shortest.tree.edge_count(),
        tree_total_distance: shortest.tree.total_distance(),
        path_to_southeast: southeast.and_then(|s| shortest.path_to(s.id)),
    });

    let hamiltonian = if args.hamiltonian {
        largest_hamiltonian_cycle(graph).map(|cycle| HamiltonianOut {
            stations: cycle.size(),
            total_distance: cycle.total_distance(),
        })
    } else {
        None
    };

    Ok(ReportOut {
        stations: graph.size(),
        edges: graph.edge_count(),
        total_distance: graph.total_distance(),
        connected,
        eulerian: eulerian_class.code(),
        connected_components,
        traversal,
        northwest,
        southeast,
        shortest_path,
        hamiltonian,
    })
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn print_text(report: &ReportOut, ran_hamiltonian: bool) {
    println!("stations: {}", report.stations);
    println!("edges: {}", report.edges);
    println!("total distance: {}", report.total_distance);
    println!("connected: {}", report.connected);
    println!(
        "eulerian: {} ({})",
        report.eulerian,
        match report.eulerian {
            1 => "path",
            2 => "circuit",
            _ => "none",
        }
    );
    println!("connected components: {}", report.connected_components);

    let order: Vec<String> = report.traversal.iter().map(|id| id.to_string()).collect();
    println!("traversal: {}", order.join(" "));

    match &report.northwest {
        Some(s) => println!("northwest most station: {}", s.id),
        None => println!("northwest most station: none"),
    }
    match &report.southeast {
        Some(s) => println!("southeast most station: {}", s.id),
        None => println!("southeast most station: none"),
    }

    if let Some(sp) = &report.shortest_path {
        println!(
            "shortest-path tree from {}: {} edges, total distance {}",
            sp.source, sp.tree_edges, sp.tree_total_distance
        );
        match &sp.path_to_southeast {
            Some(path) => {
                let hops: Vec<String> = path.iter().map(|id| id.to_string()).collect();
                println!("shortest path to southeast: {}", hops.join(" "));
            }
            None => println!("shortest path to southeast: unreachable"),
        }
    }

    if ran_hamiltonian {
        match &report.hamiltonian {
            Some(h) => println!(
                "largest hamiltonian cycle: {} stations, total distance {}",
                h.stations, h.total_distance
            ),
            None => println!("largest hamiltonian cycle: none"),
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut graph = Graph::new();
    for path in &args.inputs {
        ingest::load_csv(&mut graph, path)?;
    }
    if graph.size() == 0 {
        return Err(CliError::NoStations);
    }

    let report = build_report(&graph, &args)?;
    if args.json {
        write_json(&report, args.pretty)?;
    } else {
        print_text(&report, args.hamiltonian);
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoStations) => {
            eprintln!("{}", CliError::NoStations);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
