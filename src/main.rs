use toromaze::{
    MazeConfig, Topology,
    generators::{DEFAULT_LOOP_COUNT, Generator},
    render::Canvas,
    solvers::{Solver, solve_maze},
};

/// Reads one trimmed line from stdin.
fn prompt(message: &str) -> std::io::Result<String> {
    println!("{message}");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> std::io::Result<()> {
    let file_appender = tracing_appender::rolling::never(".", "toromaze.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let input = prompt("Enter maze dimensions (width depth). Maximum size is 255x255:")?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and depth.");
        return Ok(());
    }

    let (width, depth) = (dims[0] as u16, dims[1] as u16);
    if width == 0 || depth == 0 {
        eprintln!("Width and depth must be at least 1.");
        return Ok(());
    }

    // Let user select the topology
    let topology = match prompt(&format!(
        "Select topology:\n1. {}\n2. {}",
        Topology::Torus,
        Topology::Flat
    ))?
    .as_str()
    {
        "1" => Topology::Torus,
        "2" => Topology::Flat,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    // Let user select the algorithm
    let generator = match prompt(&format!(
        "Select maze generation algorithm:\n1. {}\n2. {}",
        Generator::RecurBacktrack,
        Generator::Dfs
    ))?
    .as_str()
    {
        "1" => Generator::RecurBacktrack,
        "2" => Generator::Dfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let seed = prompt("Enter a seed (leave empty for a random maze):")?;
    let seed = match seed.as_str() {
        "" => None,
        s => match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("The seed must be a non-negative integer.");
                return Ok(());
            }
        },
    };

    let loops = prompt(&format!(
        "Number of confounding loops (leave empty for {DEFAULT_LOOP_COUNT}):"
    ))?;
    let loop_count = match loops.as_str() {
        "" => DEFAULT_LOOP_COUNT,
        s => match s.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                eprintln!("The loop count must be a non-negative integer.");
                return Ok(());
            }
        },
    };

    let config = MazeConfig::default()
        .with_size(width, depth)
        .with_topology(topology)
        .with_generator(generator)
        .with_loops(loop_count);
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };

    let maze = match config.build() {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let solution = solve_maze(&maze, Solver::Dfs);
    Canvas::new(&maze, solution.as_deref()).write_to(&mut std::io::stdout())?;

    match solution {
        Some(path) => println!("Maze solved! Goal reached in {} steps.", path.len()),
        None => println!("No path found to the goal."),
    }
    println!("{} passages, {} walls.", maze.links().len(), maze.walls().len());
    Ok(())
}
