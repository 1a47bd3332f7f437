use std::env;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::config::{Config, Format, GoalCheck};
use eight_puzzle_solver::generator;
use eight_puzzle_solver::solution_formatter::SolutionFormatter;
use eight_puzzle_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the shortest solution of a 3x3 sliding puzzle")
        .arg(
            Arg::with_name("board")
                .short("b")
                .long("board")
                .takes_value(true)
                .value_name("BOARD")
                .help("board given directly, e.g. 123456780 (0 or _ is the blank)"),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("solve a random board"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .requires("random")
                .help("seed for --random"),
        )
        .arg(
            Arg::with_name("solvable")
                .long("solvable")
                .requires("random")
                .help("only generate boards that can be solved"),
        )
        .arg(Arg::with_name("file").help("file with the board"))
        .group(
            ArgGroup::with_name("input")
                .args(&["board", "random", "file"])
                .required(true),
        )
        .arg(
            Arg::with_name("grid")
                .short("g")
                .long("grid")
                .help("print boards as a grid (default)"),
        )
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print boards on one line"),
        )
        .group(ArgGroup::with_name("format").args(&["grid", "compact"]))
        .arg(
            Arg::with_name("expand")
                .short("e")
                .long("goal-on-expand")
                .help("test for the goal when a board is expanded instead of when it's generated"),
        )
        .arg(
            Arg::with_name("parity")
                .short("p")
                .long("parity")
                .help("reject unsolvable boards before searching"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("BOARDS")
                .help("give up after expanding this many boards"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print progress on each new depth"),
        )
        .get_matches();

    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Grid
    };
    let config = Config {
        goal_check: if matches.is_present("expand") {
            GoalCheck::Expand
        } else {
            GoalCheck::Generate
        },
        parity_check: matches.is_present("parity"),
        max_expanded: matches.value_of("limit").map(|limit| {
            limit.parse::<usize>().unwrap_or_else(|err| {
                eprintln!("Invalid limit {}: {}", limit, err);
                process::exit(1);
            })
        }),
        print_status: matches.is_present("status"),
    };
    debug!("{:?}", config);

    let (name, board) = load_board(&matches);

    println!("Solving {}...", name);
    let solution = board.solve(&config).unwrap_or_else(|err| {
        eprintln!("Failed to solve: {}", err);
        process::exit(2);
    });
    if matches.is_present("stats") {
        println!("{}", solution.stats);
    }
    match solution.boards {
        Some(ref boards) => {
            println!("Found solution:");
            print!("{}", SolutionFormatter::new(boards, format));
        }
        None => println!("No solution"),
    }
}

fn load_board(matches: &ArgMatches<'_>) -> (String, Board) {
    if let Some(text) = matches.value_of("board") {
        let board = text.parse::<Board>().unwrap_or_else(|err| {
            eprintln!("Failed to parse: {}", err);
            process::exit(1);
        });
        (text.to_string(), board)
    } else if matches.is_present("random") {
        let mut rng = match matches.value_of("seed") {
            Some(seed) => StdRng::seed_from_u64(seed.parse::<u64>().unwrap_or_else(|err| {
                eprintln!("Invalid seed {}: {}", seed, err);
                process::exit(1);
            })),
            None => StdRng::from_entropy(),
        };
        let board = if matches.is_present("solvable") {
            generator::random_solvable_board(&mut rng)
        } else {
            generator::random_board(&mut rng)
        };
        (format!("random board {:?}", board), board)
    } else {
        let path = matches.value_of("file").unwrap_or_else(|| {
            eprintln!("No board given");
            process::exit(1);
        });
        let board = path.load_board().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap_or_default();
            eprintln!(
                "Can't load board {} in {}: {}",
                path,
                current_dir.display(),
                err
            );
            process::exit(1);
        });
        (path.to_string(), board)
    }
}
