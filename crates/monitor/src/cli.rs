use std::path::PathBuf;

pub struct Args {
    pub config_path: PathBuf,
    pub once: bool,
}

pub fn parse() -> Args {
    let mut args = std::env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut once = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("autoshield-monitor {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Usage: autoshield-monitor [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --config <PATH>  Configuration file path");
                println!("      --once           Process the current backlog and exit");
                println!("  -V, --version        Print version");
                println!("  -h, --help           Print help");
                std::process::exit(0);
            }
            "--once" => once = true,
            "--config" | "-c" => {
                let path = args.next().unwrap_or_else(|| {
                    eprintln!("error: --config requires a path argument");
                    std::process::exit(1);
                });
                config_path = Some(PathBuf::from(path));
            }
            other => {
                eprintln!("error: unknown argument '{other}'");
                std::process::exit(1);
            }
        }
    }

    match config_path {
        Some(config_path) => Args { config_path, once },
        None => {
            eprintln!("error: --config <path> is required");
            std::process::exit(1);
        }
    }
}
