use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("gifted - gift exchange organizer");
                println!();
                println!("Usage: gifted [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Database file path (default: .data/gifted.db)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| {
        let dir = PathBuf::from(".data");
        if !dir.exists() {
            std::fs::create_dir_all(&dir).expect("Failed to create .data directory");
        }
        dir.join("gifted.db")
    });

    gifted::cli::run(&db_path);
}
