use std::path::Path;
use std::process;

use kalido::toplevel;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.get(0).map(|s| s.as_str()).unwrap_or("kalido");
        eprintln!("Usage: {} <input_file>", program);
        process::exit(1);
    }

    if let Err(e) = toplevel::run(Path::new(&args[1])) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
