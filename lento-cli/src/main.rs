fn main() {
    if let Err(e) = lento_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
