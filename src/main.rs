fn main() {
    if let Err(e) = slp_codec::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
