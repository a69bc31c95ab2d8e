fn main() {
    if let Err(err) = staylog::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
