fn main() {
    if let Err(error) = example::run() {
        tracing::error!(%error, "demo failed");
        std::process::exit(1);
    }
}
