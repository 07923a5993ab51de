fn main() {
    let outcome = yamlresume::cli::run();
    std::process::exit(outcome.code());
}
