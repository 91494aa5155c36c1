fn main() {
    if let Err(err) = connect_chat_config::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
