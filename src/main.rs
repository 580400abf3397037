#[tokio::main]
async fn main() {
    if let Err(err) = command::exec().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
