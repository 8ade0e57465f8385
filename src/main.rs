use archive_mover::{archive_mover_main, MoverCli};
use clap::Parser;
use log::error;
use std::process::exit;

#[tokio::main]
async fn main() {
    println!(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION")
    ));
    dotenv::dotenv().ok();
    let args = MoverCli::parse();
    env_logger::builder()
        .filter_level(args.log_level())
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .init();
    match archive_mover_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    };
}
