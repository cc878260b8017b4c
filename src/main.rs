use clap::Parser;
use colored::Colorize;

use azure_move_validator::cli::Args;

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Args::parse();
    let start_time = std::time::Instant::now();

    match azure_move_validator::run(&args).await {
        Ok(report_path) => {
            println!(
                "{}",
                format!("\n*** Output file written to: {} ***", report_path.display()).yellow()
            );
            if args.debug {
                println!("Elapsed time: {:.2} seconds", start_time.elapsed().as_secs_f64());
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {}", "ERROR:".on_red(), e.to_string().red());
            if args.debug {
                println!("Elapsed time: {:.2} seconds", start_time.elapsed().as_secs_f64());
            }
            std::process::exit(1);
        }
    }
}
