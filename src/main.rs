use std::env;
use std::io::{self, BufRead, Write};

use world_cookbook::{render_results, Dispatcher, LookupConfig, MealDbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LookupConfig::load()?;
    let client = MealDbClient::from_config(&config)?;
    let mut dispatcher = Dispatcher::new(client);

    // One-shot mode: query given on the command line
    let args: Vec<String> = env::args().collect();
    if let Some(query) = args.get(1) {
        let results = dispatcher.search(query).await;
        print!("{}", render_results(results));
        return Ok(());
    }

    // Interactive mode: each submitted line is one search
    let stdin = io::stdin();
    loop {
        print!("Search for a dish: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query == "quit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        println!("Loading recipes...");
        let results = dispatcher.search(query).await;
        print!("{}", render_results(results));
    }

    Ok(())
}
