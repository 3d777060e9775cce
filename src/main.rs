use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keittio::menu::{self, KitchenMenu, MenuDay};
use keittio::{
    load_catalog, rank_kitchens, Customer, Favorite, Favorites, JamixClient, SearchResult,
};

mod cli;

use cli::display;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = match &cli.base_url {
        Some(url) => JamixClient::with_base_url(url),
        None => JamixClient::new(),
    };

    match &cli.command {
        Commands::Search { query, limit, json } => {
            let customers = load_customers(&cli, &client).await?;
            let results = rank_kitchens(&customers, query, *limit);
            if *json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }

        Commands::Menu {
            customer_id,
            kitchen_id,
            date,
            ingredients,
        } => {
            let menus = client
                .fetch_menu(customer_id, *kitchen_id)
                .await
                .context("fetching kitchen menu")?;
            print_menu(&menus, *date, *ingredients);
        }

        Commands::Today {
            customer_id,
            kitchen_id,
        } => {
            let menus = client
                .fetch_menu(customer_id, *kitchen_id)
                .await
                .context("fetching kitchen menu")?;
            let today = chrono::Local::now().date_naive();
            let summary = menus
                .first()
                .and_then(|kitchen| menu::todays_summary(&kitchen.menu_types, today))
                .unwrap_or_else(|| "Ei ruokaa".to_string());
            println!("Tänään ruokana: {}", summary);
        }

        Commands::Star { query } => {
            let customers = load_customers(&cli, &client).await?;
            let results = rank_kitchens(&customers, query, 1);
            let Some(top) = results.first() else {
                bail!("no kitchen matched '{}'", query);
            };

            let mut favorites = Favorites::load(&cli.favorites_file)?;
            let starred = favorites.star(Favorite {
                customer_id: top.customer_id.clone(),
                kitchen_id: top.kitchen_id,
                kitchen_name: top.kitchen_name.clone(),
            });
            if starred {
                favorites.save()?;
                println!("Starred {} ({})", top.kitchen_name, top.kitchen_id);
            } else {
                println!("{} is already starred", top.kitchen_name);
            }
        }

        Commands::Unstar { kitchen_id } => {
            let mut favorites = Favorites::load(&cli.favorites_file)?;
            match favorites.unstar(*kitchen_id) {
                Some(removed) => {
                    favorites.save()?;
                    println!("Removed {}", removed.kitchen_name);
                }
                None => bail!(
                    "kitchen {} is not in {}",
                    kitchen_id,
                    cli.favorites_file.display()
                ),
            }
        }

        Commands::Favorites => {
            let favorites = Favorites::load(&cli.favorites_file)?;
            if favorites.is_empty() {
                println!("No starred kitchens yet. Try `keittio star <query>`.");
            }
            for favorite in favorites.iter() {
                println!(
                    "{:>10}  {}  {}",
                    favorite.kitchen_id,
                    favorite.kitchen_name,
                    display::paint(
                        display::DIM,
                        &format!("(customer {})", favorite.customer_id)
                    )
                );
            }
        }
    }

    Ok(())
}

/// Catalog from `--catalog FILE` (or stdin via `-`), else the live service.
async fn load_customers(cli: &Cli, client: &JamixClient) -> Result<Vec<Customer>> {
    match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("reading catalog from {}", path.display())),
        None => client
            .fetch_customers()
            .await
            .context("fetching kitchen catalog"),
    }
}

fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("Ei tuloksia.");
        return;
    }

    for result in results {
        println!(
            "{}  {}  {}  {}",
            display::score_value(result.match_score),
            display::match_type_label(result.match_type),
            display::paint(display::BOLD, &result.kitchen_name),
            display::paint(
                display::DIM,
                &format!("({}/{})", result.customer_id, result.kitchen_id)
            )
        );
        if !result.info.is_empty() {
            println!("              {}", display::paint(display::GRAY, &result.info));
        }
    }
}

fn print_menu(menus: &[KitchenMenu], date: Option<u32>, ingredients: bool) {
    let Some(kitchen) = menus.first() else {
        println!("Ei ruokalistaa.");
        return;
    };

    println!("{}", display::paint(display::BOLD, &kitchen.kitchen_name));
    if !kitchen.info.is_empty() {
        println!("{}", display::paint(display::GRAY, &kitchen.info));
    }

    let days = menu::menu_days(&kitchen.menu_types);
    let today = chrono::Local::now().date_naive();
    let selected: Vec<&MenuDay> = match date {
        Some(wanted) => days.iter().filter(|day| day.date == wanted).collect(),
        None => menu::available_days(days, today),
    };

    if selected.is_empty() {
        println!("\nEi ruokaa.");
        return;
    }

    for day in selected {
        println!();
        println!(
            "{}",
            display::paint(display::CYAN, &menu::format_menu_date(day.date))
        );
        for option in &day.meal_options {
            if !option.name.is_empty() {
                println!("  {}", display::paint(display::BOLD, &option.name));
            }
            for item in &option.menu_items {
                if item.portion_size > 0.0 {
                    println!("    {} - {}g", item.name, item.portion_size);
                } else {
                    println!("    {}", item.name);
                }
                if ingredients && !item.ingredients.is_empty() {
                    println!(
                        "      {}",
                        display::paint(display::DIM, &item.ingredients)
                    );
                }
            }
        }
    }
}
