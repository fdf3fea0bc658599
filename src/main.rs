use std::{path::PathBuf, sync::Arc};

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use canteen::{
    config::Config,
    error::ConfigError,
    screens::{render_cart, render_menu, render_orders, render_profile, OrdersTab},
    simulation, Catalog, CategoryFilter, Error, Notice, Session,
};


/// College canteen ordering in the terminal.
#[derive(Parser, Debug)]
#[command(name = "canteen")]
#[command(about = "Browse the canteen menu, fill a cart and follow orders")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the menu, optionally searched and filtered
    Menu {
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category chip, e.g. "Beverages" or "All"
        #[arg(short = 'k', long, default_value = "All")]
        category: String,
    },
    /// Add items by id, show the cart and optionally check out
    Cart {
        /// Menu item ids, one unit per occurrence
        items: Vec<String>,
        #[arg(long)]
        checkout: bool,
    },
    /// Show active orders or the order history
    Orders {
        #[arg(long)]
        history: bool,
    },
    Profile,
    /// Run a lunch rush through the kitchen
    Simulate {
        #[arg(long)]
        customers: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Redraw the kitchen board while it runs
        #[arg(long)]
        live: bool,
    },
}


fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("canteen=debug,info")
        } else {
            EnvFilter::new("canteen=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}


#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut config = load_config(args.config.as_ref())?;
    let mut session = Session::start(Arc::new(Catalog::canteen()), config.cart);

    match args.command {
        Command::Menu { query, category } => {
            let selected = CategoryFilter::parse(&category)
                .ok_or_else(|| Error::UnknownCategory(category.clone()))?;
            println!("{}", render_menu(session.catalog(), &query, selected));
        }
        Command::Cart { items, checkout } => {
            for id in &items {
                println!("{}", session.add_to_cart(id));
            }
            println!("\n{}", render_cart(&session.cart));
            if checkout {
                println!("\n{}", session.review());
                let order = session.checkout(Local::now().time())?;
                println!(
                    "{}",
                    Notice::OrderPlaced {
                        order_id: order.id,
                        total: order.total,
                    }
                );
                println!("\n{}", render_orders(&session.ledger, OrdersTab::Active));
            }
        }
        Command::Orders { history } => {
            let tab = if history { OrdersTab::History } else { OrdersTab::Active };
            println!("{}", render_orders(&session.ledger, tab));
        }
        Command::Profile => {
            println!("{}", render_profile(session.profile(), session.stats()));
        }
        Command::Simulate { customers, seed, live } => {
            if let Some(customers) = customers {
                config.simulation.customers = customers;
            }
            if let Some(seed) = seed {
                config.simulation.seed = seed;
            }

            let report = simulation::run(&config, live).await?;
            session = report.session;

            println!(
                "\n{} orders placed, {} items prepared",
                report.placed.len(),
                report.prepared_items
            );
            for notice in report
                .notices
                .iter()
                .filter(|n| !matches!(n, Notice::ItemAdded { .. }))
            {
                println!("  {notice}");
            }
            println!("\n{}", render_orders(&session.ledger, OrdersTab::History));
        }
    }

    Ok(())
}
