//! Quotation CLI: runs one Items -> calculate pass against the configured
//! backend and prints the server's cost breakdown.
//!
//! Usage: `jobwork-quote <thickness_mm> <width_inch> <height_inch> <quantity>...`
//! (arguments in groups of four, one group per glass piece). With
//! `--design-pdf <order_id>` it instead downloads the design PDF of an
//! existing order to the current directory.

use std::env;
use std::fs;

use config::Config;
use dotenvy::dotenv;

use jobwork_checkout::backend::http::HttpBackend;
use jobwork_checkout::domain::checkout::CheckoutState;
use jobwork_checkout::domain::item::LineItem;
use jobwork_checkout::domain::types::{OrderId, Thickness};
use jobwork_checkout::forms::item::ItemField;
use jobwork_checkout::models::config::{ClientConfig, Credentials};
use jobwork_checkout::services::builder;
use jobwork_checkout::services::checkout::calculate_and_advance;

fn load_config() -> Option<ClientConfig> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            return None;
        }
    };

    match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => Some(client_config),
        Err(err) => {
            log::error!("Error loading client config: {err}");
            None
        }
    }
}

fn parse_items(args: &[String]) -> Result<Vec<LineItem>, String> {
    if args.is_empty() || args.len() % 4 != 0 {
        return Err("expected arguments in groups of four: <thickness_mm> <width_inch> <height_inch> <quantity>".into());
    }

    let mut items = Vec::with_capacity(args.len() / 4);
    for group in args.chunks(4) {
        let mm: u32 = group[0]
            .parse()
            .map_err(|_| format!("bad thickness: {}", group[0]))?;
        let thickness =
            Thickness::from_mm(mm).map_err(|err| format!("bad thickness: {err}"))?;
        let mut item = LineItem {
            thickness,
            ..LineItem::default()
        };
        jobwork_checkout::forms::item::apply_update(&mut item, ItemField::WidthInch, &group[1]);
        jobwork_checkout::forms::item::apply_update(&mut item, ItemField::HeightInch, &group[2]);
        jobwork_checkout::forms::item::apply_update(&mut item, ItemField::Quantity, &group[3]);
        if !item.is_complete() {
            return Err(format!("incomplete item: {group:?}"));
        }
        items.push(item);
    }
    Ok(items)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(client_config) = load_config() else {
        std::process::exit(1);
    };

    let token = match env::var("JOBWORK_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            log::error!("JOBWORK_TOKEN is not set");
            std::process::exit(1);
        }
    };

    let backend = match HttpBackend::new(&client_config, Credentials::new(token)) {
        Ok(backend) => backend,
        Err(err) => {
            log::error!("Failed to construct backend client: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--design-pdf") {
        let Some(raw_id) = args.get(1) else {
            log::error!("--design-pdf requires an order id");
            std::process::exit(1);
        };
        let order_id = match raw_id.parse::<i64>().map_err(|_| ()).and_then(|id| {
            OrderId::new(id).map_err(|_| ())
        }) {
            Ok(order_id) => order_id,
            Err(()) => {
                log::error!("bad order id: {raw_id}");
                std::process::exit(1);
            }
        };
        match jobwork_checkout::services::checkout::fetch_design_pdf(&backend, order_id) {
            Ok(bytes) => {
                let path = format!("jobwork-{order_id}-design.pdf");
                if let Err(err) = fs::write(&path, bytes) {
                    log::error!("Failed to write {path}: {err}");
                    std::process::exit(1);
                }
                log::info!("Saved {path}");
            }
            Err(err) => {
                log::error!("Download failed: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let items = match parse_items(&args) {
        Ok(items) => items,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    match builder::load_labour_rates(&backend) {
        Ok(rates) => {
            for (thickness, rate) in &rates {
                log::info!("labour rate {thickness}: {rate:.2}/sqft");
            }
        }
        Err(err) => log::warn!("Could not load labour rates: {err}"),
    }

    let mut state = CheckoutState::new();
    state.replace_items(items);

    if let Err(err) = calculate_and_advance(&mut state, &backend) {
        log::error!("Calculation failed: {err}");
        std::process::exit(1);
    }

    let cost = state.cost().expect("cost present after calculation");
    for line in &cost.lines {
        println!(
            "{} x{:<3} {:>8.2} sqft  @{:>7.2}  = {:>10.2}",
            line.thickness, line.pieces, line.area_sqft, line.labour_rate, line.labour_cost
        );
    }
    let summary = &cost.summary;
    println!("pieces:         {}", summary.total_pieces);
    println!("area:           {:.2} sqft", summary.total_sqft);
    println!("labour charges: {:.2}", summary.labour_charges);
    println!("GST:            {:.2}", summary.gst_amount);
    println!("grand total:    {:.2}", summary.grand_total);
}
