//! Command-line price calculator.
//!
//! Runs the same calculations as the HTTP service, with the same
//! environment-based configuration.
//!
//! # Usage
//!
//! ```bash
//! # Market estimate
//! cargo run --bin quote -- estimate --location center --size-sqm 80 --floor 3 --building-age 5
//!
//! # Target price
//! cargo run --bin quote -- target --apartment-area 100 --balcony-area 10 --parking-spots 1 \
//!     --base-price-per-sqm 20000 --current-price-per-sqm 30000
//!
//! # List locations and weights
//! cargo run --bin quote -- locations
//!
//! # Answer prompts instead of passing flags
//! cargo run --bin quote -- interactive
//! ```

use target_price::application::services::PricingService;
use target_price::config;
use target_price::domain::entities::{PriceRequest, TargetPriceRequest};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

/// Apartment price calculator.
#[derive(Parser)]
#[command(name = "quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Estimate the market price with a breakdown
    Estimate {
        /// Location code or name (e.g. "center", "Tel Aviv")
        #[arg(short, long)]
        location: String,

        #[arg(short, long)]
        size_sqm: Decimal,

        #[arg(short, long, allow_negative_numbers = true)]
        floor: i32,

        #[arg(short, long)]
        building_age: Decimal,

        /// Condition multiplier, 1.0 is average
        #[arg(short, long, default_value = "1.0")]
        condition_factor: Decimal,

        /// Fractional market correction, e.g. 0.05
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        market_adjustment: Decimal,
    },

    /// Compute the weighted-area target price
    Target {
        #[arg(long)]
        apartment_area: Decimal,

        #[arg(long, default_value = "0")]
        balcony_area: Decimal,

        #[arg(long, default_value = "0")]
        garden_area: Decimal,

        #[arg(long, default_value_t = 0)]
        parking_spots: u32,

        #[arg(long)]
        base_price_per_sqm: Decimal,

        #[arg(long)]
        current_price_per_sqm: Decimal,
    },

    /// List known locations and their weights
    Locations,

    /// Prompt for the estimate inputs
    Interactive,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    let service = config.pricing_service();

    match cli.command {
        Commands::Estimate {
            location,
            size_sqm,
            floor,
            building_age,
            condition_factor,
            market_adjustment,
        } => print_estimate(
            &service,
            &PriceRequest {
                location,
                size_sqm,
                floor,
                building_age,
                condition_factor,
                market_adjustment,
            },
        )?,
        Commands::Target {
            apartment_area,
            balcony_area,
            garden_area,
            parking_spots,
            base_price_per_sqm,
            current_price_per_sqm,
        } => print_target(
            &service,
            &TargetPriceRequest {
                apartment_area,
                balcony_area,
                garden_area,
                parking_spots,
                base_price_per_sqm,
                current_price_per_sqm,
            },
        )?,
        Commands::Locations => print_locations(&service),
        Commands::Interactive => interactive(&service)?,
    }

    Ok(())
}

/// Computes and prints a market estimate.
fn print_estimate(service: &PricingService, request: &PriceRequest) -> Result<()> {
    let result = service.estimate(request)?;

    println!("{}", "Market estimate".bright_blue().bold());
    println!(
        "  Location: {} (weight {})",
        result.location.cyan(),
        result.location_weight
    );
    println!();

    for component in &result.components {
        println!(
            "  {:<20} {}",
            component.label,
            colorize(component.value, format_amount(component.value))
        );
    }
    println!("  {}", "-".repeat(36).dimmed());
    println!(
        "  {:<20} {}",
        "total".bold(),
        format_amount(result.total_price).bright_green().bold()
    );

    Ok(())
}

/// Computes and prints a target price.
fn print_target(service: &PricingService, request: &TargetPriceRequest) -> Result<()> {
    let result = service.target_price(request)?;

    println!("{}", "Target price".bright_blue().bold());
    println!();
    for component in &result.area_components {
        println!("  {:<22} {} sqm", component.label, component.value);
    }
    println!("  {:<22} {} sqm", "weighted area".bold(), result.weighted_area);
    println!();
    println!(
        "  {:<22} {}",
        "base total",
        format_amount(result.base_total_price)
    );
    println!(
        "  {:<22} {}",
        "current total",
        format_amount(result.current_total_price)
    );
    println!(
        "  {:<22} {}",
        "discounted",
        format_amount(result.discounted_price)
    );
    println!(
        "  {:<22} {}",
        "difference",
        format_amount(result.price_difference)
    );
    if result.max_difference_exceeded {
        println!("  {}", "Maximum difference exceeded, price capped".yellow());
    }
    println!("  {}", "-".repeat(38).dimmed());
    println!(
        "  {:<22} {}",
        "final price".bold(),
        format_amount(result.final_price).bright_green().bold()
    );
    println!("  {:<22} {}", "savings", format_amount(result.savings));

    Ok(())
}

/// Prints the location table.
fn print_locations(service: &PricingService) {
    println!("{}", "Locations".bright_blue().bold());
    for rate in service.locations() {
        println!("  {:<12} {:<12} x{}", rate.code.cyan(), rate.label, rate.weight);
    }

    let fallback = service.fallback_location();
    println!(
        "  {:<12} {:<12} x{} {}",
        fallback.code.dimmed(),
        fallback.label,
        fallback.weight,
        "(any other location)".dimmed()
    );
}

/// Prompts for each estimate input, then prints the estimate.
fn interactive(service: &PricingService) -> Result<()> {
    let codes: Vec<&str> = service.locations().iter().map(|r| r.code).collect();
    let selected = Select::new()
        .with_prompt("Location")
        .items(&codes[..])
        .default(0)
        .interact()?;

    let size_sqm: Decimal = Input::new()
        .with_prompt("Size (sqm)")
        .interact_text()?;
    let floor: i32 = Input::new()
        .with_prompt("Floor")
        .default(1)
        .interact_text()?;
    let building_age: Decimal = Input::new()
        .with_prompt("Building age (years)")
        .default(Decimal::ZERO)
        .interact_text()?;
    let condition_factor: Decimal = Input::new()
        .with_prompt("Condition factor")
        .default(Decimal::ONE)
        .interact_text()?;
    let market_adjustment: Decimal = Input::new()
        .with_prompt("Market adjustment")
        .default(Decimal::ZERO)
        .interact_text()?;

    println!();
    print_estimate(
        service,
        &PriceRequest {
            location: codes[selected].to_string(),
            size_sqm,
            floor,
            building_age,
            condition_factor,
            market_adjustment,
        },
    )
}

/// Formats an amount in whole shekels with thousands separators.
fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped} ILS")
}

fn colorize(value: Decimal, text: String) -> ColoredString {
    if value.is_sign_negative() && !value.is_zero() {
        text.red()
    } else {
        text.normal()
    }
}
