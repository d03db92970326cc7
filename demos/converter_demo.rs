//! End-to-end walkthrough of the conversion engine
//!
//! Run with: cargo run --example converter_demo

use omnicalc::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Omnicalc Demo ===\n");

    // Currency conversion against an offline rate table. Swap in
    // ExchangeHostProvider::new()? for live rates.
    let mut provider = InMemoryRateProvider::new();
    provider.add_rate(Currency::USD, Currency::INR, 83.10)?;
    provider.add_rate(Currency::EUR, Currency::USD, 1.09)?;

    let converter = CurrencyConverter::new(Arc::new(provider));

    let result = converter.convert(100.0, Currency::USD, Currency::INR).await?;
    println!("1. Currency: {}", result);

    let quick = converter.quick_convert(Currency::EUR, Currency::USD).await?;
    println!("   Quick:    {}", quick);

    // Unit conversion across families.
    println!("\n2. Units:");
    let feet = units::convert(UnitFamily::Length, "m", "ft", 10.0)?;
    println!("   10 m = {} ft", feet);
    let fahrenheit = units::convert(UnitFamily::Temperature, "C", "F", 37.0)?;
    println!("   37 C = {} F", fahrenheit);

    // Financial calculators.
    println!("\n3. Finance:");
    let emi = compute_emi(&LoanTerms::new(100_000.0, 10.0, 12))?;
    println!(
        "   EMI: {:.2}/month, total interest {:.2}, total payment {:.2}",
        emi.installment, emi.total_interest, emi.total_payment
    );

    let fv = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 1))?;
    println!("   SIP future value: {:.2}", fv);

    println!("\n(Set RUST_LOG=debug for request logs)");
    Ok(())
}
