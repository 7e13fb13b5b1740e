// ============================================================================
// Basic Usage Example
// ============================================================================

use bigfraction::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== BigFraction Example ===\n");

    // Floating point would print 0.30000000000000004 here
    let sum = Fraction::from_f64(0.1)?.checked_add(0.2)?;
    println!("0.1 + 0.2 = {} (equals 0.3: {})", sum, sum.equals("0.3")?);

    // Exact division, rendered in several modes
    let third = Fraction::new(1, 3)?;
    println!("\n1/3 rendered at 5 places:");
    for mode in RoundingMode::ALL {
        println!("  {:<16} {}", mode, third.negate().to_fixed(5, mode, true));
    }

    // Large values keep every digit
    let big = Fraction::parse("12345678901234567890.12345678901234567890")?;
    let doubled = big.checked_mul(2)?;
    println!("\nDoubled: {}", doubled.to_fixed(20, RoundingMode::RoundDown, false));
    println!("Significant: {}", doubled.to_precision(8, RoundingMode::RoundHalfUp)?);
    println!("Exponential: {}", doubled.to_exponential(4, RoundingMode::RoundHalfUp, true));

    // Repeating decimals
    for (n, d) in [(1, 7), (1, 6), (5, 12)] {
        let x = Fraction::new(n, d)?;
        println!("{n}/{d} = {}", x.decimal_expansion(64));
    }

    // Formatted display through a render config
    let config = RenderConfig::currency().with_format(FormatOptions::default().with_prefix("$"));
    config.validate()?;
    let price = Fraction::parse("-1234567.885")?;
    println!("\nCurrency: {}", price.to_format_with(&config));

    // Token amounts
    println!("\n=== Amounts ===");
    let usdc = Asset::new("USDC", 6);
    let balance = Amount::from_raw(250_000_000, usdc.clone());
    let share = balance.checked_div(7)?;
    println!("Balance:   {}", balance);
    println!("1/7 share: {}", share.to_display(RoundingMode::RoundDown));
    println!("Raw units: {}", share.raw_amount());

    let fee = Percentage::from_ratio("0.0025")?;
    let charged = Amount::new(fee.of(balance.value())?, usdc);
    println!("Fee {}: {}", fee, charged);

    // Mixing units is rejected
    let eth = Amount::parse("1", Asset::new("ETH", 18))?;
    if let Err(err) = balance.checked_add(&eth) {
        println!("\nRejected: {err}");
    }

    Ok(())
}
