/// quick start - minimal example to get started
use installment_rate_rs::solve;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1,000 borrowed, repaid as 12 monthly installments of 95
    let result = solve(1000.0, 12, 95.0, 12)?;

    println!("{result}");
    println!("periodic rate: {:.6}", result.periodic_rate);
    println!("nominal apr:   {:.6}", result.nominal_apr);
    println!("effective apr: {:.6}", result.effective_apr);

    Ok(())
}
