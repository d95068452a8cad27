/// calculation modes - the same plan entered three different ways
use installment_rate_rs::{CalculationMode, LoanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== calculation modes ===\n");

    let forms = [
        (CalculationMode::ByInstallment, "95"),
        (CalculationMode::ByTotalInterest, "140"),
        (CalculationMode::ByInterestRate, "14"),
    ];

    for (mode, value) in forms {
        let request = LoanRequest::from_form("1000", "12", mode, value)?;
        let result = request.evaluate()?;

        println!("{mode:?} ({} = {value})", mode.value_field());
        println!("  installment: {:.2}", request.installment()?);
        println!("  {result}\n");
    }

    // bad text is reported per field
    match LoanRequest::from_form("1000", "twelve", CalculationMode::ByInstallment, "95") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
