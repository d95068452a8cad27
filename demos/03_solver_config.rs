/// solver config - tuning the search and inspecting how it went
use installment_rate_rs::{LoanInputs, RateSolver, SolverConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("installment_rate_rs=debug"))
        .init();

    let inputs = LoanInputs::new(25_000.0, 60, 520.0);

    let default_solver = RateSolver::default();
    let (result, diagnostics) = default_solver.calculate_detailed(&inputs)?;
    println!("default: {result}");
    println!("         {diagnostics:?}\n");

    // a coarse solver with a small budget falls back to the bracket midpoint
    let config = SolverConfig::from_json(r#"{"max_iterations": 8}"#)?;
    let coarse = RateSolver::new(config)?;
    let (result, diagnostics) = coarse.calculate_detailed(&inputs)?;
    println!("coarse:  {result}");
    println!("         {diagnostics:?}\n");

    // a low ceiling refuses rates above it
    let strict = RateSolver::new(
        SolverConfig::default()
            .with_initial_upper_bound(0.125)
            .with_rate_ceiling(0.5),
    )?;
    match strict.solve(100.0, 1, 500.0, 12) {
        Ok(result) => println!("strict:  {result}"),
        Err(e) => println!("strict:  {e}"),
    }

    Ok(())
}
