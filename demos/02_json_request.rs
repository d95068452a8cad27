/// json request - the request/response boundary
use installment_rate_rs::evaluate_json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let requests = [
        r#"{"principal": "1000", "periods": 12, "mode": "by_installment", "value": "95"}"#,
        r#"{"principal": 1000, "periods": 12, "mode": "by_interest_rate", "value": 14, "periods_per_year": 52}"#,
        r#"{"principal": 1000, "periods": 10, "mode": "by_installment", "value": 100}"#,
        r#"{"principal": 1, "periods": 1, "value": 1000000}"#,
        r#"{"principal": "lots", "periods": 12, "value": 95}"#,
    ];

    for request in requests {
        println!("request:  {request}");
        println!("response: {}\n", evaluate_json(request));
    }
}
