//! Prints the OpenAPI document for the wellness API.
//!
//! Usage: `cargo run --bin generate_openapi > openapi.json`

use utoipa::OpenApi;
use wellness::server::openapi::ApiDoc;

fn main() {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(spec) => println!("{spec}"),
        Err(error) => {
            eprintln!("failed to serialize OpenAPI spec: {error}");
            std::process::exit(1);
        }
    }
}
