//! URN Example
//!
//! This example demonstrates building, parsing and serializing URNs.
//!
//! Run with: cargo run --example urn_demo

use urn::{Error, Urn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a URN from its parts
    let urn = Urn::new("newtonworld", "user:test_-user")?;
    println!("Built: {}", urn);

    // Parse a URN from text
    let parsed = Urn::parse("urn:newtonworld228:lol%AC_45:rRR")?;
    println!("Parsed: nid={} nss={}\n", parsed.nid(), parsed.nss());

    // Invalid inputs come back as typed errors
    for raw in ["", "irn:nid456:nss", "urn:$sdf:nss", "urn:isbn:?kek"] {
        match Urn::parse(raw) {
            Ok(urn) => println!("  {:?} -> {}", raw, urn),
            Err(Error::Format(e)) => println!("  {:?} -> format error: {}", raw, e),
            Err(e) => println!("  {:?} -> component error: {}", raw, e),
        }
    }

    // Parsing skips the NID length and prefix rules unless asked
    let reserved = "urn:urn-nid:abc";
    println!("\nparse({}) ok: {}", reserved, Urn::parse(reserved).is_ok());
    println!("parse_strict({}) ok: {}", reserved, Urn::parse_strict(reserved).is_ok());

    // JSON
    println!("\nJSON: {}", serde_json::to_string(&urn)?);

    Ok(())
}
