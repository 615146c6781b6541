use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use parrot::{Flock, Parrot, Result};

fn print_flock(flock: &Flock) {
    for parrot in flock {
        println!("{}", parrot);
    }
    if let Some(fastest) = flock.fastest() {
        println!("Fastest: {} at {}", fastest.variant(), fastest.speed());
    }
}

fn json_flock() -> Result<()> {
    let json_string = r#"
        {
            "parrots": [
                { "variant": "european" },
                { "variant": "african", "number_of_coconuts": 1 },
                { "variant": "african", "number_of_coconuts": 2 },
                { "variant": "norwegian_blue", "voltage": 1.5 },
                { "variant": "norwegian_blue", "voltage": 3.0, "is_nailed": true },
                { "variant": "norwegian_blue", "voltage": 0.0 }
            ]
        }"#;

    let flock = Flock::from_json_str(json_string)?;
    print_flock(&flock);

    let serialized = flock.to_json_string()?;
    println!("serialized = {}", serialized);
    Ok(())
}

fn cbor_flock() -> Result<()> {
    let mut rng = rand::thread_rng();
    let flock = Flock::random(&mut rng, 5);

    let filename = std::env::temp_dir().join("flock.cbor");
    flock.write_cbor(&filename)?;

    let flock_from_cbor = Flock::read_cbor(&filename)?;
    print_flock(&flock_from_cbor);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("{}", Parrot::european());

    if let Err(err) = json_flock().and_then(|_| cbor_flock()) {
        error!(%err, "flock demo failed");
        process::exit(1);
    }
}
