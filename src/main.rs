//! Demo binary: capture a still from the rear camera, or parse a saved
//! model transcript into a record.
//!
//! Usage:
//!   greentale-core              capture photo.jpg from /dev/video0
//!   greentale-core <transcript> parse a model response file, print JSON

use std::fs;

use greentale_core::{capture, Constraints, DeviceSession, V4lSource};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let record = greentale_core::parse(&text);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        None => {
            let mut session = DeviceSession::new(V4lSource::new(0), Constraints::rear());
            session.start()?;

            let photo = capture(&mut session)?;
            fs::write(&photo.file_name, &photo.bytes)?;
            println!("Wrote {} ({} bytes)", photo.file_name, photo.bytes.len());
        }
    }

    Ok(())
}
