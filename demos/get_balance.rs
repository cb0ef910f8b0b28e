use std::io;

use messagebird::MessageBirdClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("MESSAGEBIRD_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MESSAGEBIRD_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("MESSAGEBIRD_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MESSAGEBIRD_PASSWORD environment variable is required",
        )
    })?;

    let mut client = MessageBirdClient::new(username, password);
    let credits = client.get_balance()?;
    println!("credits left: {credits}");

    Ok(())
}
