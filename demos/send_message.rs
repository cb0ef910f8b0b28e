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
    let destination = std::env::var("MESSAGEBIRD_DESTINATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MESSAGEBIRD_DESTINATION environment variable is required",
        )
    })?;
    let message = std::env::var("MESSAGEBIRD_MESSAGE")
        .unwrap_or_else(|_| "Hello from the messagebird demo.".to_owned());

    let mut client = MessageBirdClient::new(username, password);
    client.set_sender("Demo");
    client.add_destination(destination);
    client.set_test_mode(true);

    let response = client.send_message(&message)?;
    println!("response code: {}", response.response_code);
    println!("response message: {}", response.response_message);
    println!("http status: {:?}", client.http_status());

    Ok(())
}
