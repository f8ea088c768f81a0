//! End-to-end walkthrough: signed print, token minting, token-mode print.
//!
//! ```shell
//! RUST_LOG=debug cargo run --example print
//! ```

use sonma_print::Client;
use sonma_print::Credential;

const MESSAGE: &str = r#"{"type":"text","content":"hello from rust"}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = Client::new(Credential::new("123456789", "123456789"));

    // Sign with the access key pair.
    let result = client.print(123456789, MESSAGE, Some(10086), None).await?;
    log::info!("print result: {}", result["message"]);

    // Mint a token on the server side for clients without the secret key.
    let token = client.create_token("*", 3600).await?;
    log::info!("issued token: {token}");

    // Authenticate with the token instead.
    let result = client
        .print(123456789, MESSAGE, Some(10086), Some(&token))
        .await?;
    log::info!("print result: {}", result["message"]);

    Ok(())
}
