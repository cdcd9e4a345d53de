//! Prints a bearer token for a user id, signed with the configured secret.
//!
//! Usage: `issue-token <user_id>`

use anyhow::Context;
use domain::Identity;
use server::{auth::TokenSigner, config::Settings};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let user = std::env::args()
        .nth(1)
        .context("usage: issue-token <user_id>")?;
    let identity = Identity::new(user).map_err(|e| anyhow::anyhow!("Invalid user id: {}", e))?;

    let settings = Settings::new().context("Failed to load configuration")?;
    let signer = TokenSigner::new(&settings.security.token_secret);

    println!("{}", signer.issue(&identity));
    Ok(())
}
