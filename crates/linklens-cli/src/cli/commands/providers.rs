//! `linklens providers` – list recognized providers.

use anyhow::Result;
use linklens_core::classify::PROVIDER_HOSTS;

pub fn run_providers() -> Result<()> {
    println!("{:<22} {:<6} {}", "SOURCE", "EMBED", "HOSTS");
    for (source, hosts) in PROVIDER_HOSTS {
        println!(
            "{:<22} {:<6} {}",
            source.display_name(),
            if source.supports_embedding() {
                "yes"
            } else {
                "no"
            },
            hosts.join(", ")
        );
    }
    Ok(())
}
