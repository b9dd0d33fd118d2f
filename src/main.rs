use kalshix::exchanges::kalshi::build_connector;
use kalshix::{ExchangeConfig, ExchangeInfoSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Expects KALSHI_API_KEY_ID and KALSHI_PRIVATE_KEY_PATH in the
    // environment (or a .env file).
    #[cfg(feature = "env-file")]
    let config = ExchangeConfig::from_env_file("KALSHI")?;
    #[cfg(not(feature = "env-file"))]
    let config = ExchangeConfig::from_env("KALSHI")?;

    let kalshi = build_connector(&config)?;

    match kalshi.exchange_status().await {
        Ok(status) => {
            println!(
                "exchange_active={} trading_active={}",
                status.exchange_active, status.trading_active
            );
            if let Some(resume_time) = status.exchange_estimated_resume_time {
                println!("estimated resume time: {}", resume_time);
            }
        }
        Err(e) => {
            println!("Error fetching exchange status: {}", e);
        }
    }

    match kalshi.exchange_announcements().await {
        Ok(announcements) => {
            println!("{} announcement(s)", announcements.announcements.len());
            for announcement in announcements.announcements.iter().take(5) {
                println!("[{}] {}", announcement.kind, announcement.message);
            }
        }
        Err(e) => {
            println!("Error fetching announcements: {}", e);
        }
    }

    Ok(())
}
