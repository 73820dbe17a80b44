pub use error::Error;
mod admob;
mod conf;
mod error;
mod report;
use crate::admob::AdMobClient;
use crate::conf::Conf;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let conf = Conf::from_env()?;
    let client = AdMobClient::new(&conf.access_token);

    report::service::run(&client, &conf).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    }
}
