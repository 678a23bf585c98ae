use std::{future::Future, io::BufRead, io::Write};

use glam_forecast::{
    AppError, Config, LocationQuery, Pipeline, Recommendation, us_data,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, span, warn};
use tracing_subscriber::EnvFilter;

/// Reads requests from stdin until the user sends `exit`. Each line is either
/// `City, State`, an empty line (locate by IP), `states`, or `cities <State>`.
/// Ctrl-C cancels the request in flight, or ends the session when idle.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let pipeline = Pipeline::new(&config)?;
    let mut rng = StdRng::from_os_rng();

    span!(tracing::Level::INFO, "session").in_scope(|| {
        info!("Enter `City, State`, or an empty line to use your current location");
        info!("`states` lists states, `cities <State>` lists cities, `exit` stops");
    });

    let mut lines = spawn_stdin_reader();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = next_line(&mut lines, interrupt()).await else {
            break;
        };
        let input = line.trim();

        match input {
            "exit" => break,
            "states" => {
                info!("{}", us_data::states().collect::<Vec<_>>().join(", "));
                continue;
            }
            _ => {}
        }
        if let Some(state) = input.strip_prefix("cities ") {
            match us_data::cities_for(state) {
                Some(cities) => info!("{}", cities.join(", ")),
                None => warn!("Unknown state: {}", state.trim()),
            }
            continue;
        }

        let mut parts = input.splitn(2, ',');
        let query = LocationQuery::from_input(parts.next(), parts.next());

        match run_interruptible(&pipeline, query, &mut rng, interrupt()).await {
            Ok(recommendation) => report(&recommendation),
            Err(e) => report_error(&e),
        }
    }

    Ok(())
}

/// Resolves on the next Ctrl-C. The signal handler is installed once by tokio
/// and stays for the whole session, so each call waits for a fresh signal.
async fn interrupt() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no handler available; never report an interrupt
        std::future::pending::<()>().await;
    }
}

// stdin is blocking, so lines are read on their own thread.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Next input line, or `None` on end of input or interrupt.
async fn next_line(
    lines: &mut mpsc::Receiver<String>,
    interrupt: impl Future<Output = ()>,
) -> Option<String> {
    tokio::select! {
        biased;
        () = interrupt => {
            info!("Interrupted, exiting");
            None
        }
        line = lines.recv() => line,
    }
}

/// Runs one request; `interrupt` cancels it as a unit.
async fn run_interruptible<R: Rng + ?Sized>(
    pipeline: &Pipeline,
    query: LocationQuery,
    rng: &mut R,
    interrupt: impl Future<Output = ()>,
) -> Result<Recommendation, AppError> {
    let token = CancellationToken::new();
    let run = pipeline.run_until_cancelled(query, rng, &token);
    tokio::pin!(run);

    tokio::select! {
        result = &mut run => result,
        () = interrupt => {
            token.cancel();
            run.await
        }
    }
}

fn report(recommendation: &Recommendation) {
    let condition = &recommendation.condition;
    let location = &recommendation.location;

    span!(tracing::Level::INFO, "recommendation").in_scope(|| {
        info!(
            "Location: {}, {}",
            location.english_name, location.administrative_area.english_name
        );
        info!(
            "Date: {}  Time: {}  Timezone: UTC{} ({})",
            condition.observation_date().unwrap_or("-"),
            condition.observation_time().unwrap_or("-"),
            condition.utc_offset().unwrap_or(""),
            location.time_zone.code
        );
        info!(
            "Condition: {}  Temperature: {} Celsius  Humidity: {}%",
            condition.weather_text,
            condition.temperature_celsius(),
            condition.relative_humidity
        );

        for pick in &recommendation.picks {
            match &pick.product {
                Some(product) => {
                    info!(
                        "{}: {} by {} ({}{})",
                        pick.category,
                        product.name.trim(),
                        product.brand.as_deref().unwrap_or("unknown brand"),
                        product.price_sign.as_deref().unwrap_or("$"),
                        product.price.as_deref().unwrap_or("?")
                    );
                    if let Some(image) = &product.image_link {
                        info!("  image: {}", image);
                    }
                    if let Some(link) = &product.product_link {
                        info!("  link: {}", link);
                    }
                }
                None => info!("{}: no product matches {:?}", pick.category, pick.tag),
            }
        }
    });
}

fn report_error(e: &AppError) {
    error!("{} {}", e.user_message(), e);
}
