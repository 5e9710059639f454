use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use sqs_error_handling::types::config::{DEFAULT_RECEIVE_WAIT_SECONDS, DEFAULT_REGION};
use sqs_error_handling::{QueueClient, QueueResult, SqsConfig};

/// Queue URL used to provoke the non-existent queue error
const NON_EXISTENT_QUEUE: &str = "invalid_queue_that_doesnt_exist";

/// Runs the SQS call patterns and prints the error details SQS returns
#[derive(Debug, Parser)]
#[command(name = "sqs-example", version)]
struct Cli {
    /// Region where the example should run
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// SQS endpoint. The SDK default is used when empty
    #[arg(long, env = "SQS_ENDPOINT")]
    endpoint: Option<String>,

    /// Wait time for the receive call
    #[arg(long, env = "SQS_RECEIVE_WAIT_SECONDS", default_value_t = DEFAULT_RECEIVE_WAIT_SECONDS)]
    wait_time_seconds: i32,

    /// Prefix of the temporary queue name
    #[arg(long, default_value = "sqs-example")]
    queue_prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // JSON logs when LOG_FORMAT=json, plain text otherwise
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let cli = Cli::parse();
    let config = SqsConfig::new(cli.region, cli.endpoint)
        .with_receive_wait_time_seconds(cli.wait_time_seconds);
    info!(
        region = %config.region,
        endpoint = ?config.endpoint_url,
        "Running SQS example"
    );

    let client = QueueClient::from_config(config).await;
    info!(client_info = ?client.client_info(), "Client protocol");

    let queue_name = format!("{}-{}", cli.queue_prefix, Uuid::new_v4());
    let queue_url = client
        .create_queue(&queue_name)
        .await
        .context("Failed to create queue")?
        .queue_url()
        .context("CreateQueue returned no queue URL")?
        .to_string();
    info!(%queue_url, "Queue created");

    let result = run_scenarios(&client, &queue_name, &queue_url).await;

    client
        .delete_queue(&queue_url)
        .await
        .context("Failed to delete queue")?;
    info!(%queue_url, "Queue deleted");

    result
}

async fn run_scenarios(
    client: &QueueClient,
    queue_name: &str,
    queue_url: &str,
) -> anyhow::Result<()> {
    let listed = client
        .list_queues(queue_name)
        .await
        .context("Failed to list queues")?;
    info!(queue_urls = ?listed.queue_urls(), "Queues matching prefix");

    let round_trip = client
        .send_receive_and_delete_message(queue_url)
        .await
        .context("Message round trip failed")?;
    info!(
        md5 = %round_trip.sent_message_md5,
        body = %round_trip.received_message_body,
        "Message round trip"
    );
    if !round_trip.checksum_matches() {
        bail!("Received body does not match the checksum reported on send");
    }

    report_expected_error(
        "non-existent queue",
        client
            .send_receive_and_delete_message(NON_EXISTENT_QUEUE)
            .await
            .map(|_| ()),
    )?;
    report_expected_error(
        "invalid parameter",
        client.send_message_with_invalid_input(queue_url).await,
    )?;
    report_expected_error(
        "invalid receipt handle",
        client.delete_message_with_invalid_input(queue_url).await,
    )?;

    Ok(())
}

fn report_expected_error(scenario: &str, result: QueueResult<()>) -> anyhow::Result<()> {
    let Err(err) = result else {
        bail!("Expected {scenario} to fail, but it succeeded");
    };

    match err.service_error_details() {
        Some(details) => info!(
            scenario,
            code = ?details.code,
            status_code = details.status_code,
            message = ?details.message,
            request_id = ?details.request_id,
            "Service error"
        ),
        None => warn!(scenario, error = %err, "Request failed without a service response"),
    }

    Ok(())
}
