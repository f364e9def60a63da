use caresite::application::controller::{RegistrationController, UiSignal};
use caresite::application::session::PaymentSession;
use caresite::config::AppConfig;
use caresite::domain::payment::{OrderRequest, PaymentEvent};
use caresite::domain::ports::{GatewayRef, NotifierRef};
use caresite::infrastructure::flow::FlowNotifier;
use caresite::infrastructure::mock::{MockBehavior, MockGateway};
use caresite::infrastructure::paypal::PayPalGateway;
use caresite::interfaces::confirmation::confirmation_text;
use caresite::interfaces::csv::registration_reader::RegistrationReader;
use caresite::error::RegistrationError;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input registrations CSV file (headers are the form field names)
    input: PathBuf,

    /// Use the live PayPal gateway instead of the offline mock.
    /// Requires PAYPAL_CLIENT_ID / PAYPAL_SECRET in the environment.
    #[arg(long)]
    live: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let gateway: GatewayRef = if cli.live {
        let paypal = config
            .paypal
            .as_ref()
            .ok_or_else(|| RegistrationError::NotConfigured("set PAYPAL_CLIENT_ID".to_string()))
            .into_diagnostic()?;
        Arc::new(PayPalGateway::new(paypal))
    } else {
        Arc::new(MockGateway::new(MockBehavior::Approve))
    };

    // Relay attaches only when an endpoint is configured; otherwise the
    // notification step is skipped entirely.
    let notifier: Option<NotifierRef> = config
        .relay
        .as_ref()
        .map(|relay| Arc::new(FlowNotifier::new(relay)) as NotifierRef);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RegistrationReader::new(file);

    for (row, draft_result) in reader.drafts().enumerate() {
        let row = row + 1;
        let draft = match draft_result {
            Ok(draft) => draft,
            Err(e) => {
                eprintln!("Error reading registration: {e}");
                continue;
            }
        };

        let mut controller = RegistrationController::new(true);
        *controller.draft_mut() = draft;

        if controller.continue_to_payment().is_none() {
            for (field, message) in controller.errors() {
                eprintln!("row {row}: {field}: {message}");
            }
            continue;
        }
        let Some(snapshot) = controller.snapshot().cloned() else {
            continue;
        };

        let request = OrderRequest {
            amount: config.fee,
            currency: config.currency.clone(),
            description: config.order_description.clone(),
        };
        let session = PaymentSession::new(gateway.clone(), notifier.clone(), request, snapshot);

        if let Err(e) = session.check_ready() {
            eprintln!("row {row}: {e}");
            continue;
        }

        let event = match session.create_order().await {
            Ok(order_id) => session.approve(&order_id).await,
            Err(e) => {
                tracing::error!(error = %e, "order creation failed");
                PaymentEvent::Failed {
                    message: "Payment failed. Please try again.".to_string(),
                }
            }
        };

        match controller.handle_payment(event) {
            Some(UiSignal::ScrollToTop) => {
                println!("{}", confirmation_text(controller.order_id()));
            }
            _ => {
                if let Some(message) = controller.payment_error() {
                    eprintln!("row {row}: {message}");
                }
            }
        }
    }

    Ok(())
}
