use reqwest::Client;
use serde::Deserialize;

pub const STRIPE_API_BASE_URL: &str = "https://api.stripe.com/v1";

/// All intents are created in the single supported currency.
const CURRENCY: &str = "usd";

#[derive(Clone)]
pub struct StripeService {
    client: Client,
    secret_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

impl StripeService {
    pub fn new(secret_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            base_url,
        }
    }

    /// Create a payment intent for a card charge and return its client
    /// secret. Upstream rejections are surfaced verbatim; nothing is retried.
    pub async fn create_payment_intent(
        &self,
        amount_in_cents: i64,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Creating payment intent for {} cents", amount_in_cents);

        let url = format!("{}/payment_intents", self.base_url);
        let params = [
            ("amount", amount_in_cents.to_string()),
            ("currency", CURRENCY.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Stripe API error {}: {}", status, error_text).into());
        }

        let data: PaymentIntentResponse = response.json().await?;
        Ok(data.client_secret)
    }
}
