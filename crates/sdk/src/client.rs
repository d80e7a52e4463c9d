use adyen_types::{
    AdditionalData, Amount, Contract, ModificationRequest, PaymentRequest,
    RecurringDetailsRequest, Response, payments::SHOPPER_INTERACTION_CONT_AUTH,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Configuration,
    endpoints::Endpoint,
    error::{AdyenError, Result},
    requests::{
        CardPayment, Modification, RecurringContractRequest, RecurringDetailsQuery,
        RecurringPayment,
    },
    transport::{HttpTransport, Transport},
};

/// Current time in Adyen's `generationTime` format (ISO 8601)
pub fn generation_time() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Client for the Adyen Payment and Recurring APIs
///
/// Every operation returns a [`Response`]. A declined payment or a non-200
/// status is still `Ok`; check [`Response::is_success`] and
/// [`Response::is_approved`].
///
/// # Example
///
/// ```no_run
/// use adyen_sdk::{AdyenClient, CardPayment, Configuration};
///
/// let config = Configuration::new("test")
///     .with_credentials("ws_123456@Company.FooBar", "correctbatteryhorsestaple")
///     .with_default_merchant_account("FooBar123")
///     .with_default_currency("EUR");
///
/// let client = AdyenClient::new(config)?;
/// let response = client.authorise(CardPayment::new("adyenjs_0_1_15$...", 1299, "order-42"))?;
/// if response.is_approved() {
///     println!("psp reference: {}", response.field("psp_reference")?);
/// }
/// # Ok::<(), adyen_sdk::AdyenError>(())
/// ```
pub struct AdyenClient<T = HttpTransport> {
    config: Configuration,
    merchant_account: Option<String>,
    currency: Option<String>,
    transport: T,
}

impl AdyenClient<HttpTransport> {
    /// Create a client talking to Adyen over HTTPS
    pub fn new(config: Configuration) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> AdyenClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(config: Configuration, transport: T) -> Self {
        Self {
            merchant_account: config.default_merchant_account.clone(),
            currency: config.default_currency.clone(),
            config,
            transport,
        }
    }

    /// Override the configured default merchant account for this client
    pub fn with_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = Some(merchant_account.into());
        self
    }

    /// Override the configured default currency for this client
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn merchant_account(&self) -> Option<&str> {
        self.merchant_account.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Public key for the client-side encryption library
    pub fn cse_public_key(&self) -> Option<&str> {
        self.config.cse_public_key.as_deref()
    }

    /// Charge a card
    pub fn authorise(&self, payment: CardPayment) -> Result<Response> {
        let merchant_account = self.resolve_merchant_account(payment.merchant_account)?;
        let currency = self.resolve_currency(payment.currency)?;

        let mut request = PaymentRequest::new(
            payment.reference,
            Amount::new(payment.amount, currency),
            merchant_account,
        );
        request.additional_data = Some(AdditionalData::encrypted_card(payment.encrypted_card));
        request.shopper_email = payment.shopper.email;
        request.shopper_ip = payment.shopper.ip;
        request.shopper_reference = payment.shopper.reference;

        self.send(Endpoint::Authorise, &request)
    }

    /// Verify a card without charging it
    ///
    /// The card is checked for `payment.amount` but the authorised amount is zero.
    pub fn verify(&self, payment: CardPayment) -> Result<Response> {
        let merchant_account = self.resolve_merchant_account(payment.merchant_account)?;
        let currency = self.resolve_currency(payment.currency)?;

        let mut request = PaymentRequest::new(
            payment.reference,
            Amount::zero(currency.clone()),
            merchant_account,
        );
        request.additional_amount = Some(Amount::new(payment.amount, currency));
        request.additional_data = Some(AdditionalData::encrypted_card(payment.encrypted_card));
        request.shopper_email = payment.shopper.email;
        request.shopper_ip = payment.shopper.ip;
        request.shopper_reference = payment.shopper.reference;

        self.send(Endpoint::Authorise, &request)
    }

    /// Store a card on a shopper reference for later recurring charges
    pub fn create_recurring_contract(&self, contract: RecurringContractRequest) -> Result<Response> {
        let shopper_reference = contract.shopper.reference.ok_or_else(|| {
            AdyenError::Config("a shopper reference is required for recurring contracts".to_string())
        })?;
        let merchant_account = self.resolve_merchant_account(contract.merchant_account)?;
        let currency = self.resolve_currency(contract.currency)?;

        let mut request =
            PaymentRequest::new(contract.reference, Amount::zero(currency), merchant_account);
        request.additional_data = Some(AdditionalData::encrypted_card(contract.encrypted_card));
        request.shopper_email = contract.shopper.email;
        request.shopper_ip = contract.shopper.ip;
        request.shopper_reference = Some(shopper_reference);
        request.recurring = Some(Contract::Recurring.into());

        self.send(Endpoint::Authorise, &request)
    }

    /// Charge a shopper's stored payment method
    pub fn authorise_recurring_payment(&self, payment: RecurringPayment) -> Result<Response> {
        let merchant_account = self.resolve_merchant_account(payment.merchant_account)?;
        let currency = self.resolve_currency(payment.currency)?;

        let mut request = PaymentRequest::new(
            payment.reference,
            Amount::new(payment.amount, currency),
            merchant_account,
        );
        request.shopper_reference = Some(payment.shopper_reference);
        request.selected_recurring_detail_reference = Some(payment.recurring_reference);
        request.selected_brand = Some(String::new());
        request.recurring = Some(Contract::Recurring.into());
        request.shopper_interaction = Some(SHOPPER_INTERACTION_CONT_AUTH.to_string());

        self.send(Endpoint::Authorise, &request)
    }

    /// List the payment methods stored for a shopper
    pub fn list_recurring_details(&self, query: RecurringDetailsQuery) -> Result<Response> {
        let request = RecurringDetailsRequest {
            shopper_reference: query.shopper_reference,
            recurring: query.contract.into(),
            merchant_account: self.resolve_merchant_account(query.merchant_account)?,
        };

        self.send(Endpoint::ListRecurringDetails, &request)
    }

    /// Capture an authorised payment
    pub fn capture(&self, modification: Modification, amount: i64) -> Result<Response> {
        let request = self.modification_request(modification, Some(amount))?;
        self.send(Endpoint::Capture, &request)
    }

    /// Cancel an authorised payment
    pub fn cancel(&self, modification: Modification) -> Result<Response> {
        let request = self.modification_request(modification, None)?;
        self.send(Endpoint::Cancel, &request)
    }

    /// Refund a captured payment
    pub fn refund(&self, modification: Modification, amount: i64) -> Result<Response> {
        let request = self.modification_request(modification, Some(amount))?;
        self.send(Endpoint::Refund, &request)
    }

    /// Cancel or refund a payment whose capture state is unknown
    pub fn cancel_or_refund(&self, modification: Modification) -> Result<Response> {
        let request = self.modification_request(modification, None)?;
        self.send(Endpoint::CancelOrRefund, &request)
    }

    /// POST an arbitrary body to a path relative to the base URL
    pub fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let body = serde_json::to_string(body)?;
        let raw = self.transport.post_json(path, body)?;
        let response = Response::parse(raw.status, raw.body)?;

        debug!(
            path = %path,
            status = response.status(),
            result_code = ?response.data().get("result_code"),
            "Adyen response"
        );

        Ok(response)
    }

    fn send<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Response> {
        let path = endpoint.path(&self.config.api_version);
        info!(operation = %endpoint, path = %path, "Sending Adyen request");
        self.post_json(&path, body)
    }

    fn modification_request(
        &self,
        modification: Modification,
        amount: Option<i64>,
    ) -> Result<ModificationRequest> {
        let modification_amount = match amount {
            Some(value) => Some(Amount::new(value, self.resolve_currency(modification.currency)?)),
            None => None,
        };

        Ok(ModificationRequest {
            reference: modification.reference,
            merchant_account: self.resolve_merchant_account(modification.merchant_account)?,
            original_reference: modification.original_reference,
            modification_amount,
        })
    }

    fn resolve_merchant_account(&self, requested: Option<String>) -> Result<String> {
        requested
            .or_else(|| self.merchant_account.clone())
            .ok_or_else(|| AdyenError::Config("no merchant account configured".to_string()))
    }

    fn resolve_currency(&self, requested: Option<String>) -> Result<String> {
        requested
            .or_else(|| self.currency.clone())
            .ok_or_else(|| AdyenError::Config("no currency configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::{Value, json};

    use super::*;
    use crate::{requests::Shopper, transport::RawResponse};

    /// Records every request and answers with a canned response
    struct RecordingTransport {
        requests: RefCell<Vec<(String, Value)>>,
        reply: RawResponse,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: Value) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                reply: RawResponse { status, body },
            }
        }

        fn last(&self) -> (String, Value) {
            self.requests.borrow().last().cloned().expect("no request recorded")
        }

        fn count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for RecordingTransport {
        fn post_json(&self, path: &str, body: String) -> Result<RawResponse> {
            let body: Value = serde_json::from_str(&body)?;
            self.requests.borrow_mut().push((path.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    fn config() -> Configuration {
        Configuration::new("test")
            .with_credentials("ws_123456@Company.FooBar", "secret")
            .with_default_merchant_account("FooBar123")
            .with_default_currency("EUR")
            .with_cse_public_key("10001|ABCDEF")
    }

    fn client() -> AdyenClient<RecordingTransport> {
        AdyenClient::with_transport(
            config(),
            RecordingTransport::replying(
                200,
                json!({"pspReference": "8614508646223531", "resultCode": "Authorised"}),
            ),
        )
    }

    #[test]
    fn test_authorise() {
        let client = client();
        let response = client
            .authorise(CardPayment::new("adyenjs_0_1_15$abc", 123, "order-1"))
            .unwrap();

        assert!(response.is_approved());
        assert_eq!(response.field("psp_reference").unwrap(), "8614508646223531");

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/authorise");
        assert_eq!(
            body,
            json!({
                "reference": "order-1",
                "amount": {"value": 123, "currency": "EUR"},
                "merchantAccount": "FooBar123",
                "additionalData": {"card.encrypted.json": "adyenjs_0_1_15$abc"}
            })
        );
    }

    #[test]
    fn test_authorise_with_shopper() {
        let client = client();
        client
            .authorise(
                CardPayment::new("enc", 500, "order-2")
                    .with_shopper(Shopper::new("john").with_email("john@doe.com").with_ip("127.0.0.1")),
            )
            .unwrap();

        let (_, body) = client.transport().last();
        assert_eq!(body["shopperReference"], "john");
        assert_eq!(body["shopperEmail"], "john@doe.com");
        assert_eq!(body["shopperIP"], "127.0.0.1");
    }

    #[test]
    fn test_verify_sends_zero_amount() {
        let client = client();
        client.verify(CardPayment::new("enc", 123, "verify-1")).unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/authorise");
        assert_eq!(body["amount"], json!({"value": 0, "currency": "EUR"}));
        assert_eq!(body["additionalAmount"], json!({"value": 123, "currency": "EUR"}));
        assert_eq!(body["additionalData"], json!({"card.encrypted.json": "enc"}));
    }

    #[test]
    fn test_create_recurring_contract() {
        let client = client();
        let shopper = Shopper::new("john").with_email("john@doe.com").with_ip("127.0.0.1");
        client
            .create_recurring_contract(RecurringContractRequest::new("enc", "contract-1", shopper))
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/authorise");
        assert_eq!(
            body,
            json!({
                "reference": "contract-1",
                "amount": {"value": 0, "currency": "EUR"},
                "merchantAccount": "FooBar123",
                "additionalData": {"card.encrypted.json": "enc"},
                "shopperEmail": "john@doe.com",
                "shopperIP": "127.0.0.1",
                "shopperReference": "john",
                "recurring": {"contract": "RECURRING"}
            })
        );
    }

    #[test]
    fn test_create_recurring_contract_requires_shopper_reference() {
        let client = client();
        let err = client
            .create_recurring_contract(RecurringContractRequest::new(
                "enc",
                "contract-2",
                Shopper::default(),
            ))
            .unwrap_err();

        assert!(matches!(err, AdyenError::Config(_)));
        assert_eq!(client.transport().count(), 0);
    }

    #[test]
    fn test_authorise_recurring_payment() {
        let client = client();
        client
            .authorise_recurring_payment(RecurringPayment::new("charge-1", "john", 456))
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/authorise");
        assert_eq!(
            body,
            json!({
                "reference": "charge-1",
                "amount": {"value": 456, "currency": "EUR"},
                "merchantAccount": "FooBar123",
                "shopperReference": "john",
                "selectedRecurringDetailReference": "LATEST",
                "selectedBrand": "",
                "recurring": {"contract": "RECURRING"},
                "shopperInteraction": "ContAuth"
            })
        );
    }

    #[test]
    fn test_authorise_recurring_payment_with_detail_reference() {
        let client = client();
        client
            .authorise_recurring_payment(
                RecurringPayment::new("charge-2", "john", 456)
                    .with_recurring_reference("8314508657181050"),
            )
            .unwrap();

        let (_, body) = client.transport().last();
        assert_eq!(body["selectedRecurringDetailReference"], "8314508657181050");
    }

    #[test]
    fn test_list_recurring_details() {
        let client = AdyenClient::with_transport(
            config(),
            RecordingTransport::replying(
                200,
                json!({
                    "creationDate": "2015-12-23T09:59:40+01:00",
                    "details": [
                        {"RecurringDetail": {"recurringDetailReference": "8314508657181050"}}
                    ],
                    "shopperReference": "john"
                }),
            ),
        );

        let response = client
            .list_recurring_details(RecurringDetailsQuery::new("john"))
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Recurring/v12/listRecurringDetails");
        assert_eq!(
            body,
            json!({
                "shopperReference": "john",
                "recurring": {"contract": "RECURRING"},
                "merchantAccount": "FooBar123"
            })
        );

        assert_eq!(response.field("shopper_reference").unwrap(), "john");
        let details = response.field("details").unwrap();
        assert_eq!(details[0]["recurring_detail_reference"], "8314508657181050");
    }

    #[test]
    fn test_list_recurring_details_with_contract() {
        let client = client();
        client
            .list_recurring_details(
                RecurringDetailsQuery::new("john").with_contract(Contract::OneClick),
            )
            .unwrap();

        let (_, body) = client.transport().last();
        assert_eq!(body["recurring"], json!({"contract": "ONECLICK"}));
    }

    #[test]
    fn test_capture() {
        let client = client();
        client
            .capture(Modification::new("8614508646223531", "capture-1"), 123)
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/capture");
        assert_eq!(
            body,
            json!({
                "reference": "capture-1",
                "merchantAccount": "FooBar123",
                "originalReference": "8614508646223531",
                "modificationAmount": {"value": 123, "currency": "EUR"}
            })
        );
    }

    #[test]
    fn test_cancel() {
        let client = client();
        client
            .cancel(Modification::new("8614508646223531", "cancel-1"))
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/cancel");
        assert_eq!(
            body,
            json!({
                "reference": "cancel-1",
                "merchantAccount": "FooBar123",
                "originalReference": "8614508646223531"
            })
        );
    }

    #[test]
    fn test_refund() {
        let client = client();
        client
            .refund(
                Modification::new("8614508646223531", "refund-1").with_currency("USD"),
                50,
            )
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/refund");
        assert_eq!(body["modificationAmount"], json!({"value": 50, "currency": "USD"}));
        assert_eq!(body["originalReference"], "8614508646223531");
    }

    #[test]
    fn test_cancel_or_refund() {
        let client = client();
        client
            .cancel_or_refund(Modification::new("8614508646223531", "cor-1"))
            .unwrap();

        let (path, body) = client.transport().last();
        assert_eq!(path, "/Payment/v12/cancelOrRefund");
        assert!(body.get("modificationAmount").is_none());
    }

    #[test]
    fn test_merchant_account_fallback_order() {
        let client = client().with_merchant_account("FooBarSubMerchant123");
        client.cancel(Modification::new("psp", "ref")).unwrap();
        assert_eq!(client.transport().last().1["merchantAccount"], "FooBarSubMerchant123");

        client
            .cancel(Modification::new("psp", "ref").with_merchant_account("PerRequest"))
            .unwrap();
        assert_eq!(client.transport().last().1["merchantAccount"], "PerRequest");
    }

    #[test]
    fn test_currency_override() {
        let client = client().with_currency("GBP");
        assert_eq!(client.currency(), Some("GBP"));
        assert_eq!(client.configuration().default_currency.as_deref(), Some("EUR"));

        client.authorise(CardPayment::new("enc", 1, "order")).unwrap();
        assert_eq!(client.transport().last().1["amount"]["currency"], "GBP");
    }

    #[test]
    fn test_missing_merchant_account() {
        let client = AdyenClient::with_transport(
            Configuration::new("test").with_default_currency("EUR"),
            RecordingTransport::replying(200, json!({})),
        );
        let err = client.authorise(CardPayment::new("enc", 1, "order")).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: no merchant account configured");
        assert_eq!(client.transport().count(), 0);
    }

    #[test]
    fn test_missing_currency() {
        let client = AdyenClient::with_transport(
            Configuration::new("test").with_default_merchant_account("FooBar123"),
            RecordingTransport::replying(200, json!({})),
        );
        let err = client
            .refund(Modification::new("psp", "ref"), 10)
            .unwrap_err();
        assert!(matches!(err, AdyenError::Config(_)));

        // cancel has no amount and therefore needs no currency
        assert!(client.cancel(Modification::new("psp", "ref")).is_ok());
    }

    #[test]
    fn test_refused_is_not_an_error() {
        let client = AdyenClient::with_transport(
            config(),
            RecordingTransport::replying(
                200,
                json!({"resultCode": "Refused", "refusalReason": "CVC Declined"}),
            ),
        );
        let response = client.authorise(CardPayment::new("enc", 123, "order")).unwrap();
        assert!(response.is_success());
        assert!(!response.is_approved());
        assert_eq!(response.field("refusal_reason").unwrap(), "CVC Declined");
    }

    #[test]
    fn test_error_status_is_not_an_error() {
        let client = AdyenClient::with_transport(
            config(),
            RecordingTransport::replying(
                422,
                json!({"status": 422, "errorCode": "101", "message": "Invalid card number", "errorType": "validation"}),
            ),
        );
        let response = client.authorise(CardPayment::new("enc", 123, "order")).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.field("error_type").unwrap(), "validation");
        assert!(!response.has_field("psp_reference"));
        assert!(matches!(
            response.field("psp_reference"),
            Err(adyen_types::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        let client = AdyenClient::with_transport(
            config(),
            RecordingTransport::replying(200, json!("ok")),
        );
        let err = client.cancel(Modification::new("psp", "ref")).unwrap_err();
        assert!(matches!(err, AdyenError::UnexpectedBody(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn test_api_version_in_paths() {
        let client = AdyenClient::with_transport(
            config().with_api_version("v30"),
            RecordingTransport::replying(200, json!({})),
        );
        client.cancel(Modification::new("psp", "ref")).unwrap();
        assert_eq!(client.transport().last().0, "/Payment/v30/cancel");
    }

    #[test]
    fn test_post_json_custom_path() {
        let client = client();
        let response = client
            .post_json("/Payment/v12/adjustAuthorisation", &json!({"originalReference": "psp"}))
            .unwrap();
        assert!(response.is_success());
        assert_eq!(client.transport().last().0, "/Payment/v12/adjustAuthorisation");
    }

    #[test]
    fn test_cse_public_key() {
        assert_eq!(client().cse_public_key(), Some("10001|ABCDEF"));
    }

    #[test]
    fn test_clients_with_different_defaults_coexist() {
        let eur = client();
        let usd = client().with_currency("USD").with_merchant_account("FooBarUS");

        eur.capture(Modification::new("psp", "ref"), 1).unwrap();
        usd.capture(Modification::new("psp", "ref"), 1).unwrap();

        assert_eq!(eur.transport().last().1["modificationAmount"]["currency"], "EUR");
        assert_eq!(usd.transport().last().1["modificationAmount"]["currency"], "USD");
        assert_eq!(usd.transport().last().1["merchantAccount"], "FooBarUS");
    }

    #[test]
    fn test_generation_time() {
        let time = generation_time();
        assert!(chrono::DateTime::parse_from_rfc3339(&time).is_ok());
        assert!(time.ends_with('Z'));
    }
}
