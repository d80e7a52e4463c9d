/// Adyen API endpoints used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Authorise,
    Capture,
    Cancel,
    Refund,
    CancelOrRefund,
    ListRecurringDetails,
}

impl Endpoint {
    fn service(&self) -> &'static str {
        match self {
            Endpoint::ListRecurringDetails => "Recurring",
            _ => "Payment",
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Endpoint::Authorise => "authorise",
            Endpoint::Capture => "capture",
            Endpoint::Cancel => "cancel",
            Endpoint::Refund => "refund",
            Endpoint::CancelOrRefund => "cancelOrRefund",
            Endpoint::ListRecurringDetails => "listRecurringDetails",
        }
    }

    /// Path relative to the base URL, e.g. `/Payment/v12/authorise`
    pub fn path(&self, api_version: &str) -> String {
        format!("/{}/{}/{}", self.service(), api_version, self.action())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Authorise.path("v12"), "/Payment/v12/authorise");
        assert_eq!(Endpoint::Capture.path("v12"), "/Payment/v12/capture");
        assert_eq!(Endpoint::Cancel.path("v12"), "/Payment/v12/cancel");
        assert_eq!(Endpoint::Refund.path("v12"), "/Payment/v12/refund");
        assert_eq!(Endpoint::CancelOrRefund.path("v12"), "/Payment/v12/cancelOrRefund");
        assert_eq!(
            Endpoint::ListRecurringDetails.path("v12"),
            "/Recurring/v12/listRecurringDetails"
        );
    }

    #[test]
    fn test_path_follows_api_version() {
        assert_eq!(Endpoint::Refund.path("v30"), "/Payment/v30/refund");
    }
}
