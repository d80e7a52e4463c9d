use adyen_sdk::Response;
use console::style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!(
                "Invalid format: {}. Valid options are: json, pretty",
                s
            )),
        }
    }
}

/// One line summary: HTTP status, result code and PSP reference when present
pub fn summary(response: &Response) -> String {
    let mut parts = vec![format!("HTTP {}", response.status())];
    if let Ok(result_code) = response.field("result_code") {
        parts.push(result_code.as_str().unwrap_or_default().to_string());
    }
    if let Ok(reason) = response.field("refusal_reason") {
        parts.push(format!("({})", reason.as_str().unwrap_or_default()));
    }
    if let Ok(psp_reference) = response.field("psp_reference") {
        parts.push(format!("psp_reference={}", psp_reference.as_str().unwrap_or_default()));
    }
    parts.join(" ")
}

pub fn print_response(response: &Response, format: &OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(response) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: failed to encode response: {}", e),
        },
        OutputFormat::Pretty => {
            let line = summary(response);
            if response.is_approved() {
                eprintln!("{} {}", style("✓").green(), line);
            } else if response.is_success() {
                eprintln!("{} {}", style("•").yellow(), line);
            } else {
                eprintln!("{} {}", style("✗").red(), line);
            }
            match serde_json::to_string_pretty(response.data()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: failed to encode response: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_summary_approved() {
        let response = Response::parse(
            200,
            json!({"pspReference": "8614508646223531", "resultCode": "Authorised"}),
        )
        .unwrap();
        assert_eq!(
            summary(&response),
            "HTTP 200 Authorised psp_reference=8614508646223531"
        );
    }

    #[test]
    fn test_summary_refused() {
        let response =
            Response::parse(200, json!({"resultCode": "Refused", "refusalReason": "CVC Declined"}))
                .unwrap();
        assert_eq!(summary(&response), "HTTP 200 Refused (CVC Declined)");
    }

    #[test]
    fn test_summary_empty() {
        let response = Response::parse(302, serde_json::Value::Null).unwrap();
        assert_eq!(summary(&response), "HTTP 302");
    }
}
