//! Subcommand implementations. Each returns the text to print so it can be
//! tested without a terminal.

use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use cloudsdk::{ApiClient, ClientConfig, RequestParts, ValidationError};
use cloudsdk_define::model::flatten_fields;
use cloudsdk_define::{AuthStrategy, RestApi, RestMethod};
use cloudsdk_models::{ModelEntry, apis, find_api, find_model};
use color_eyre::eyre::{Context, Result, bail, eyre};
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, info};

/// Parses a `KEY=VALUE` argument.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {s:?}")),
    }
}

fn auth_label(auth: &AuthStrategy) -> String {
    match auth {
        AuthStrategy::None => "none".to_string(),
        AuthStrategy::BearerToken { .. } => "bearer".to_string(),
        AuthStrategy::ApiKey { header } => format!("api key ({header})"),
        AuthStrategy::Basic => "basic".to_string(),
    }
}

fn lookup_api(name: &str) -> Result<RestApi> {
    find_api(name).ok_or_else(|| {
        let known: Vec<String> = apis().into_iter().map(|api| api.name).collect();
        eyre!("unknown API '{name}'. Available APIs: {}", known.join(", "))
    })
}

fn lookup_model(name: &str) -> Result<ModelEntry> {
    find_model(name).ok_or_else(|| eyre!("unknown model '{name}'. Run 'cloudsdk apis' to list APIs"))
}

pub fn list_apis() -> String {
    let mut out = String::new();
    for api in apis() {
        let _ = writeln!(out, "{}  {}", api.name.bold(), api.description);
        let _ = writeln!(out, "    base url:  {}", api.base_url);
        let _ = writeln!(out, "    module:    cloudsdk_models::{}", api.module());
        if let Some(docs) = &api.docs_url {
            let _ = writeln!(out, "    docs:      {docs}");
        }
        let _ = writeln!(out, "    auth:      {}", auth_label(&api.auth));
        if !api.env_auth.is_empty() {
            let _ = writeln!(out, "    env:       {}", api.env_auth.join(", "));
        }
        let _ = writeln!(out, "    endpoints: {}", api.endpoints.len());
    }
    out
}

pub fn list_operations(api: &str) -> Result<String> {
    let api = lookup_api(api)?;
    let mut out = String::new();
    for endpoint in &api.endpoints {
        let statuses: Vec<String> = endpoint.expected_status.iter().map(u16::to_string).collect();
        let _ = writeln!(
            out,
            "{:<7} {}  {}",
            endpoint.method.to_string().cyan(),
            endpoint.path,
            endpoint.id.bold()
        );
        if !endpoint.description.is_empty() {
            let _ = writeln!(out, "        {}", endpoint.description.dimmed());
        }
        if !endpoint.query_params.is_empty() {
            let _ = writeln!(out, "        query   {}", endpoint.query_params.join(", "));
        }
        let _ = writeln!(out, "        expects {} -> {}", statuses.join(", "), endpoint.response);
    }
    Ok(out)
}

pub fn describe_model(name: &str) -> Result<String> {
    let entry = lookup_model(name)?;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", entry.name.bold(), entry.api);
    for field in flatten_fields((entry.fields)()) {
        let mut flags = Vec::new();
        if field.required {
            flags.push("required".to_string());
        }
        if field.nullable {
            flags.push("nullable".to_string());
        }
        if let Some(default) = field.default {
            flags.push(format!("default {default}"));
        }
        flags.extend(field.constraints.iter().map(ToString::to_string));
        let _ = writeln!(
            out,
            "  {:<28} {:<30} {:<32} {}",
            field.attribute,
            field.wire,
            field.kind.to_string(),
            flags.join("; ")
        );
    }
    Ok(out)
}

/// Result of checking a payload against a model.
#[derive(Debug)]
pub struct ValidationReport {
    pub model: &'static str,
    pub violations: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_valid() {
            return format!("{} {} is valid\n", "ok".green(), self.model);
        }
        let mut out = format!(
            "{} {} has {} violation(s)\n",
            "invalid".red().bold(),
            self.model,
            self.violations.len()
        );
        for violation in &self.violations {
            let _ = writeln!(out, "  - {violation}");
        }
        out
    }
}

pub fn validate_payload(model: &str, input: &Path) -> Result<ValidationReport> {
    let entry = lookup_model(model)?;
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?
    };
    let value: Value = serde_json::from_str(&text).context("payload is not valid JSON")?;
    debug!(model = entry.name, "validating payload");
    Ok(ValidationReport {
        model: entry.name,
        violations: entry.violations(&value),
    })
}

pub async fn get(
    api: &str,
    endpoint_id: &str,
    params: &[(String, String)],
    query: &[(String, String)],
    config: Option<&Path>,
) -> Result<Value> {
    let api = lookup_api(api)?;
    let endpoint = api.endpoint(endpoint_id).ok_or_else(|| {
        let ids: Vec<&str> = api.endpoints.iter().map(|e| e.id.as_str()).collect();
        eyre!("unknown endpoint '{endpoint_id}' for {}. Endpoints: {}", api.name, ids.join(", "))
    })?;
    if endpoint.method != RestMethod::Get {
        bail!("{} is a {} endpoint; only GET endpoints can be called from the CLI", endpoint.id, endpoint.method);
    }

    let config = match config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    }
    .with_env_overrides()?;
    let client = ApiClient::from_config(&api, &config)?;

    let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let parts = query
        .iter()
        .fold(RequestParts::from_endpoint(endpoint, &params)?, |parts, (key, value)| {
            parts.query(key.clone(), value)
        });

    info!(api = %api.name, endpoint = %endpoint.id, "calling endpoint");
    let response = client.send::<Value>(parts).await?;
    Ok(response.into_body())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("vcnId=ocid1.vcn.oc1..a=b").unwrap(),
            ("vcnId".to_string(), "ocid1.vcn.oc1..a=b".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_list_apis_mentions_every_api() {
        let out = list_apis();
        for name in ["AzureMonitor", "Intersight", "OCI", "XClarity"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_api() {
        let err = list_operations("aws").unwrap_err();
        assert!(err.to_string().contains("Available APIs"));
    }

    #[test]
    fn test_describe_shows_wire_keys_and_constraints() {
        let out = describe_model("KubernetesSysConfigPolicyAllOf").unwrap();
        assert!(out.contains("DnsServers"));
        assert!(out.contains("items <= 3"));
    }

    #[test]
    fn test_describe_flattens_all_of() {
        let out = describe_model("KubernetesSysConfigPolicy").unwrap();
        assert!(out.contains("Moid"));
        assert!(out.contains("Timezone"));
    }

    #[test]
    fn test_validate_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"uuid": "xyz", "slots": 20}}"#).unwrap();
        let report = validate_payload("Node", file.path()).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 2);
        assert!(report.render().contains("violation(s)"));
    }

    #[tokio::test]
    async fn test_get_rejects_non_get_endpoints() {
        let err = get("oci", "DeleteVcn", &[], &[], None).await.unwrap_err();
        assert!(err.to_string().contains("only GET endpoints"));
    }
}
