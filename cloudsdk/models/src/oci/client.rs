//! Virtual network resource client.

use cloudsdk::{ApiClient, ApiError, HttpResponse, RequestParts, ValidationError};
use cloudsdk_define::RestMethod;
use strum::{Display, EnumString};
use tracing::debug;

use super::types::{CreateVcnDetails, UpdateVcnDetails, Vcn, VcnLifecycleState};
use super::{VCN_PATH, VCNS_PATH};

/// Largest page size `ListVcns` accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SortBy {
    #[strum(serialize = "TIMECREATED")]
    TimeCreated,
    #[strum(serialize = "DISPLAYNAME")]
    DisplayName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SortOrder {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

/// Filters for [`VirtualNetworkClient::list_vcns`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVcnsQuery {
    pub compartment_id: String,
    /// Page size, `1..=1000`.
    pub limit: Option<u32>,
    /// `opc-next-page` value of the previous response.
    pub page: Option<String>,
    pub display_name: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub lifecycle_state: Option<VcnLifecycleState>,
}

impl ListVcnsQuery {
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        if let Some(limit) = self.limit.filter(|l| !(1..=MAX_PAGE_SIZE).contains(l)) {
            return Err(ValidationError::OutOfRange {
                field: "limit".to_string(),
                value: f64::from(limit),
                constraint: format!("value 1..={MAX_PAGE_SIZE}"),
            });
        }
        if self.compartment_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "compartmentId".to_string(),
            });
        }
        Ok(())
    }
}

/// VCN operations of the OCI Core virtual network service.
///
/// ## Examples
///
/// ```no_run
/// use cloudsdk::ApiClient;
/// use cloudsdk_models::oci::{define_oci_api, CreateVcnDetails, VirtualNetworkClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::for_api(&define_oci_api())?.build()?;
/// let network = VirtualNetworkClient::new(client);
///
/// let details = CreateVcnDetails::new("ocid1.compartment.oc1..aaaaaaaacomp", ["10.0.0.0/16"]);
/// let vcn = network.create_vcn(&details, Some("create-prod-vcn")).await?;
/// println!("{} is {}", vcn.id, vcn.lifecycle_state);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VirtualNetworkClient {
    client: ApiClient,
}

impl VirtualNetworkClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a VCN.
    ///
    /// With an `opc_retry_token` the request is safe to repeat and the
    /// transport retries it on transient failures; without one it is sent
    /// once.
    pub async fn create_vcn(
        &self,
        details: &CreateVcnDetails,
        opc_retry_token: Option<&str>,
    ) -> Result<Vcn, ApiError> {
        self.create_vcn_with_http_info(details, opc_retry_token)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn create_vcn_with_http_info(
        &self,
        details: &CreateVcnDetails,
        opc_retry_token: Option<&str>,
    ) -> Result<HttpResponse<Vcn>, ApiError> {
        let parts = RequestParts::new("CreateVcn", RestMethod::Post, VCNS_PATH)
            .header_opt("opc-retry-token", opc_retry_token)
            .json_body(details)?;
        self.client.send(parts).await
    }

    /// Gets a VCN by OCID.
    pub async fn get_vcn(&self, vcn_id: &str) -> Result<Vcn, ApiError> {
        self.get_vcn_with_http_info(vcn_id)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_vcn_with_http_info(&self, vcn_id: &str) -> Result<HttpResponse<Vcn>, ApiError> {
        let parts = RequestParts::from_template("GetVcn", RestMethod::Get, VCN_PATH, &[("vcnId", vcn_id)])?;
        self.client.send(parts).await
    }

    /// Updates names and tags. Pass the `etag` of a previous read as
    /// `if_match` for optimistic concurrency.
    pub async fn update_vcn(
        &self,
        vcn_id: &str,
        details: &UpdateVcnDetails,
        if_match: Option<&str>,
    ) -> Result<Vcn, ApiError> {
        self.update_vcn_with_http_info(vcn_id, details, if_match)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn update_vcn_with_http_info(
        &self,
        vcn_id: &str,
        details: &UpdateVcnDetails,
        if_match: Option<&str>,
    ) -> Result<HttpResponse<Vcn>, ApiError> {
        let parts = RequestParts::from_template("UpdateVcn", RestMethod::Put, VCN_PATH, &[("vcnId", vcn_id)])?
            .header_opt("if-match", if_match)
            .json_body(details)?;
        self.client.send(parts).await
    }

    /// Deletes a VCN. It must be empty of subnets and gateways.
    pub async fn delete_vcn(&self, vcn_id: &str, if_match: Option<&str>) -> Result<(), ApiError> {
        self.delete_vcn_with_http_info(vcn_id, if_match)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn delete_vcn_with_http_info(
        &self,
        vcn_id: &str,
        if_match: Option<&str>,
    ) -> Result<HttpResponse<()>, ApiError> {
        let parts =
            RequestParts::from_template("DeleteVcn", RestMethod::Delete, VCN_PATH, &[("vcnId", vcn_id)])?
                .header_opt("if-match", if_match)
                .expect([200, 204]);
        self.client.send(parts).await
    }

    /// Lists one page of VCNs in a compartment.
    ///
    /// The next page token is in the `opc-next-page` header, see
    /// [`HttpResponse::next_page`].
    pub async fn list_vcns(&self, query: &ListVcnsQuery) -> Result<Vec<Vcn>, ApiError> {
        self.list_vcns_with_http_info(query)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn list_vcns_with_http_info(
        &self,
        query: &ListVcnsQuery,
    ) -> Result<HttpResponse<Vec<Vcn>>, ApiError> {
        query.check()?;
        let parts = RequestParts::new("ListVcns", RestMethod::Get, VCNS_PATH)
            .query("compartmentId", &query.compartment_id)
            .query_opt("limit", query.limit)
            .query_opt("page", query.page.as_deref())
            .query_opt("displayName", query.display_name.as_deref())
            .query_opt("sortBy", query.sort_by)
            .query_opt("sortOrder", query.sort_order)
            .query_opt("lifecycleState", query.lifecycle_state);
        self.client.send(parts).await
    }

    /// Lists every VCN in a compartment, following `opc-next-page`.
    pub async fn list_all_vcns(&self, query: &ListVcnsQuery) -> Result<Vec<Vcn>, ApiError> {
        let mut query = query.clone();
        let mut vcns = Vec::new();
        loop {
            let response = self.list_vcns_with_http_info(&query).await?;
            let next = response.next_page().map(str::to_string);
            vcns.extend(response.into_body());
            match next {
                Some(page) => {
                    debug!(page = %page, fetched = vcns.len(), "fetching next page of VCNs");
                    query.page = Some(page);
                }
                None => return Ok(vcns),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        let mut query = ListVcnsQuery::new("ocid1.compartment.oc1..aaaaaaaacomp");
        assert!(query.check().is_ok());
        query.limit = Some(0);
        assert!(matches!(query.check(), Err(ValidationError::OutOfRange { .. })));
        query.limit = Some(MAX_PAGE_SIZE);
        assert!(query.check().is_ok());
        query.limit = Some(MAX_PAGE_SIZE + 1);
        assert!(query.check().is_err());
    }

    #[test]
    fn test_blank_compartment() {
        assert!(matches!(
            ListVcnsQuery::new(" ").check(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_sort_wire_names() {
        assert_eq!(SortBy::TimeCreated.to_string(), "TIMECREATED");
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
    }
}
