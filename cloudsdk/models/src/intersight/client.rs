//! Kubernetes resource client for Intersight.

use cloudsdk::{ApiClient, ApiError, HttpResponse, RequestParts};
use cloudsdk_define::RestMethod;

use super::types::{KubernetesSysConfigPolicy, KubernetesSysConfigPolicyList};
use super::{SYS_CONFIG_POLICIES_PATH, SYS_CONFIG_POLICY_PATH};

/// OData query options accepted by Intersight list operations.
///
/// Each set option becomes a `$`-prefixed query parameter.
///
/// ## Examples
///
/// ```
/// use cloudsdk_models::intersight::ListQuery;
///
/// let query = ListQuery::new()
///     .filter("Name eq 'k8s-sys'")
///     .top(10);
/// assert_eq!(
///     query.pairs(),
///     vec![("$filter", "Name eq 'k8s-sys'".to_string()), ("$top", "10".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub orderby: Option<String>,
    pub top: Option<u32>,
    pub skip: Option<u32>,
    pub select: Option<String>,
    pub expand: Option<String>,
    pub apply: Option<String>,
    /// Return only the number of matching objects.
    pub count: Option<bool>,
    /// `allpages` adds the total count to a page of results.
    pub inlinecount: Option<String>,
    pub at: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn orderby(mut self, orderby: impl Into<String>) -> Self {
        self.orderby = Some(orderby.into());
        self
    }

    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn apply(mut self, apply: impl Into<String>) -> Self {
        self.apply = Some(apply.into());
        self
    }

    pub fn inlinecount(mut self, inlinecount: impl Into<String>) -> Self {
        self.inlinecount = Some(inlinecount.into());
        self
    }

    /// Point-in-time read, e.g. `VersionType eq 'Configured'`.
    pub fn at(mut self, at: impl Into<String>) -> Self {
        self.at = Some(at.into());
        self
    }

    /// Query pairs in a fixed order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value));
            }
        };
        push("$filter", self.filter.clone());
        push("$orderby", self.orderby.clone());
        push("$top", self.top.map(|v| v.to_string()));
        push("$skip", self.skip.map(|v| v.to_string()));
        push("$select", self.select.clone());
        push("$expand", self.expand.clone());
        push("$apply", self.apply.clone());
        push("$count", self.count.map(|v| v.to_string()));
        push("$inlinecount", self.inlinecount.clone());
        push("at", self.at.clone());
        pairs
    }
}

/// Operations on `kubernetes.SysConfigPolicy` objects.
///
/// ## Examples
///
/// ```no_run
/// use cloudsdk::ApiClient;
/// use cloudsdk_models::intersight::{define_intersight_api, KubernetesApi, ListQuery};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::for_api(&define_intersight_api())?.build()?;
/// let kubernetes = KubernetesApi::new(client);
///
/// let page = kubernetes
///     .get_kubernetes_sys_config_policy_list(&ListQuery::new().top(5))
///     .await?;
/// for policy in page.results.unwrap_or_default() {
///     println!("{:?}", policy.policy.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KubernetesApi {
    client: ApiClient,
}

impl KubernetesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a system config policy.
    ///
    /// `if_none_match = Some("*")` makes the call fail if the object exists.
    pub async fn create_kubernetes_sys_config_policy(
        &self,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
        if_none_match: Option<&str>,
    ) -> Result<KubernetesSysConfigPolicy, ApiError> {
        self.create_kubernetes_sys_config_policy_with_http_info(policy, if_match, if_none_match)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn create_kubernetes_sys_config_policy_with_http_info(
        &self,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
        if_none_match: Option<&str>,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicy>, ApiError> {
        let parts = RequestParts::new(
            "CreateKubernetesSysConfigPolicy",
            RestMethod::Post,
            SYS_CONFIG_POLICIES_PATH,
        )
        .header_opt("If-Match", if_match)
        .header_opt("If-None-Match", if_none_match)
        .json_body(policy)?;
        self.client.send(parts).await
    }

    /// Reads a policy by its Moid.
    pub async fn get_kubernetes_sys_config_policy_by_moid(
        &self,
        moid: &str,
    ) -> Result<KubernetesSysConfigPolicy, ApiError> {
        self.get_kubernetes_sys_config_policy_by_moid_with_http_info(moid)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_kubernetes_sys_config_policy_by_moid_with_http_info(
        &self,
        moid: &str,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicy>, ApiError> {
        let parts = RequestParts::from_template(
            "GetKubernetesSysConfigPolicyByMoid",
            RestMethod::Get,
            SYS_CONFIG_POLICY_PATH,
            &[("Moid", moid)],
        )?;
        self.client.send(parts).await
    }

    /// Lists policies matching the OData query.
    pub async fn get_kubernetes_sys_config_policy_list(
        &self,
        query: &ListQuery,
    ) -> Result<KubernetesSysConfigPolicyList, ApiError> {
        self.get_kubernetes_sys_config_policy_list_with_http_info(query)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_kubernetes_sys_config_policy_list_with_http_info(
        &self,
        query: &ListQuery,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicyList>, ApiError> {
        let parts = query.pairs().into_iter().fold(
            RequestParts::new(
                "GetKubernetesSysConfigPolicyList",
                RestMethod::Get,
                SYS_CONFIG_POLICIES_PATH,
            ),
            |parts, (key, value)| parts.query(key, value),
        );
        self.client.send(parts).await
    }

    /// Applies a partial update.
    pub async fn patch_kubernetes_sys_config_policy(
        &self,
        moid: &str,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
    ) -> Result<KubernetesSysConfigPolicy, ApiError> {
        self.patch_kubernetes_sys_config_policy_with_http_info(moid, policy, if_match)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn patch_kubernetes_sys_config_policy_with_http_info(
        &self,
        moid: &str,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicy>, ApiError> {
        self.modify("PatchKubernetesSysConfigPolicy", RestMethod::Patch, moid, policy, if_match)
            .await
    }

    /// Updates a policy. Intersight accepts POST on an existing object as a
    /// partial update.
    pub async fn update_kubernetes_sys_config_policy(
        &self,
        moid: &str,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
    ) -> Result<KubernetesSysConfigPolicy, ApiError> {
        self.update_kubernetes_sys_config_policy_with_http_info(moid, policy, if_match)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn update_kubernetes_sys_config_policy_with_http_info(
        &self,
        moid: &str,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicy>, ApiError> {
        self.modify("UpdateKubernetesSysConfigPolicy", RestMethod::Post, moid, policy, if_match)
            .await
    }

    /// Deletes a policy.
    pub async fn delete_kubernetes_sys_config_policy(&self, moid: &str) -> Result<(), ApiError> {
        self.delete_kubernetes_sys_config_policy_with_http_info(moid)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn delete_kubernetes_sys_config_policy_with_http_info(
        &self,
        moid: &str,
    ) -> Result<HttpResponse<()>, ApiError> {
        let parts = RequestParts::from_template(
            "DeleteKubernetesSysConfigPolicy",
            RestMethod::Delete,
            SYS_CONFIG_POLICY_PATH,
            &[("Moid", moid)],
        )?;
        self.client.send(parts).await
    }

    async fn modify(
        &self,
        operation: &str,
        method: RestMethod,
        moid: &str,
        policy: &KubernetesSysConfigPolicy,
        if_match: Option<&str>,
    ) -> Result<HttpResponse<KubernetesSysConfigPolicy>, ApiError> {
        let parts = RequestParts::from_template(operation, method, SYS_CONFIG_POLICY_PATH, &[("Moid", moid)])?
            .header_opt("If-Match", if_match)
            .json_body(policy)?;
        self.client.send(parts).await
    }
}
