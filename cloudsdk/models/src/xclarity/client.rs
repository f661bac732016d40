//! Node resource client.

use cloudsdk::{ApiClient, ApiError, HttpResponse, RequestParts};
use cloudsdk_define::RestMethod;

use super::types::{Node, NodeList, NodeUpdate};
use super::{NODE_PATH, NODES_PATH};

/// Operations on `/nodes`.
///
/// ## Examples
///
/// ```no_run
/// use cloudsdk::ApiClient;
/// use cloudsdk_models::xclarity::{define_xclarity_api, NodeUpdate, NodesApi, PowerAction};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::for_api(&define_xclarity_api())?
///     .username("USERID")
///     .credential("PASSW0RD")
///     .build()?;
/// let nodes = NodesApi::new(client);
///
/// for node in nodes.list_nodes(Some(&["uuid", "name", "powerStatus"])).await?.node_list {
///     println!("{} {:?}", node.uuid, node.power_status);
/// }
/// nodes
///     .update_node("0123456789ABCDEF0123456789ABCDEF", &NodeUpdate::power(PowerAction::PowerOn))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NodesApi {
    client: ApiClient,
}

impl NodesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists managed nodes. `include_attributes` limits the attributes
    /// returned per node.
    pub async fn list_nodes(&self, include_attributes: Option<&[&str]>) -> Result<NodeList, ApiError> {
        self.list_nodes_with_http_info(include_attributes)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn list_nodes_with_http_info(
        &self,
        include_attributes: Option<&[&str]>,
    ) -> Result<HttpResponse<NodeList>, ApiError> {
        let parts = RequestParts::new("ListNodes", RestMethod::Get, NODES_PATH)
            .query_opt("includeAttributes", include_attributes.map(|attrs| attrs.join(",")));
        self.client.send(parts).await
    }

    /// Gets one node.
    pub async fn get_node(&self, uuid: &str) -> Result<Node, ApiError> {
        self.get_node_with_http_info(uuid)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_node_with_http_info(&self, uuid: &str) -> Result<HttpResponse<Node>, ApiError> {
        let parts = RequestParts::from_template("GetNode", RestMethod::Get, NODE_PATH, &[("uuid", uuid)])?;
        self.client.send(parts).await
    }

    /// Renames or relocates a node, or triggers a power action.
    pub async fn update_node(&self, uuid: &str, update: &NodeUpdate) -> Result<(), ApiError> {
        self.update_node_with_http_info(uuid, update)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn update_node_with_http_info(
        &self,
        uuid: &str,
        update: &NodeUpdate,
    ) -> Result<HttpResponse<()>, ApiError> {
        let parts = RequestParts::from_template("UpdateNode", RestMethod::Put, NODE_PATH, &[("uuid", uuid)])?
            .expect([200, 204])
            .json_body(update)?;
        self.client.send(parts).await
    }
}
