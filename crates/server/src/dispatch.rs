//! The request handler: preflight, connect, route, authorize, run one statement,
//! serialize, release.

use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use common::types::Success;
use service::{catalog_service, order_service, settings_service};

use crate::auth::{AdminCredential, ADMIN_HEADER};
use crate::connector::Connector;
use crate::errors::DispatchError;
use crate::event::{ApiEvent, ApiResponse};
use crate::table::{self, Access, Operation, Route};

pub struct Dispatcher<C: Connector> {
    connector: C,
    credential: AdminCredential,
}

impl<C: Connector> Dispatcher<C> {
    pub fn new(connector: C, credential: AdminCredential) -> Self {
        Self { connector, credential }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Handle one event. OPTIONS is answered without touching the database; every
    /// other request gets its own connection, released before returning on success
    /// and on error alike.
    #[instrument(name = "dispatch", skip_all, fields(method = %event.method(), path = %event.path()))]
    pub async fn dispatch(&self, event: &ApiEvent) -> Result<ApiResponse, DispatchError> {
        let method = event.method();
        if method == "OPTIONS" {
            return Ok(ApiResponse::preflight());
        }

        let conn = self
            .connector
            .connect()
            .await
            .map_err(|e| DispatchError::Connect(e.to_string()))?;

        let outcome = self.handle(&conn, &method, event).await;

        if let Err(e) = self.connector.release(conn).await {
            warn!(error = %e, "connection release failed");
        }

        match &outcome {
            Ok(resp) => info!(status = resp.status_code, "request_dispatched"),
            Err(e) => error!(error = %e, "request_failed"),
        }
        outcome
    }

    async fn handle(
        &self,
        conn: &DatabaseConnection,
        method: &str,
        event: &ApiEvent,
    ) -> Result<ApiResponse, DispatchError> {
        let Some(route) = table::resolve(method, event.path()) else {
            return Ok(ApiResponse::not_found());
        };
        if route.access == Access::Admin && !self.credential.verify(event.header(ADMIN_HEADER)) {
            warn!(operation = ?route.operation, "admin_auth_rejected");
            return Ok(ApiResponse::unauthorized());
        }
        run(route, conn, event).await
    }
}

fn body<T: serde::de::DeserializeOwned>(event: &ApiEvent) -> Result<T, DispatchError> {
    event.json_body().map_err(|e| DispatchError::Body(e.to_string()))
}

fn reply<T: Serialize>(route: &Route, value: &T) -> Result<ApiResponse, DispatchError> {
    ApiResponse::json(route.status, value).map_err(|e| DispatchError::Encode(e.to_string()))
}

async fn run(route: &Route, conn: &DatabaseConnection, event: &ApiEvent) -> Result<ApiResponse, DispatchError> {
    match route.operation {
        Operation::GetSettings => match settings_service::current_settings(conn).await? {
            Some(settings) => reply(route, &settings),
            None => reply(route, &serde_json::json!({})),
        },
        Operation::UpdateSettings => {
            settings_service::update_settings(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
        Operation::ListActiveServices => reply(route, &catalog_service::list_active(conn).await?),
        Operation::CreateService => {
            catalog_service::create_service(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
        Operation::UpdateService => {
            catalog_service::update_service(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
        Operation::DeleteService => {
            catalog_service::deactivate_service(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
        Operation::ListAllServices => reply(route, &catalog_service::list_all(conn).await?),
        Operation::CreateOrder => {
            order_service::create_order(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
        Operation::ListOrders => reply(route, &order_service::list_orders(conn).await?),
        Operation::UpdateOrderStatus => {
            order_service::update_order_status(conn, body(event)?).await?;
            reply(route, &Success::default())
        }
    }
}
