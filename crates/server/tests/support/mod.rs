#![allow(dead_code)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, MockDatabase, MockExecResult, Transaction};
use serde_json::Value;

use server::auth::AdminCredential;
use server::connector::Connector;
use server::{ApiEvent, ApiResponse, Dispatcher};

pub const SECRET: &str = "test-admin-secret";

/// Hands out handles onto one mock connection and counts acquire/release calls.
pub struct MockConnector {
    db: DatabaseConnection,
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl MockConnector {
    pub fn new(mock: MockDatabase) -> Self {
        Self { db: mock.into_connection(), opened: AtomicUsize::new(0), released: AtomicUsize::new(0) }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Statements executed so far (drains the log).
    pub fn transactions(&self) -> Vec<Transaction> {
        share(&self.db).into_transaction_log()
    }
}

/// Second handle onto the same mock state.
fn share(db: &DatabaseConnection) -> DatabaseConnection {
    match db {
        DatabaseConnection::MockDatabaseConnection(mock) => DatabaseConnection::MockDatabaseConnection(Arc::clone(mock)),
        _ => unreachable!("MockConnector only holds mock connections"),
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(share(&self.db))
    }

    async fn release(&self, conn: DatabaseConnection) -> Result<(), DbErr> {
        self.released.fetch_add(1, Ordering::SeqCst);
        conn.close().await
    }
}

/// Connector whose database is unreachable.
pub struct DownConnector {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl Connector for DownConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DbErr::Custom("connection refused".into()))
    }
}

pub fn dispatcher(mock: MockDatabase) -> Dispatcher<MockConnector> {
    Dispatcher::new(MockConnector::new(mock), AdminCredential::new(Some(SECRET.into())))
}

pub fn exec_ok(rows_affected: u64) -> MockExecResult {
    MockExecResult { last_insert_id: 0, rows_affected }
}

pub fn event(method: &str, path: &str, auth: Option<&str>, body: Option<Value>) -> ApiEvent {
    let mut headers = std::collections::HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    if let Some(a) = auth {
        headers.insert("x-admin-auth".to_string(), a.to_string());
    }
    ApiEvent {
        http_method: Some(method.to_string()),
        query_string_parameters: Some([("path".to_string(), path.to_string())].into_iter().collect()),
        headers: Some(headers),
        body: body.map(|b| b.to_string()),
    }
}

pub fn body_json(resp: &ApiResponse) -> Value {
    serde_json::from_str(&resp.body).expect("json body")
}
