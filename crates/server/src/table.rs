//! Static route table: `(method, path)` to an operation and the access it needs.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    GetSettings,
    UpdateSettings,
    ListActiveServices,
    CreateService,
    UpdateService,
    DeleteService,
    ListAllServices,
    CreateOrder,
    ListOrders,
    UpdateOrderStatus,
}

#[derive(Copy, Clone, Debug)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub access: Access,
    pub operation: Operation,
    /// Status of a successful reply.
    pub status: u16,
}

const fn route(method: &'static str, path: &'static str, access: Access, operation: Operation, status: u16) -> Route {
    Route { method, path, access, operation, status }
}

pub static ROUTES: [Route; 10] = [
    route("GET", "settings", Access::Public, Operation::GetSettings, 200),
    route("PUT", "settings", Access::Admin, Operation::UpdateSettings, 200),
    route("GET", "services", Access::Public, Operation::ListActiveServices, 200),
    route("POST", "services", Access::Admin, Operation::CreateService, 201),
    route("PUT", "services/update", Access::Admin, Operation::UpdateService, 200),
    route("PUT", "services/delete", Access::Admin, Operation::DeleteService, 200),
    route("GET", "services/all", Access::Admin, Operation::ListAllServices, 200),
    route("POST", "orders", Access::Public, Operation::CreateOrder, 201),
    route("GET", "orders", Access::Admin, Operation::ListOrders, 200),
    route("PUT", "orders/status", Access::Admin, Operation::UpdateOrderStatus, 200),
];

/// Exact match on both method and path.
pub fn resolve(method: &str, path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.method == method && r.path == path)
}
