use serde_json::{Value, json};

/// Batch analyzed when an invocation carries no `logs`.
pub fn sample_logs() -> Value {
    json!([
        {"timestamp": "2024-01-15T10:00:00Z", "path": "/api/users", "status": 200, "method": "GET", "response_time": 45.2},
        {"timestamp": "2024-01-15T10:00:01Z", "path": "/api/users", "status": 201, "method": "POST", "response_time": 120.5},
        {"timestamp": "2024-01-15T10:00:02Z", "path": "/api/orders", "status": 200, "method": "GET", "response_time": 78.3},
        {"timestamp": "2024-01-15T10:00:03Z", "path": "/api/orders", "status": 500, "method": "POST", "response_time": 1500.0, "message": "Database connection timeout"},
        {"timestamp": "2024-01-15T10:00:04Z", "path": "/api/products", "status": 404, "method": "GET", "response_time": 12.1, "message": "Product not found"},
        {"timestamp": "2024-01-15T10:00:05Z", "path": "/api/users", "status": 200, "method": "GET", "response_time": 38.9},
        {"timestamp": "2024-01-15T10:00:06Z", "path": "/health", "status": 200, "method": "GET", "response_time": 2.4},
        {"timestamp": "2024-01-15T10:00:07Z", "path": "/api/orders", "status": 503, "method": "GET", "response_time": 3000.0, "message": "Database connection timeout"},
        {"timestamp": "2024-01-15T10:00:08Z", "path": "/api/auth/login", "status": 401, "method": "POST", "response_time": 95.7, "message": "Invalid credentials"},
        {"timestamp": "2024-01-15T10:00:09Z", "path": "/api/products", "status": 200, "method": "GET", "response_time": 56.0}
    ])
}
