use foodloop_domain::config::{ApiConfig, DatabaseConfig, JwtConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 5000);
    assert!(server.ssl.is_none());
    assert_eq!(server.shutdown_grace_seconds, 30);

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "foodloop");
    assert!(db.credentials.is_none());

    let jwt = JwtConfig::default();
    assert_eq!(jwt.issuer, "foodloop");
    assert_eq!(jwt.ttl_seconds, 3600);
}

#[test]
fn api_config_deserializes_partial_documents() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "ws://db:8000", "namespace": "n", "database": "d" },
        "security": { "jwt": { "secret": "s3cret", "audience": "foodloop-app" } },
        "logging": { "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.shutdown_grace_seconds, 30);
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.security.jwt.secret, "s3cret");
    assert_eq!(cfg.security.jwt.issuer, "foodloop");
    assert_eq!(cfg.security.jwt.audience.as_deref(), Some("foodloop-app"));
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn deref_mut_copies_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9090;

    assert_eq!(original.server.port, 5000);
    assert_eq!(changed.server.port, 9090);
}
