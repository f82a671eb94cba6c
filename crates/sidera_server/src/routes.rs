//! Route dispatch for the content API and admin surface.
//!
//! Dispatch is a pure function of (method, path, query, config) so every
//! route can be exercised in tests without a listener.

use serde_json::json;
use sidera_config::SideraConfig;
use sidera_signs::{Placement, Sign};

use crate::admin;
use crate::query::query_param;
use crate::response::ApiResponse;

/// Session cookie expiry sent with the logout redirect.
const CLEAR_SESSION_COOKIE: &str = "sidera_session=; Max-Age=0; Path=/; HttpOnly";

/// Dispatch one request to its handler.
pub fn dispatch(method: &str, path: &str, query: &str, config: &SideraConfig) -> ApiResponse {
    match (method, path) {
        ("GET", "/") => ApiResponse::see_other("/admin"),
        ("GET", "/admin") => ApiResponse::html(admin::render_dashboard()),
        ("POST", "/api/auth/logout") => logout(config),
        ("GET", "/api/health") => ApiResponse::json(200, json!({ "status": "ok" }).to_string()),
        ("GET", "/api/stats") => stats(),
        ("GET", "/api/compatibility") => compatibility(query, config),
        ("GET", "/api/compatibility/all") => compatibility_all(query, config),
        ("GET", "/api/content") => content(query),
        ("GET", "/api/content/placement") => content_by_placement(query),
        ("GET", "/api/content/sign") => content_by_sign(query),
        _ => ApiResponse::error(404, "not found"),
    }
}

/// Expire the session cookie and send the client to the login route.
///
/// The redirect is unconditional: whatever else happens during logout, the
/// client always navigates.
fn logout(config: &SideraConfig) -> ApiResponse {
    ApiResponse::see_other(&config.server.login_path)
        .with_header("Set-Cookie", CLEAR_SESSION_COOKIE.to_string())
}

fn stats() -> ApiResponse {
    let body = json!({
        "compatibility_entries": sidera_compat::entry_count(),
        "content_entries": sidera_content::entry_count(),
    });
    ApiResponse::json(200, body.to_string())
}

fn compatibility(query: &str, config: &SideraConfig) -> ApiResponse {
    let Some(user) = query_param(query, "user") else {
        return ApiResponse::error(400, "missing query parameter: user");
    };
    let Some(other) = query_param(query, "other") else {
        return ApiResponse::error(400, "missing query parameter: other");
    };

    if config.content.strict_signs {
        return match sidera_compat::compatibility_strict(&user, &other) {
            Ok(record) => json_ok(&record),
            Err(e) => ApiResponse::error(400, &e.to_string()),
        };
    }
    json_ok(&sidera_compat::compatibility(&user, &other))
}

fn compatibility_all(query: &str, config: &SideraConfig) -> ApiResponse {
    let Some(sign) = query_param(query, "sign") else {
        return ApiResponse::error(400, "missing query parameter: sign");
    };

    if config.content.strict_signs && Sign::parse(&sign).is_none() {
        return ApiResponse::error(400, &format!("unknown zodiac sign: {sign:?}"));
    }
    json_ok(&sidera_compat::compatibility_for_all(&sign))
}

fn content(query: &str) -> ApiResponse {
    let Some(sign) = query_param(query, "sign") else {
        return ApiResponse::error(400, "missing query parameter: sign");
    };
    let Some(placement) = query_param(query, "placement") else {
        return ApiResponse::error(400, "missing query parameter: placement");
    };

    // Content keys are exact: no normalization, matching the resolver.
    match sidera_content::placement_content_by_key(&sign, &placement) {
        Some(entry) => json_ok(entry),
        None => ApiResponse::error(404, "not found"),
    }
}

fn content_by_placement(query: &str) -> ApiResponse {
    let Some(key) = query_param(query, "placement") else {
        return ApiResponse::error(400, "missing query parameter: placement");
    };
    match Placement::from_key(&key) {
        Some(placement) => json_ok(&sidera_content::content_for_placement(placement)),
        None => ApiResponse::error(404, "not found"),
    }
}

fn content_by_sign(query: &str) -> ApiResponse {
    let Some(key) = query_param(query, "sign") else {
        return ApiResponse::error(400, "missing query parameter: sign");
    };
    match Sign::from_key(&key) {
        Some(sign) => json_ok(&sidera_content::content_for_sign(sign)),
        None => ApiResponse::error(404, "not found"),
    }
}

fn json_ok<T: serde::Serialize>(value: &T) -> ApiResponse {
    match serde_json::to_string(value) {
        Ok(body) => ApiResponse::json(200, body),
        Err(e) => ApiResponse::error(500, &format!("serialization failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn get(path: &str, query: &str) -> ApiResponse {
        dispatch("GET", path, query, &SideraConfig::default())
    }

    fn body_json(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).expect("json body")
    }

    #[test]
    fn root_redirects_to_admin() {
        let response = get("/", "");
        assert_eq!(response.status, 303);
        assert_eq!(response.headers, vec![("Location", "/admin".to_string())]);
    }

    #[test]
    fn admin_serves_html() {
        let response = get("/admin", "");
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type, "text/html; charset=utf-8");
        assert!(response.body.contains("Sidera Admin"));
    }

    #[test]
    fn health_is_ok() {
        let response = get("/api/health", "");
        assert_eq!(response.status, 200);
        assert_eq!(body_json(&response)["status"], "ok");
    }

    #[test]
    fn stats_reports_table_sizes() {
        let response = get("/api/stats", "");
        let body = body_json(&response);
        assert_eq!(body["compatibility_entries"], 144);
        assert_eq!(body["content_entries"], 144);
    }

    #[test]
    fn logout_always_redirects_and_clears_cookie() {
        let response = dispatch("POST", "/api/auth/logout", "", &SideraConfig::default());
        assert_eq!(response.status, 303);
        assert!(
            response
                .headers
                .contains(&("Location", "/login".to_string()))
        );
        assert!(
            response
                .headers
                .iter()
                .any(|(name, value)| *name == "Set-Cookie" && value.contains("Max-Age=0"))
        );
    }

    #[test]
    fn compatibility_resolves_pair() {
        let response = get("/api/compatibility", "user=aries&other=libra");
        assert_eq!(response.status, 200);
        let body = body_json(&response);
        assert_eq!(body["user_sign"], "aries");
        assert_eq!(body["other_sign"], "libra");
        assert!(body["score"].is_u64());
    }

    #[test]
    fn compatibility_unknown_sign_serves_fallback_by_default() {
        let response = get("/api/compatibility", "user=ophiuchus&other=aries");
        assert_eq!(response.status, 200);
        let body = body_json(&response);
        assert_eq!(body["heading"], "Ophiuchus + Aries");
        assert!(body.get("score").is_none());
    }

    #[test]
    fn compatibility_strict_rejects_unknown_sign() {
        let mut config = SideraConfig::default();
        config.content.strict_signs = true;
        let response = dispatch(
            "GET",
            "/api/compatibility",
            "user=ophiuchus&other=aries",
            &config,
        );
        assert_eq!(response.status, 400);
    }

    #[test]
    fn compatibility_missing_param_is_400() {
        let response = get("/api/compatibility", "user=aries");
        assert_eq!(response.status, 400);
        assert_eq!(
            body_json(&response)["error"],
            "missing query parameter: other"
        );
    }

    #[test]
    fn compatibility_all_returns_twelve() {
        let response = get("/api/compatibility/all", "sign=leo");
        assert_eq!(response.status, 200);
        let body = body_json(&response);
        assert_eq!(body.as_array().unwrap().len(), 12);
        assert_eq!(body[0]["other_sign"], "aries");
        assert_eq!(body[11]["other_sign"], "pisces");
    }

    #[test]
    fn content_found_and_absent() {
        let found = get("/api/content", "sign=aries&placement=sun");
        assert_eq!(found.status, 200);
        assert_eq!(body_json(&found)["title"], "ARIES");

        let absent = get("/api/content", "sign=aries&placement=nonexistent-planet");
        assert_eq!(absent.status, 404);
        assert_eq!(body_json(&absent)["error"], "not found");
    }

    #[test]
    fn content_keys_are_exact() {
        let response = get("/api/content", "sign=Aries&placement=sun");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn content_by_placement_lists_twelve() {
        let response = get("/api/content/placement", "placement=moon");
        assert_eq!(response.status, 200);
        assert_eq!(body_json(&response).as_array().unwrap().len(), 12);
    }

    #[test]
    fn content_by_sign_lists_twelve() {
        let response = get("/api/content/sign", "sign=pisces");
        assert_eq!(response.status, 200);
        assert_eq!(body_json(&response).as_array().unwrap().len(), 12);
    }

    #[test]
    fn unknown_route_is_404() {
        let response = get("/api/unknown", "");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn wrong_method_is_404() {
        let response = dispatch("POST", "/api/health", "", &SideraConfig::default());
        assert_eq!(response.status, 404);
    }
}
