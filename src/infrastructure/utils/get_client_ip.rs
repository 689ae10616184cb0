use actix_web::HttpRequest;

use crate::constants::UNKNOWN_CLIENT;

/// Identifies the client for rate limiting: the first hop of
/// `X-Forwarded-For`, then `X-Real-IP`, then the shared "unknown" bucket.
pub fn get_client_ip(req: &HttpRequest) -> String {
    forwarded_for(req)
        .or_else(|| header_value(req, "x-real-ip"))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn forwarded_for(req: &HttpRequest) -> Option<String> {
    let value = header_value(req, "x-forwarded-for")?;
    value
        .split(',')
        .map(str::trim)
        .find(|hop| !hop.is_empty())
        .map(str::to_string)
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn prefers_first_forwarded_hop() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .insert_header(("x-real-ip", "10.0.0.9"))
            .to_http_request();
        assert_eq!(get_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_real_ip() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "  "))
            .insert_header(("x-real-ip", "198.51.100.4"))
            .to_http_request();
        assert_eq!(get_client_ip(&req), "198.51.100.4");
    }

    #[test]
    fn unattributable_clients_share_a_bucket() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(get_client_ip(&req), UNKNOWN_CLIENT);
    }
}
