pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_failure_has_no_payload() {
        let v = serde_json::to_value(types::Envelope::failure("boom")).unwrap();
        assert_eq!(v, serde_json::json!({"success": false, "message": "boom"}));
    }
}
