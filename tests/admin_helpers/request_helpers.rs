//! Request-side helpers through the facade

use adminkit::{humanize_string, patch_url, to_param_string, Error, Hooks, RequestContext};

#[test]
fn test_resource_naming() {
    let model = "OrderItem";
    assert_eq!(humanize_string(model), "Order Item");
    assert_eq!(to_param_string(model), "order_item");
}

#[test]
fn test_patch_url_error_is_shared_error_type() {
    let err = patch_url("https://[broken", &[("page", 1)]).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_time_round_trip_through_hooks() {
    let hooks = Hooks::default();
    let ctx = RequestContext::parse("https://shop.test/admin").unwrap();
    let time = hooks.parse_time("2024-12-31 23:59", &ctx).unwrap();
    let text = hooks.format_time(&time, "", &ctx);
    assert_eq!(text, "2024-12-31 23:59");
    assert_eq!(hooks.parse_time(&text, &ctx).unwrap(), time);
}
