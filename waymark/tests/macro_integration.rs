//! Integration tests for `#[derive(Routable)]`.

#![cfg(feature = "macros")]

use waymark::{Dispatcher, ParamValue, RoutableTarget, RouteContext, RouteRegistry, Routable};

#[derive(Clone, Debug, PartialEq)]
enum Origin {
    Feed,
}

#[derive(Routable)]
#[route(path = "user/profile")]
struct Profile {
    id: i64,
    #[route(rename = "tab")]
    initial_tab: String,
    #[route(skip)]
    #[allow(dead_code)]
    origin: Origin,
}

#[derive(Routable)]
#[route(path = "settings")]
struct Settings;

#[derive(Routable)]
#[route(path = "search")]
struct Search(#[route(rename = "q")] String, #[route(skip)] u8);

#[test]
fn test_derive_path_and_params() {
    let target = Profile {
        id: 7,
        initial_tab: "likes".into(),
        origin: Origin::Feed,
    };

    assert_eq!(target.path().value(), "user/profile");
    let params = target.parameters().expect("struct with fields has params");
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("id"), Some(&ParamValue::Int(7)));
    assert_eq!(params.get("tab"), Some(&ParamValue::from("likes")));
    assert!(!params.contains("origin"));
}

#[test]
fn test_derive_unit_struct() {
    assert_eq!(Settings.path().value(), "settings");
    assert!(Settings.parameters().is_none());
}

#[test]
fn test_derive_tuple_struct() {
    let params = Search("rust".into(), 3).parameters().unwrap();
    assert_eq!(params.extract::<String>("q"), Ok("rust".to_string()));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_derived_target_resolves() {
    let mut registry = RouteRegistry::new();
    registry.register_fn("user/profile", |ctx: RouteContext| {
        let id: i64 = ctx.get("id").ok()?;
        let tab: String = ctx.get("tab").ok()?;
        Some(format!("{id}:{tab}"))
    });
    let dispatcher = Dispatcher::new(registry);

    let target = Profile {
        id: 1,
        initial_tab: "posts".into(),
        origin: Origin::Feed,
    };
    assert_eq!(dispatcher.resolve(&target).as_deref(), Some("1:posts"));
}
