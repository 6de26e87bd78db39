//! Resolution, push and present through the public API.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use waymark::{
    Container, Dispatcher, Invoker, RegistryBuilder, RoutableTargetExt, Route, RouteContext,
    RouteRegistry,
    testing::{HostCall, RecordingHost, TreeHost},
};

mod common;
use common::{ContextProbe, Profile, Screen, Unregistered};

fn profile_dispatcher(probe: ContextProbe) -> Dispatcher<Screen> {
    let mut registry = RouteRegistry::new();
    registry.register_fn("user/profile", move |ctx: RouteContext| {
        let id: i64 = ctx.get("id").ok()?;
        probe.record(ctx);
        Some(Screen::named(&format!("profile-{id}")))
    });
    Dispatcher::new(registry)
}

#[test]
fn test_last_registration_runs() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let mut registry = RouteRegistry::new();
    let counter = first.clone();
    registry.register(
        "home",
        Invoker::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(Screen::named("first"))
        }),
    );
    let counter = second.clone();
    registry.register(
        "home",
        Invoker::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(Screen::named("second"))
        }),
    );

    let dispatcher = Dispatcher::new(registry);
    assert_eq!(
        dispatcher.resolve(&Route::new("home")),
        Some(Screen::named("second"))
    );
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unregistered_resolves_to_none() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    assert!(dispatcher.resolve(&Unregistered).is_none());
    assert!(dispatcher.resolve(&Route::new("unregistered")).is_none());
    assert!(dispatcher.registry().lookup("unregistered").is_none());
}

#[test]
fn test_handler_sees_path_and_params() {
    let probe = ContextProbe::default();
    let dispatcher = profile_dispatcher(probe.clone());

    let screen = Profile { id: 42 }.screen(&dispatcher);
    assert_eq!(screen, Some(Screen::named("profile-42")));

    let seen = probe.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path(), "user/profile");
    assert_eq!(seen[0].parameters(), &waymark::params! { "id" => 42 });
}

#[test]
fn test_missing_params_become_empty_map() {
    let probe = ContextProbe::default();
    let mut registry = RouteRegistry::new();
    let recorder = probe.clone();
    registry.register_fn("about", move |ctx: RouteContext| {
        recorder.record(ctx);
        Some(Screen::named("about"))
    });
    let dispatcher = Dispatcher::new(registry);

    assert!(dispatcher.resolve(&Route::new("about")).is_some());
    assert!(probe.seen()[0].parameters().is_empty());
}

#[test]
fn test_handler_can_decline() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    // No `id` parameter: the handler returns None.
    assert!(dispatcher.resolve(&Route::new("user/profile")).is_none());
}

#[test]
fn test_push_lands_on_selected_tab_stack() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let nav = Container::stack("nav", vec![Container::plain("feed")]);
    let nav_id = nav.id();
    let root = Container::tabbed("tabs", vec![nav, Container::plain("settings")], Some(0));
    let mut host = RecordingHost::new(root);

    assert!(Profile { id: 1 }.push(&dispatcher, &mut host, true));
    assert_eq!(
        host.calls(),
        [HostCall::Push {
            navigation: nav_id,
            screen: Screen::named("profile-1"),
            animated: true,
        }]
    );
}

#[test]
fn test_push_refused_without_resolution() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let mut host = RecordingHost::new(Container::stack("nav", vec![]));

    assert!(!dispatcher.push(&mut host, &Unregistered, true));
    assert!(host.calls().is_empty());
}

#[test]
fn test_push_refused_without_navigation_even_if_resolved() {
    let probe = ContextProbe::default();
    let dispatcher = profile_dispatcher(probe.clone());
    let mut host = RecordingHost::new(common::tabbed_stack_with_modal());

    assert!(!dispatcher.push(&mut host, &Profile { id: 3 }, true));
    assert!(host.calls().is_empty());
    // Resolution still ran before the container lookup failed.
    assert_eq!(probe.seen().len(), 1);

    let mut no_root: RecordingHost<Screen> = RecordingHost::empty();
    assert!(!dispatcher.push(&mut no_root, &Profile { id: 3 }, true));
    assert!(no_root.calls().is_empty());
}

#[test]
fn test_present_lands_on_topmost_modal() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let root = common::tabbed_stack_with_modal();
    let modal_id = waymark::locate::topmost_visible(&root).id();
    let mut host = RecordingHost::new(root);

    assert!(Profile { id: 5 }.present(&dispatcher, &mut host, false, None));
    assert_eq!(
        host.calls(),
        [HostCall::Present {
            presenter: modal_id,
            screen: Screen::named("profile-5"),
            animated: false,
            with_completion: false,
        }]
    );
}

#[test]
fn test_present_refused() {
    let dispatcher = profile_dispatcher(ContextProbe::default());

    let mut no_root: RecordingHost<Screen> = RecordingHost::empty();
    assert!(!dispatcher.present(&mut no_root, &Profile { id: 1 }, true, None));

    let mut host = RecordingHost::new(Container::plain("root"));
    assert!(!dispatcher.present(&mut host, &Unregistered, true, None));
    assert!(host.calls().is_empty());
}

#[test]
fn test_present_completion_runs_when_host_completes() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let mut host = RecordingHost::new(Container::plain("root"));
    let done = Arc::new(AtomicUsize::new(0));
    let flag = done.clone();

    let presented = dispatcher.present(
        &mut host,
        &Profile { id: 9 },
        true,
        Some(Box::new(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        })),
    );
    assert!(presented);
    assert_eq!(done.load(Ordering::SeqCst), 0);

    host.complete_all();
    assert_eq!(done.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_present_awaitable() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let mut host = RecordingHost::new(Container::plain("root"));

    let presented = dispatcher
        .present_awaitable(&mut host, &Profile { id: 2 }, true)
        .expect("target resolves");
    host.complete_all();
    assert_eq!(presented.await, Ok(()));
}

#[test]
fn test_navigation_flow_on_tree_host() {
    let dispatcher: Dispatcher<Container> = RegistryBuilder::new()
        .route("detail", |ctx: RouteContext| {
            let id: i64 = ctx.get("id").ok()?;
            Some(Container::plain(format!("detail-{id}")))
        })
        .route("compose", |_| {
            Some(Container::stack("compose-nav", vec![Container::plain("editor")]))
        })
        .build()
        .unwrap()
        .into();

    let root = Container::tabbed(
        "tabs",
        vec![Container::stack("nav", vec![Container::plain("feed")])],
        Some(0),
    );
    let mut host = TreeHost::new(root);

    // Push onto the tab's stack.
    assert!(dispatcher.push(&mut host, &Route::new("detail").param("id", 1), true));
    let tree = host.tree().unwrap();
    let detail_id = waymark::locate::topmost_visible(tree).id();
    assert_eq!(waymark::locate::topmost_visible(tree).name(), "detail-1");

    // Present a stack modally; it becomes the push target.
    assert!(dispatcher.present(&mut host, &Route::new("compose"), true, None));
    let tree = host.tree().unwrap();
    assert_eq!(
        waymark::locate::active_navigation(tree).map(Container::name),
        Some("compose-nav")
    );

    // Pushing now lands inside the modal stack.
    assert!(dispatcher.push(&mut host, &Route::new("detail").param("id", 2), true));
    let tree = host.tree().unwrap();
    let names: Vec<_> = waymark::locate::visible_path(tree)
        .into_iter()
        .map(Container::name)
        .collect();
    assert_eq!(names, ["tabs", "nav", "detail-1", "compose-nav", "detail-2"]);

    // Dismissing the modal hands pushes back to the tab's stack.
    let presenter = host.tree_mut().unwrap().find_mut(detail_id).unwrap();
    let dismissed = presenter.dismiss().unwrap();
    assert_eq!(dismissed.name(), "compose-nav");

    assert!(dispatcher.push(&mut host, &Route::new("detail").param("id", 3), true));
    let tree = host.tree().unwrap();
    assert_eq!(waymark::locate::topmost_visible(tree).name(), "detail-3");
    assert_eq!(tree.selected_child().unwrap().children().len(), 3);
}

#[test]
fn test_push_refused_under_tab_root_modal() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let mut host = RecordingHost::new(common::tab_root_with_modal());

    assert!(!dispatcher.push(&mut host, &Profile { id: 4 }, true));
    assert!(host.calls().is_empty());

    // Once the modal is gone the same tab stack receives the push.
    let mut uncovered = common::tab_root_with_modal();
    uncovered.dismiss();
    let nav_id = uncovered.selected_child().map(Container::id).unwrap();
    host.set_root(Some(uncovered));

    assert!(dispatcher.push(&mut host, &Profile { id: 4 }, true));
    assert!(matches!(
        host.calls(),
        [HostCall::Push { navigation, .. }] if *navigation == nav_id
    ));

    host.clear();
    assert!(host.calls().is_empty());
    host.set_root(None);
    assert!(!dispatcher.push(&mut host, &Profile { id: 4 }, true));
}

#[test]
fn test_dispatcher_returns_its_registry() {
    let dispatcher = profile_dispatcher(ContextProbe::default());
    let registry = dispatcher.into_registry();
    assert!(registry.contains("user/profile"));
    assert_eq!(registry.len(), 1);
}
