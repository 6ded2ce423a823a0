// Route definitions

use std::convert::Infallible;

use crate::handlers;
use crate::store::SharedStore;
use warp::Filter;

/// Request headers browsers may send cross-origin
const ALLOWED_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "origin",
    "pragma",
    "x-requested-with",
];

pub fn configure_routes(
    store: SharedStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let health = warp::path::end()
        .and(warp::get())
        .and_then(handlers::health_handler);

    // GET /allGroups
    let all_groups = warp::path!("allGroups")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::all_groups_handler);

    // POST /createGroup
    let create_group = warp::path!("createGroup")
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(handlers::json_body())
        .and_then(handlers::create_group_handler);

    // GET /getGroup/{groupId}
    let get_group = warp::path!("getGroup" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_group_handler);

    // GET /getMessagesForGroup/{groupId}
    let get_messages = warp::path!("getMessagesForGroup" / String)
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_messages_for_group_handler);

    // POST /createMessage
    let create_message = warp::path!("createMessage")
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(handlers::json_body())
        .and_then(handlers::create_message_handler);

    // GET /groupList?startAfter=&limit=
    let group_list = warp::path!("groupList")
        .and(warp::get())
        .and(warp::query())
        .and(with_store(store))
        .and_then(handlers::group_list_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(ALLOWED_HEADERS.to_vec());

    health
        .or(all_groups)
        .or(create_group)
        .or(get_group)
        .or(get_messages)
        .or(create_message)
        .or(group_list)
        .recover(handlers::handle_rejection)
        .with(cors)
}

fn with_store(store: SharedStore) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}
