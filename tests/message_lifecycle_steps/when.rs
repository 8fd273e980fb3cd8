//! When steps for message lifecycle BDD scenarios.

use super::world::MessageWorld;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use eyre::WrapErr;
use pigeon::http::dto::CreateMessageResponse;
use rstest_bdd_macros::when;
use serde_json::json;

fn json_post(body: String) -> Result<Request<Body>, eyre::Report> {
    Request::builder()
        .method("POST")
        .uri("/message")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .wrap_err("build POST request")
}

fn empty(method: &str, uri: &str) -> Result<Request<Body>, eyre::Report> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .wrap_err("build request")
}

/// Posts `content` and remembers the returned identifier on success.
pub fn post_content(world: &mut MessageWorld, content: &str) -> Result<(), eyre::Report> {
    let request = json_post(json!({ "content": content }).to_string())?;
    let response = world.send(request)?;
    if response.status == StatusCode::CREATED {
        let created: CreateMessageResponse =
            serde_json::from_slice(&response.body).wrap_err("decode create response")?;
        world.created_id = Some(created.id);
    }
    Ok(())
}

#[when(r#"a client posts a message with content "{content}""#)]
fn client_posts_message(world: &mut MessageWorld, content: String) -> Result<(), eyre::Report> {
    post_content(world, &content)
}

#[when("a client posts a truncated JSON body")]
fn client_posts_truncated_body(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let request = json_post("{".to_owned())?;
    world.send(request)?;
    Ok(())
}

#[when("the client fetches the created message")]
fn client_fetches_created(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let uri = format!("/message/{}", world.created_id()?);
    world.send(empty("GET", &uri)?)?;
    Ok(())
}

#[when("the client deletes the created message")]
fn client_deletes_created(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let uri = format!("/message/{}", world.created_id()?);
    world.send(empty("DELETE", &uri)?)?;
    Ok(())
}

#[when(r#"the client deletes message "{id}""#)]
fn client_deletes_message(world: &mut MessageWorld, id: String) -> Result<(), eyre::Report> {
    world.send(empty("DELETE", &format!("/message/{id}"))?)?;
    Ok(())
}

#[when("the client lists all messages")]
fn client_lists_messages(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    world.send(empty("GET", "/messages")?)?;
    Ok(())
}
