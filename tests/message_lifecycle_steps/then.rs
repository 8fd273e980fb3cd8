//! Then steps for message lifecycle BDD scenarios.

use super::world::MessageWorld;
use eyre::WrapErr;
use pigeon::http::dto::{CreateMessageResponse, MessageResponse};
use rstest_bdd_macros::then;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &MessageWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.last()?.status.as_u16();
    eyre::ensure!(actual == status, "expected status {status}, got {actual}");
    Ok(())
}

#[then("the response carries a message id")]
fn response_carries_id(world: &MessageWorld) -> Result<(), eyre::Report> {
    let created: CreateMessageResponse = serde_json::from_slice(&world.last()?.body)
        .wrap_err("decode create response")?;
    eyre::ensure!(!created.id.is_empty(), "expected a non-empty message id");
    Ok(())
}

#[then(r#"the fetched message has content "{content}""#)]
fn fetched_message_has_content(world: &MessageWorld, content: String) -> Result<(), eyre::Report> {
    let message: MessageResponse =
        serde_json::from_slice(&world.last()?.body).wrap_err("decode message response")?;
    eyre::ensure!(
        message.content == content,
        "expected content {content:?}, got {:?}",
        message.content
    );
    eyre::ensure!(
        message.id == world.created_id()?,
        "fetched message id does not match the created id"
    );
    Ok(())
}

#[then("the listing contains {count:usize} messages")]
fn listing_contains(world: &MessageWorld, count: usize) -> Result<(), eyre::Report> {
    let messages: Vec<MessageResponse> =
        serde_json::from_slice(&world.last()?.body).wrap_err("decode listing")?;
    eyre::ensure!(
        messages.len() == count,
        "expected {count} messages, got {}",
        messages.len()
    );
    Ok(())
}
